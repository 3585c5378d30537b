pub mod caption;
pub mod compositor;
pub mod draw;
pub mod preview;

pub use compositor::{compose_desktop, wrap_placements};
pub use preview::render_preview;
