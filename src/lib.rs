//! Builds one wallpaper bitmap spanning every monitor of a multi-monitor
//! desktop, plus a small labelled preview of the layout.
//!
//! ```no_run
//! use multiwall::{compose_desktop, Assignments, ImageCache, Layout, Rect};
//!
//! let layout = Layout::from_rects(&[
//!     Rect::new(-1920, 0, 1920, 1080),
//!     Rect::new(0, 0, 1920, 1080),
//! ])?;
//! let mut assignments = Assignments::new(layout.monitor_count());
//! assignments.assign(0, "left.jpg")?;
//!
//! let canvas = compose_desktop(&layout, &assignments, &mut ImageCache::default())?;
//! # Ok::<(), multiwall::MultiWallError>(())
//! ```

pub mod logging;

pub mod assignments;
pub mod data_loaders;
pub mod display;
pub mod error;
pub mod image_cache;
pub mod layout;
pub mod paths;
pub mod render;
pub mod wallpaper;

pub use assignments::Assignments;
pub use error::{MultiWallError, Result};
pub use image_cache::{Bitmap, ImageCache};
pub use layout::{Layout, Monitor, Offset, Rect};
pub use render::{compose_desktop, render_preview};
pub use wallpaper::WallpaperStyle;
