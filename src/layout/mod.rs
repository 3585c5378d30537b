pub mod bounds;
pub mod fit;

pub use bounds::{compute_offset, union, Offset, Rect};
pub use fit::{fit, Fit};

use crate::error::{MultiWallError, Result};

/// Preview canvases are this many times smaller than the desktop on each axis.
pub const PREVIEW_DIVISOR: i32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    pub index: usize,
    pub primary: bool,
    pub rect: Rect,
}

impl Monitor {
    pub fn new(index: usize, rect: Rect) -> Self {
        Self {
            index,
            primary: rect.x == 0 && rect.y == 0,
            rect,
        }
    }
}

/// Geometry derived from one monitor configuration. Rebuild it whenever the
/// monitor set changes; it is never patched in place.
#[derive(Debug, Clone)]
pub struct Layout {
    monitors: Vec<Monitor>,
    bounds: Rect,
    offset: Offset,
}

impl Layout {
    pub fn new(monitors: Vec<Monitor>) -> Result<Self> {
        if monitors.is_empty() {
            return Err(MultiWallError::NoMonitors);
        }

        for monitor in &monitors {
            debug_assert!(
                monitor.rect.width > 0 && monitor.rect.height > 0,
                "zero-area monitor {}",
                monitor.index
            );
        }

        let bounds = union(monitors.iter().map(|m| &m.rect));
        let offset = compute_offset(&bounds);

        Ok(Self {
            monitors,
            bounds,
            offset,
        })
    }

    pub fn from_rects(rects: &[Rect]) -> Result<Self> {
        Self::new(
            rects
                .iter()
                .enumerate()
                .map(|(index, rect)| Monitor::new(index, *rect))
                .collect(),
        )
    }

    pub fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    pub fn monitor_count(&self) -> usize {
        self.monitors.len()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Monitor rectangle shifted into non-negative canvas space.
    pub fn translated(&self, position: usize) -> Option<Rect> {
        self.monitors
            .get(position)
            .map(|m| m.rect.translate(self.offset))
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.bounds.width.max(0) as u32,
            self.bounds.height.max(0) as u32,
        )
    }

    pub fn preview_size(&self) -> (u32, u32) {
        let (w, h) = self.canvas_size();
        let divisor = PREVIEW_DIVISOR as u32;
        (w / divisor, h / divisor)
    }
}
