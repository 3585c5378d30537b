//! Full-resolution desktop composite with wrap-around tiling.
//!
//! The canvas is anchored at the virtual-desktop origin, the top-left corner
//! of the primary monitor, because the wallpaper is installed with the tiled
//! style and the OS starts tiling there. Monitors left of or above the
//! primary, and any image spilling past a canvas edge, are wrapped to the
//! opposite edge so the canvas behaves like a torus.

use std::path::Path;

use image::{Rgba, RgbaImage};

use super::draw::{blit, fill_rect, scale_to};
use crate::{
    assignments::Assignments,
    error::Result,
    image_cache::ImageCache,
    info,
    layout::{fit, Layout, Monitor, Rect},
};

pub const DESKTOP_BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Renders every monitor's image into a fresh canvas of the layout's size.
///
/// A decode failure aborts the whole pass; no partial canvas is returned.
pub fn compose_desktop(
    layout: &Layout,
    assignments: &Assignments,
    cache: &mut ImageCache,
) -> Result<RgbaImage> {
    let (width, height) = layout.canvas_size();
    let mut canvas = RgbaImage::from_pixel(width, height, DESKTOP_BACKGROUND);

    for monitor in layout.monitors() {
        draw_monitor(&mut canvas, monitor, assignments.get(monitor.index), cache)?;
    }

    Ok(canvas)
}

fn draw_monitor(
    canvas: &mut RgbaImage,
    monitor: &Monitor,
    path: Option<&Path>,
    cache: &mut ImageCache,
) -> Result<()> {
    let (canvas_w, canvas_h) = (canvas.width() as i32, canvas.height() as i32);

    for (x, y) in wrap_placements(monitor.rect, canvas_w, canvas_h) {
        let area = Rect::new(x, y, monitor.rect.width, monitor.rect.height);
        fill_rect(canvas, area, DESKTOP_BACKGROUND);
    }

    let Some(path) = path else {
        return Ok(());
    };

    // Held for this monitor only; the cache may let it go afterwards.
    let image = cache.resolve(path)?;
    let fitted = fit(image.width(), image.height(), monitor.rect).rect;

    let Some(scaled) = scale_to(&image, fitted.width, fitted.height) else {
        return Ok(());
    };

    let placements = wrap_placements(fitted, canvas_w, canvas_h);
    if placements.len() > 1 {
        info!(
            "[MULTIWALL][COMPOSE] Monitor {} image at {:?} wraps to {:?}",
            monitor.index + 1,
            fitted,
            placements
        );
    }

    for (x, y) in placements {
        blit(canvas, &scaled, x, y);
    }

    Ok(())
}

pub fn overflows(rect: Rect, canvas_w: i32, canvas_h: i32) -> bool {
    rect.x < 0 || rect.y < 0 || rect.right() > canvas_w || rect.bottom() > canvas_h
}

/// Top-left corners at which `rect` must be drawn.
///
/// Inside the canvas that is just its own origin. Otherwise the overflowing
/// coordinates are moved one canvas extent toward the opposite edge, giving
/// `x'`/`y'`, and the rect is drawn at `(x', y)`, `(x, y')` and `(x', y')`.
/// On an axis that does not overflow, the primed value equals the original.
pub fn wrap_placements(rect: Rect, canvas_w: i32, canvas_h: i32) -> Vec<(i32, i32)> {
    if !overflows(rect, canvas_w, canvas_h) {
        return vec![(rect.x, rect.y)];
    }

    let x = wrap_axis(rect.x, rect.width, canvas_w);
    let y = wrap_axis(rect.y, rect.height, canvas_h);

    vec![(x, rect.y), (rect.x, y), (x, y)]
}

fn wrap_axis(start: i32, len: i32, extent: i32) -> i32 {
    if start < 0 {
        extent + start
    } else if start + len > extent {
        start - extent
    } else {
        start
    }
}
