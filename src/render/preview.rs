//! Quarter-scale, non-wrapping preview of the layout with numbered monitors.

use image::{Rgba, RgbaImage};

use super::{
    caption::draw_caption,
    draw::{blit, fill_rect, scale_to, stroke_rect},
};
use crate::{
    assignments::Assignments,
    error::Result,
    image_cache::ImageCache,
    layout::{fit, Layout, Rect, PREVIEW_DIVISOR},
};

/// Shows through wherever no monitor covers the bounding box.
pub const PREVIEW_BACKGROUND: Rgba<u8> = Rgba([240, 240, 240, 255]);
pub const MONITOR_BACKDROP: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const BORDER_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BORDER_THICKNESS: i32 = 4;

/// Monitor rectangle as it appears on the preview canvas.
pub fn preview_area(layout: &Layout, rect: Rect) -> Rect {
    rect.translate(layout.offset()).scale_down(PREVIEW_DIVISOR)
}

pub fn render_preview(
    layout: &Layout,
    assignments: &Assignments,
    cache: &mut ImageCache,
) -> Result<RgbaImage> {
    let (width, height) = layout.preview_size();
    let mut canvas = RgbaImage::from_pixel(width, height, PREVIEW_BACKGROUND);

    for monitor in layout.monitors() {
        let area = preview_area(layout, monitor.rect);
        fill_rect(&mut canvas, area, MONITOR_BACKDROP);

        if let Some(path) = assignments.get(monitor.index) {
            let image = cache.resolve(path)?;
            let fitted = fit(image.width(), image.height(), area).rect;
            if let Some(scaled) = scale_to(&image, fitted.width, fitted.height) {
                blit(&mut canvas, &scaled, fitted.x, fitted.y);
            }
        }

        draw_caption(&mut canvas, area, &(monitor.index + 1).to_string());
        stroke_rect(&mut canvas, area, BORDER_THICKNESS, BORDER_COLOR);
    }

    Ok(canvas)
}
