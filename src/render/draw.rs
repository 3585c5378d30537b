//! Clipped raster primitives over `RgbaImage` canvases.

use std::borrow::Cow;

use image::{
    imageops::{self, FilterType},
    Rgba, RgbaImage,
};

use crate::layout::Rect;

/// Bicubic resampling for scaled wallpaper images.
pub const SCALE_FILTER: FilterType = FilterType::CatmullRom;

/// Intersection of `rect` with the canvas as pixel ranges, if non-empty.
fn clip(canvas: &RgbaImage, rect: Rect) -> Option<(u32, u32, u32, u32)> {
    let x0 = rect.x.max(0);
    let y0 = rect.y.max(0);
    let x1 = rect.right().min(canvas.width() as i32);
    let y1 = rect.bottom().min(canvas.height() as i32);

    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

pub fn fill_rect(canvas: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let Some((x0, y0, x1, y1)) = clip(canvas, rect) else {
        return;
    };

    for y in y0..y1 {
        for x in x0..x1 {
            canvas.put_pixel(x, y, color);
        }
    }
}

/// Outline of `rect` with a pen of `thickness` pixels centered on each edge.
pub fn stroke_rect(canvas: &mut RgbaImage, rect: Rect, thickness: i32, color: Rgba<u8>) {
    let half = thickness / 2;
    let span_w = rect.width + thickness;
    let span_h = rect.height + thickness;

    fill_rect(canvas, Rect::new(rect.x - half, rect.y - half, span_w, thickness), color);
    fill_rect(canvas, Rect::new(rect.x - half, rect.bottom() - half, span_w, thickness), color);
    fill_rect(canvas, Rect::new(rect.x - half, rect.y - half, thickness, span_h), color);
    fill_rect(canvas, Rect::new(rect.right() - half, rect.y - half, thickness, span_h), color);
}

/// Resamples `image` to `width`×`height`. `None` when either side is empty.
pub fn scale_to(image: &RgbaImage, width: i32, height: i32) -> Option<Cow<'_, RgbaImage>> {
    if width <= 0 || height <= 0 {
        return None;
    }

    let (width, height) = (width as u32, height as u32);
    if image.dimensions() == (width, height) {
        return Some(Cow::Borrowed(image));
    }

    Some(Cow::Owned(imageops::resize(image, width, height, SCALE_FILTER)))
}

/// Alpha-composites `image` with its top-left corner at (`x`, `y`). Anything
/// outside the canvas is dropped.
pub fn blit(canvas: &mut RgbaImage, image: &RgbaImage, x: i32, y: i32) {
    imageops::overlay(canvas, image, i64::from(x), i64::from(y));
}
