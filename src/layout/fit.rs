use super::bounds::Rect;

/// Result of fitting an image into a target rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    pub rect: Rect,
    pub scale: f64,
}

/// Largest rectangle inside `target` with the image's aspect ratio, centered
/// on the axis that does not fill the target (letterbox / pillarbox).
///
/// Image dimensions must be non-zero.
pub fn fit(image_width: u32, image_height: u32, target: Rect) -> Fit {
    debug_assert!(image_width > 0 && image_height > 0, "zero-size image");

    let iw = i64::from(image_width);
    let ih = i64::from(image_height);
    let tw = i64::from(target.width);
    let th = i64::from(target.height);

    // height_ratio < width_ratio, compared without division
    let height_limited = th * iw < tw * ih;

    let (width, height, scale) = if height_limited {
        (iw * th / ih, th, th as f64 / ih as f64)
    } else {
        (tw, ih * tw / iw, tw as f64 / iw as f64)
    };

    let (width, height) = (width as i32, height as i32);
    let x = target.x + (target.width - width) / 2;
    let y = target.y + (target.height - height) / 2;

    Fit {
        rect: Rect::new(x, y, width, height),
        scale,
    }
}
