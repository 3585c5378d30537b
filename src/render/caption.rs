//! Monitor-number captions drawn with a built-in 5x7 digit font.

use image::{Rgba, RgbaImage};

use super::draw::fill_rect;
use crate::layout::Rect;

const GLYPH_W: i32 = 5;
const GLYPH_H: i32 = 7;

const CAPTION_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CAPTION_OUTLINE: Rgba<u8> = Rgba([0, 0, 0, 255]);

// One row per byte, bit 4 is the leftmost column.
const DIGITS: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

/// Pixel size of one font cell for a caption inside `bounds`. Glyphs are a
/// quarter of the area's height, never smaller than the native 7 rows.
pub fn cell_size(bounds: Rect) -> i32 {
    (bounds.height / 4 / GLYPH_H).max(1)
}

/// Rectangle covered by `text` when centered in `bounds` (outline excluded).
pub fn caption_rect(bounds: Rect, text: &str) -> Rect {
    let cell = cell_size(bounds);
    let chars = text.chars().count() as i32;
    let width = if chars == 0 {
        0
    } else {
        chars * GLYPH_W * cell + (chars - 1) * cell
    };
    let height = GLYPH_H * cell;

    Rect::new(
        bounds.x + (bounds.width - width) / 2,
        bounds.y + (bounds.height - height) / 2,
        width,
        height,
    )
}

/// Draws `text` centered in `bounds`: white digits with a black outline.
/// Characters other than ASCII digits leave a blank cell.
pub fn draw_caption(canvas: &mut RgbaImage, bounds: Rect, text: &str) {
    let cell = cell_size(bounds);
    let outline = (cell / 2).max(1);
    let area = caption_rect(bounds, text);

    for (color, grow) in [(CAPTION_OUTLINE, outline), (CAPTION_FILL, 0)] {
        for (i, ch) in text.chars().enumerate() {
            let Some(glyph) = ch.to_digit(10).map(|d| &DIGITS[d as usize]) else {
                continue;
            };
            let origin_x = area.x + i as i32 * (GLYPH_W + 1) * cell;

            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..GLYPH_W {
                    if bits & (1 << (GLYPH_W - 1 - col)) == 0 {
                        continue;
                    }
                    let cell_rect = Rect::new(
                        origin_x + col * cell - grow,
                        area.y + row as i32 * cell - grow,
                        cell + grow * 2,
                        cell + grow * 2,
                    );
                    fill_rect(canvas, cell_rect, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREY: Rgba<u8> = Rgba([90, 90, 90, 255]);

    #[test]
    fn test_caption_rect_centered() {
        let bounds = Rect::new(0, 0, 100, 60);
        // 60 / 4 = 15 → cell 2
        assert_eq!(cell_size(bounds), 2);
        assert_eq!(caption_rect(bounds, "1"), Rect::new(45, 23, 10, 14));
        assert_eq!(caption_rect(bounds, "12"), Rect::new(39, 23, 22, 14));
    }

    #[test]
    fn test_small_area_uses_native_size() {
        assert_eq!(cell_size(Rect::new(0, 0, 40, 12)), 1);
    }

    #[test]
    fn test_draw_caption_one() {
        let bounds = Rect::new(0, 0, 100, 60);
        let mut canvas = RgbaImage::from_pixel(100, 60, GREY);
        draw_caption(&mut canvas, bounds, "1");

        // Top of the stem of "1": column 2 of row 0.
        assert_eq!(*canvas.get_pixel(49, 23), CAPTION_FILL);
        // Left of the stem is outline.
        assert_eq!(*canvas.get_pixel(48, 27), CAPTION_OUTLINE);
        // Far corners untouched.
        assert_eq!(*canvas.get_pixel(0, 0), GREY);
        assert_eq!(*canvas.get_pixel(99, 59), GREY);
    }

    #[test]
    fn test_every_digit_has_ink() {
        for glyph in DIGITS {
            assert!(glyph.iter().any(|row| *row != 0));
            assert!(glyph.iter().all(|row| *row < 1 << GLYPH_W));
        }
    }
}
