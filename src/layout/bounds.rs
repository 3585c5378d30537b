//! Rectangles in virtual-desktop space and the union/offset math over them.

/// Axis-aligned integer rectangle. `x`/`y` may be negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub fn translate(&self, offset: Offset) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Divides origin and size by `factor`, flooring each.
    pub fn scale_down(&self, factor: i32) -> Rect {
        Rect::new(
            self.x.div_euclid(factor),
            self.y.div_euclid(factor),
            self.width.div_euclid(factor),
            self.height.div_euclid(factor),
        )
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Grows `self` to cover `other`. Each edge moves independently, so the
    /// opposite edge of a moved origin stays where it was.
    pub fn grow_to_cover(&mut self, other: &Rect) {
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        if other.x < self.x {
            self.x = other.x;
        }
        if other.y < self.y {
            self.y = other.y;
        }

        self.width = right - self.x;
        self.height = bottom - self.y;
    }
}

/// Shift that moves a union's negative origin onto (0, 0).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

/// Smallest rectangle containing every input rectangle. An empty input yields
/// the zero rectangle.
pub fn union<'a, I>(rects: I) -> Rect
where
    I: IntoIterator<Item = &'a Rect>,
{
    let mut iter = rects.into_iter();
    let Some(first) = iter.next() else {
        return Rect::default();
    };

    iter.fold(*first, |mut acc, rect| {
        acc.grow_to_cover(rect);
        acc
    })
}

pub fn compute_offset(bounds: &Rect) -> Offset {
    Offset {
        x: if bounds.x < 0 { bounds.x.abs() } else { 0 },
        y: if bounds.y < 0 { bounds.y.abs() } else { 0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_side_by_side() {
        let rects = [Rect::new(0, 0, 1920, 1080), Rect::new(1920, 0, 1920, 1080)];
        let bounds = union(&rects);

        assert_eq!(bounds, Rect::new(0, 0, 3840, 1080));
        assert_eq!(compute_offset(&bounds), Offset { x: 0, y: 0 });
    }

    #[test]
    fn test_union_secondary_left_of_primary() {
        let rects = [Rect::new(-1920, 0, 1920, 1080), Rect::new(0, 0, 1920, 1080)];
        let bounds = union(&rects);

        assert_eq!(bounds, Rect::new(-1920, 0, 3840, 1080));
        let offset = compute_offset(&bounds);
        assert_eq!(offset, Offset { x: 1920, y: 0 });
        assert_eq!(rects[0].translate(offset), Rect::new(0, 0, 1920, 1080));
        assert_eq!(rects[1].translate(offset), Rect::new(1920, 0, 1920, 1080));
    }

    #[test]
    fn test_union_keeps_right_edge_when_origin_moves() {
        // Primary first, then a taller monitor up and to the left.
        let rects = [Rect::new(0, 0, 1920, 1080), Rect::new(-1280, -400, 1280, 1024)];
        let bounds = union(&rects);

        assert_eq!(bounds.x, -1280);
        assert_eq!(bounds.y, -400);
        assert_eq!(bounds.right(), 1920);
        assert_eq!(bounds.bottom(), 1080);
    }

    #[test]
    fn test_union_is_smallest_cover() {
        let rects = [
            Rect::new(100, 50, 800, 600),
            Rect::new(-640, 300, 640, 480),
            Rect::new(900, -200, 1024, 768),
            Rect::new(0, 0, 1920, 1080),
        ];
        let bounds = union(&rects);

        for r in &rects {
            assert!(bounds.contains_rect(r), "{r:?} not inside {bounds:?}");
        }

        // Every edge touches at least one input.
        assert!(rects.iter().any(|r| r.x == bounds.x));
        assert!(rects.iter().any(|r| r.y == bounds.y));
        assert!(rects.iter().any(|r| r.right() == bounds.right()));
        assert!(rects.iter().any(|r| r.bottom() == bounds.bottom()));
    }

    #[test]
    fn test_union_order_independent() {
        let a = [Rect::new(0, 0, 10, 10), Rect::new(-5, 20, 3, 3), Rect::new(30, -7, 2, 2)];
        let b = [a[2], a[0], a[1]];
        assert_eq!(union(&a), union(&b));
    }

    #[test]
    fn test_union_empty_is_zero() {
        assert_eq!(union(&Vec::<Rect>::new()), Rect::default());
    }

    #[test]
    fn test_offset_makes_every_rect_non_negative() {
        let rects = [
            Rect::new(-1920, -300, 1920, 1080),
            Rect::new(0, 0, 2560, 1440),
            Rect::new(2560, 200, 1080, 1920),
            Rect::new(-800, 1080, 800, 600),
        ];
        let bounds = union(&rects);
        let offset = compute_offset(&bounds);

        for r in &rects {
            let t = r.translate(offset);
            assert!(t.x >= 0 && t.y >= 0, "{t:?}");
        }

        let translated = bounds.translate(offset);
        assert_eq!((translated.x, translated.y), (0, 0));
    }

    #[test]
    fn test_scale_down_floors() {
        assert_eq!(Rect::new(1921, 7, 1919, 1083).scale_down(4), Rect::new(480, 1, 479, 270));
    }
}
