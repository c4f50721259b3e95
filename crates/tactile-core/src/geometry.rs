use crate::math::{Affine2, Vec2};

/// Axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl Size<f32> {
    pub const ZERO: Self = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl Rect<f32> {
    pub const ZERO: Self = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn from_size(size: Size<f32>) -> Self {
        Rect::new(0.0, 0.0, size.width, size.height)
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    pub fn size(&self) -> Size<f32> {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Edge-inclusive containment test.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Smallest rectangle enclosing both `self` and `other`.
    pub fn union(&self, other: &Rect<f32>) -> Rect<f32> {
        Rect::from_min_max(self.min().min(other.min()), self.max().max(other.max()))
    }

    /// Axis-aligned bounds of this rectangle after applying `transform`.
    pub fn transformed(&self, transform: &Affine2) -> Rect<f32> {
        let corners = [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y),
            Vec2::new(self.x, self.y + self.height),
            Vec2::new(self.x + self.width, self.y + self.height),
        ]
        .map(|corner| transform.transform_point2(corner));

        let min = corners
            .iter()
            .copied()
            .fold(Vec2::splat(f32::INFINITY), Vec2::min);
        let max = corners
            .iter()
            .copied()
            .fold(Vec2::splat(f32::NEG_INFINITY), Vec2::max);
        Rect::from_min_max(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_edge_inclusive() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(rect.contains(Vec2::new(110.0, 70.0)));
        assert!(rect.contains(Vec2::new(60.0, 45.0)));
        assert!(!rect.contains(Vec2::new(9.99, 45.0)));
        assert!(!rect.contains(Vec2::new(60.0, 70.01)));
    }

    #[test]
    fn test_transformed_scale_about_origin() {
        let rect = Rect::new(-5.0, -5.0, 10.0, 10.0);
        let scaled = rect.transformed(&Affine2::from_scale(Vec2::splat(2.0)));
        assert_eq!(scaled, Rect::new(-10.0, -10.0, 20.0, 20.0));
    }

    #[test]
    fn test_transformed_negative_scale_keeps_positive_extent() {
        let rect = Rect::new(0.0, 0.0, 10.0, 4.0);
        let flipped = rect.transformed(&Affine2::from_scale(Vec2::new(-1.0, 1.0)));
        assert_eq!(flipped, Rect::new(-10.0, 0.0, 10.0, 4.0));
    }

    #[test]
    fn test_union() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, -5.0, 10.0, 10.0);
        assert_eq!(a.union(&b), Rect::new(0.0, -5.0, 15.0, 15.0));
    }
}
