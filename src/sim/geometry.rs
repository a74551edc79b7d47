//! Local-to-world shape transforms and toroidal wrapping
//!
//! Every entity carries its outline in unit space. World space is reached by
//! rotating (degrees), scaling uniformly, then translating - always in that
//! order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Anything with a unit-space outline placed in the world
pub trait Body {
    fn position(&self) -> Vec2;
    /// Rotation in degrees
    fn rotation(&self) -> f32;
    fn scale(&self) -> f32;
    /// Unit-space outline, in winding order
    fn local_shape(&self) -> &[Vec2];
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Smallest rectangle containing every point (None for an empty slice)
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Closed-interval overlap (touching edges count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Corners in winding order, starting at `min`
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}

/// Place one unit-space point in the world
#[inline]
pub fn transform_point(point: Vec2, position: Vec2, rotation_deg: f32, scale: f32) -> Vec2 {
    Vec2::from_angle(rotation_deg.to_radians()).rotate(point) * scale + position
}

/// World-space outline of a body
pub fn world_polygon(body: &impl Body) -> Vec<Vec2> {
    let (pos, rot, scale) = (body.position(), body.rotation(), body.scale());
    body.local_shape()
        .iter()
        .map(|&p| transform_point(p, pos, rot, scale))
        .collect()
}

/// Bounding box from the unrotated local extents, scaled and centered on the body
///
/// Ignores rotation, so it does not tightly bound a rotated outline. The local
/// extents always include the origin.
pub fn local_bounding_box(body: &impl Body) -> Rect {
    let (min, max) = body
        .local_shape()
        .iter()
        .fold((Vec2::ZERO, Vec2::ZERO), |(min, max), p| (min.min(*p), max.max(*p)));
    let half = (max - min) * body.scale() * 0.5;
    let pos = body.position();
    Rect::new(pos - half, pos + half)
}

/// Tight bounding box of the rotated world outline
///
/// A body without an outline collapses to its position.
pub fn world_bounding_box(body: &impl Body) -> Rect {
    Rect::from_points(&world_polygon(body))
        .unwrap_or_else(|| Rect::new(body.position(), body.position()))
}

/// Wrap one coordinate into `[0, extent)`
///
/// Corrects by at most one period, so displacements must stay below `extent`.
#[inline]
pub fn wrap_axis(value: f32, extent: f32) -> f32 {
    let wrapped = if value < 0.0 {
        value + extent
    } else if value >= extent {
        value - extent
    } else {
        value
    };
    // -tiny + extent rounds up to extent in f32
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Wrap a position onto the toroidal play field
#[inline]
pub fn wrap_position(pos: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(wrap_axis(pos.x, bounds.x), wrap_axis(pos.y, bounds.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 450.0);

    struct Probe {
        pos: Vec2,
        rot: f32,
        scale: f32,
        shape: Vec<Vec2>,
    }

    impl Body for Probe {
        fn position(&self) -> Vec2 {
            self.pos
        }
        fn rotation(&self) -> f32 {
            self.rot
        }
        fn scale(&self) -> f32 {
            self.scale
        }
        fn local_shape(&self) -> &[Vec2] {
            &self.shape
        }
    }

    fn unit_square(pos: Vec2, rot: f32, scale: f32) -> Probe {
        Probe {
            pos,
            rot,
            scale,
            shape: vec![
                Vec2::new(-0.5, -0.5),
                Vec2::new(0.5, -0.5),
                Vec2::new(0.5, 0.5),
                Vec2::new(-0.5, 0.5),
            ],
        }
    }

    #[test]
    fn test_transform_order_rotate_scale_translate() {
        // (1, 0) rotated 90° -> (0, 1), scaled by 10 -> (0, 10), moved to (100, 50)
        let p = transform_point(Vec2::X, Vec2::new(100.0, 50.0), 90.0, 10.0);
        assert!((p - Vec2::new(100.0, 60.0)).length() < 1e-4);
    }

    #[test]
    fn test_world_polygon_keeps_order() {
        let probe = unit_square(Vec2::new(10.0, 10.0), 0.0, 2.0);
        let poly = world_polygon(&probe);
        assert_eq!(poly.len(), 4);
        assert_eq!(poly[0], Vec2::new(9.0, 9.0));
        assert_eq!(poly[2], Vec2::new(11.0, 11.0));
    }

    #[test]
    fn test_local_box_ignores_rotation() {
        let probe = unit_square(Vec2::new(50.0, 50.0), 45.0, 10.0);
        let loose = local_bounding_box(&probe);
        assert!((loose.width() - 10.0).abs() < 1e-4);
        assert_eq!(loose.center(), Vec2::new(50.0, 50.0));

        // Rotated square's diagonal sticks out of the loose box
        let tight = world_bounding_box(&probe);
        assert!(tight.width() > loose.width() + 4.0);
    }

    #[test]
    fn test_tight_box_matches_unrotated_outline() {
        let probe = unit_square(Vec2::new(5.0, 5.0), 0.0, 4.0);
        let tight = world_bounding_box(&probe);
        assert_eq!(tight, Rect::new(Vec2::new(3.0, 3.0), Vec2::new(7.0, 7.0)));
    }

    #[test]
    fn test_empty_shape_box() {
        let probe = Probe {
            pos: Vec2::new(3.0, 4.0),
            rot: 0.0,
            scale: 1.0,
            shape: Vec::new(),
        };
        assert!(world_polygon(&probe).is_empty());
        let rect = world_bounding_box(&probe);
        assert_eq!(rect.width(), 0.0);
        assert!(rect.contains(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::new(Vec2::splat(10.0), Vec2::splat(20.0));
        let c = Rect::new(Vec2::splat(10.5), Vec2::splat(20.0));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_wrap_correction() {
        assert_eq!(wrap_position(Vec2::new(-1.0, 10.0), BOUNDS).x, 799.0);
        assert_eq!(wrap_position(Vec2::new(800.0, 10.0), BOUNDS).x, 0.0);
        assert_eq!(wrap_position(Vec2::new(10.0, -1.0), BOUNDS).y, 449.0);
        assert_eq!(wrap_position(Vec2::new(10.0, 450.0), BOUNDS).y, 0.0);
    }

    #[test]
    fn test_wrap_tiny_negative_stays_in_range() {
        let x = wrap_axis(-1e-6, 800.0);
        assert!((0.0..800.0).contains(&x));
    }

    proptest! {
        #[test]
        fn prop_wrap_is_identity_in_bounds(x in 0.0f32..800.0, y in 0.0f32..450.0) {
            let p = Vec2::new(x, y);
            prop_assert_eq!(wrap_position(p, BOUNDS), p);
        }

        #[test]
        fn prop_wrap_lands_in_bounds(
            x in 0.0f32..800.0,
            y in 0.0f32..450.0,
            dx in -799.0f32..799.0,
            dy in -449.0f32..449.0,
        ) {
            let p = wrap_position(Vec2::new(x + dx, y + dy), BOUNDS);
            prop_assert!(p.x >= 0.0 && p.x < BOUNDS.x);
            prop_assert!(p.y >= 0.0 && p.y < BOUNDS.y);
        }
    }
}
