//! Line-list generation for outlines

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Line list (vertex pairs) for a closed outline, last point joining the first
///
/// Fewer than 2 points produce nothing.
pub fn closed_outline(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, &p) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        vertices.push(Vertex::at(p, color));
        vertices.push(Vertex::at(next, color));
    }
    vertices
}

/// Line list for a rectangle's four edges
pub fn rect_outline(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    closed_outline(&rect.corners(), color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::vertex::colors;

    #[test]
    fn test_closed_outline_wraps_to_first() {
        let tri = [Vec2::ZERO, Vec2::X, Vec2::Y];
        let lines = closed_outline(&tri, colors::SHIP);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4].position, [0.0, 1.0]);
        assert_eq!(lines[5].position, [0.0, 0.0]);
    }

    #[test]
    fn test_degenerate_outline_is_empty() {
        assert!(closed_outline(&[], colors::SHIP).is_empty());
        assert!(closed_outline(&[Vec2::ONE], colors::SHIP).is_empty());
    }

    #[test]
    fn test_rect_outline_has_four_edges() {
        let rect = Rect::new(Vec2::ZERO, Vec2::new(4.0, 2.0));
        let lines = rect_outline(&rect, colors::BOUNDING_BOX);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[2].position, [4.0, 0.0]);
        assert_eq!(lines[3].position, [4.0, 2.0]);
    }
}
