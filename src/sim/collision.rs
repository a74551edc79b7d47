//! Polygon collision detection
//!
//! Edge-crossing test between two outlines plus a single-vertex containment
//! fallback. Outlines here are small and roughly convex (ship, bullet,
//! asteroid), which is what the fallback relies on.

use glam::Vec2;

use super::geometry::Rect;

/// Below this |cross product| two segments are treated as parallel
const PARALLEL_EPSILON: f32 = 1e-6;

/// Intersection point of segments `p1-p2` and `p3-p4`, if they cross
///
/// Endpoints count as touching. Parallel (including collinear overlapping)
/// segments never intersect.
pub fn segments_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Vec2> {
    let r = p2 - p1;
    let s = p4 - p3;
    let denom = r.perp_dot(s);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let qp = p3 - p1;
    let t = qp.perp_dot(s) / denom;
    let u = qp.perp_dot(r) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(p1 + r * t)
    } else {
        None
    }
}

/// Ray-casting point-in-polygon test (fewer than 3 vertices: never inside)
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for (i, &pi) in polygon.iter().enumerate() {
        let pj = polygon[j];
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Closed outline edges, last vertex joining back to the first
///
/// Empty for fewer than 2 vertices.
pub fn edges(polygon: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = if polygon.len() < 2 { 0 } else { polygon.len() };
    (0..n).map(move |i| (polygon[i], polygon[(i + 1) % n]))
}

/// First crossing point between any edge of `a` and any edge of `b`
pub fn edge_crossing(a: &[Vec2], b: &[Vec2]) -> Option<Vec2> {
    edges(a).find_map(|(a1, a2)| edges(b).find_map(|(b1, b2)| segments_intersect(a1, a2, b1, b2)))
}

/// Polygon-vs-polygon intersection
///
/// True when any edges cross, or when the first vertex of `b` lies inside
/// `a`. Only that one vertex is checked, so the result is not symmetric:
/// `b` wholly inside `a` is caught, `a` wholly inside `b` is not. Callers
/// pass the larger outline as `a`.
pub fn polygons_intersect(a: &[Vec2], b: &[Vec2]) -> bool {
    if a.len() < 2 || b.len() < 2 {
        return false;
    }

    if edge_crossing(a, b).is_some() {
        return true;
    }

    point_in_polygon(b[0], a)
}

/// `polygons_intersect` behind a bounding-box reject
pub fn outlines_collide(a: &[Vec2], b: &[Vec2]) -> bool {
    match (Rect::from_points(a), Rect::from_points(b)) {
        (Some(ra), Some(rb)) if ra.overlaps(&rb) => polygons_intersect(a, b),
        _ => false,
    }
}
