//! Vertex types for 2D line rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Line-list vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(point: Vec2, color: [f32; 4]) -> Self {
        Self::new(point.x, point.y, color)
    }

    /// Raw bytes of a vertex slice, ready for a GPU buffer upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for game elements
pub mod colors {
    pub const SHIP: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BULLET: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const ASTEROID: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BOUNDING_BOX: [f32; 4] = [1.0, 0.43, 0.76, 1.0]; // Pink
    pub const TEXT: [f32; 4] = [0.96, 0.96, 0.96, 1.0];
    pub const BANNER: [f32; 4] = [0.9, 0.16, 0.22, 1.0]; // Red
}
