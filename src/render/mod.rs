//! Rendering output
//!
//! Builds line lists and text requests from the game state. Drawing them is
//! left to the frontend (window, GPU, terminal).

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, TextItem, build_frame};
pub use vertex::{Vertex, colors};
