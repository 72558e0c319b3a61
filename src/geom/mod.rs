//! Shape primitives and collision detection
//!
//! All shapes cache their bounding box and (for straight-edged shapes) their
//! boundary descriptors. Mutators keep those caches in step with the points.

pub mod boundary;
pub mod circle;
pub mod collision;
pub mod line;
pub mod polygon;
pub mod rect;

pub use boundary::{Boundary, Inside, LineEq};
pub use circle::Circle;
pub use collision::{ShapeRef, collide};
pub use line::Line;
pub use polygon::{Edge, Polygon};
pub use rect::Rect;
