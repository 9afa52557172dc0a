//! A 2D Euclidean geometry kernel.
//!
//! Shapes live in [`geometry`] and share the [`Shape2d`] contract: point
//! containment, distances, closest and farthest points, bounding boxes,
//! affine transforms, outline iteration and pairwise intersection.

pub mod error;
pub mod factory;
pub mod geometry;
pub mod math;
pub mod path;

pub use error::{EuclisError, Result};
pub use geometry::{Shape, Shape2d, ShapeKind};
pub use math::{Point2, Transform2d, Vector2};
pub use path::{PathElement, PathIterator, WindingRule};
