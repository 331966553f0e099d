//! Core value types shared by the codec

pub mod bounds;
pub mod coordinate;
pub mod vector;

pub use bounds::Envelope;
pub use coordinate::Coordinate;
pub use vector::{Vector2, Vector3};
