//! Core data: bodies, their identifiers, and the unique pair set.

pub mod body;
pub mod pairs;
pub mod types;

pub use body::Body;
pub use pairs::{BodyPair, PairSet};
pub use types::{BodyId, Color, PointMass};
