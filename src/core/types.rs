use serde::{Deserialize, Serialize};

/// Common math types re-exported for convenience.
pub use glam::DVec2;

/// Stable identifier of a body, equal to its insertion index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(usize);

impl BodyId {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display attribute carried alongside a body for the host renderer.
///
/// The engine stores it and hands it back; it never reads the channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

/// Snapshot of the quantities a force law needs from a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    pub center: DVec2,
    pub mass: f64,
}

impl PointMass {
    pub fn new(center: DVec2, mass: f64) -> Self {
        Self { center, mass }
    }
}
