//! Planar envelope used for the HEADER extents

use super::Coordinate;
use std::fmt;

/// 2D axis-aligned envelope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// Minimum X
    pub min_x: f64,
    /// Minimum Y
    pub min_y: f64,
    /// Maximum X
    pub max_x: f64,
    /// Maximum Y
    pub max_y: f64,
}

impl Envelope {
    /// Create an envelope from a single coordinate
    pub fn from_coordinate(c: &Coordinate) -> Self {
        Envelope {
            min_x: c.x,
            min_y: c.y,
            max_x: c.x,
            max_y: c.y,
        }
    }

    /// Create an envelope that contains all given coordinates
    pub fn from_coordinates<'a, I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut iter = coords.into_iter();
        let mut env = Envelope::from_coordinate(iter.next()?);
        for c in iter {
            env.expand_to_include(c);
        }
        Some(env)
    }

    /// Get the width of the envelope
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Get the height of the envelope
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Expand the envelope to include another coordinate
    pub fn expand_to_include(&mut self, c: &Coordinate) {
        self.min_x = self.min_x.min(c.x);
        self.min_y = self.min_y.min(c.y);
        self.max_x = self.max_x.max(c.x);
        self.max_y = self.max_y.max(c.y);
    }

    /// Merge with another envelope
    pub fn merge(&self, other: &Envelope) -> Envelope {
        Envelope {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Env[({}, {}) -> ({}, {})]",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
