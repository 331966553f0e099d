//! Feature coordinates

use std::fmt;

/// A feature coordinate: planar X/Y plus an optional Z.
///
/// A missing Z is never written to a DXF stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Coordinate {
    /// Create a 2D coordinate
    pub const fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y, z: None }
    }

    /// Create a 3D coordinate
    pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Coordinate { x, y, z: Some(z) }
    }

    /// Build a coordinate from optional components.
    ///
    /// Returns `None` unless both X and Y are present and finite. A
    /// non-finite Z counts as missing.
    pub fn from_parts(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Option<Self> {
        match (x.filter(|v| v.is_finite()), y.filter(|v| v.is_finite())) {
            (Some(x), Some(y)) => Some(Coordinate {
                x,
                y,
                z: z.filter(|v| v.is_finite()),
            }),
            _ => None,
        }
    }

    /// Planar equality; Z is ignored
    pub fn equals_2d(&self, other: &Coordinate) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Distance in the XY plane
    pub fn distance_2d(&self, other: &Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.z {
            Some(z) => write!(f, "({} {} {})", self.x, self.y, z),
            None => write!(f, "({} {})", self.x, self.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_requires_x_and_y() {
        assert!(Coordinate::from_parts(Some(1.0), None, Some(3.0)).is_none());
        assert!(Coordinate::from_parts(None, Some(1.0), None).is_none());
        assert_eq!(
            Coordinate::from_parts(Some(1.0), Some(2.0), None),
            Some(Coordinate::new(1.0, 2.0))
        );
    }

    #[test]
    fn test_from_parts_rejects_non_finite() {
        assert!(Coordinate::from_parts(Some(f64::NAN), Some(2.0), None).is_none());
        assert!(Coordinate::from_parts(Some(1.0), Some(f64::INFINITY), None).is_none());
        assert_eq!(
            Coordinate::from_parts(Some(1.0), Some(2.0), Some(f64::NAN)),
            Some(Coordinate::new(1.0, 2.0))
        );
    }

    #[test]
    fn test_equals_2d_ignores_z() {
        let a = Coordinate::new_3d(1.0, 2.0, 3.0);
        let b = Coordinate::new(1.0, 2.0);
        assert!(a.equals_2d(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_distance_2d() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new_3d(3.0, 4.0, 100.0);
        assert_eq!(a.distance_2d(&b), 5.0);
    }
}
