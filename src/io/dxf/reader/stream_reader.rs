//! DXF stream reader trait and coordinate assembly

use crate::error::{DxfError, Result};
use crate::io::dxf::group::DxfGroup;
use crate::types::Coordinate;
use encoding_rs::Encoding;

/// Sequential source of groups.
///
/// There is no push-back: a routine that reads a group it does not
/// interpret hands that group back to its caller as a return value.
pub trait DxfStreamReader {
    /// Read the next group; `None` at end of stream
    fn next_group(&mut self) -> Result<Option<DxfGroup>>;

    /// Line number of the last line read
    fn line_number(&self) -> usize;

    /// Reset the reader to the beginning
    fn reset(&mut self) -> Result<()>;

    /// Fallback encoding for lines that are not valid UTF-8
    fn set_encoding(&mut self, encoding: &'static Encoding);

    /// Read the next group, treating end of stream as fatal.
    ///
    /// `context` names what was being read and ends up in the error.
    fn read_group(&mut self, context: &str) -> Result<DxfGroup> {
        self.next_group()?
            .ok_or_else(|| DxfError::UnexpectedEndOfStream(context.to_string()))
    }

    /// Discard groups up to and including the marker `name`
    fn skip_past_marker(&mut self, name: &str, context: &str) -> Result<()> {
        loop {
            let group = self.read_group(context)?;
            if group.is_marker(name) {
                return Ok(());
            }
            if group.is_comment() {
                log::debug!("DXF comment: {}", group.value);
            }
        }
    }

    /// Discard groups up to the next marker and return it
    fn skip_to_marker(&mut self, context: &str) -> Result<DxfGroup> {
        loop {
            let group = self.read_group(context)?;
            if group.is_entity_marker() {
                return Ok(group);
            }
        }
    }
}

/// Collects the X, Y and Z groups of one coordinate.
///
/// `base` is the X code of the point (10 for the primary point, 11 for the
/// second, ...); Y and Z are `base + 10` and `base + 20`.
#[derive(Debug, Clone, Copy)]
pub struct PointReader {
    base: i32,
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
}

impl PointReader {
    /// Create a reader for the point starting at code `base`
    pub fn new(base: i32) -> Self {
        Self {
            base,
            x: None,
            y: None,
            z: None,
        }
    }

    /// Take the group if it belongs to this point. Returns `false` otherwise.
    pub fn accept(&mut self, group: &DxfGroup) -> Result<bool> {
        let slot = match group.code.checked_sub(self.base) {
            Some(0) => &mut self.x,
            Some(10) => &mut self.y,
            Some(20) => &mut self.z,
            _ => return Ok(false),
        };
        *slot = Some(group.as_double()?);
        Ok(true)
    }

    /// The coordinate, if both X and Y were seen
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::from_parts(self.x, self.y, self.z)
    }
}
