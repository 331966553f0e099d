//! Group-code/value pairs, the unit of the DXF text format
//!
//! A DXF stream is a flat sequence of groups. Each group is two lines: an
//! integer code and a value line. Values are kept as text and converted
//! lazily by the component that interprets them, so a malformed number only
//! surfaces when someone actually needs it.

use crate::error::{DxfError, Result};
use std::fmt;

/// Section start marker
pub const SECTION: &str = "SECTION";
/// Section end marker
pub const ENDSEC: &str = "ENDSEC";
/// End of file marker
pub const EOF: &str = "EOF";
/// Table start marker
pub const TABLE: &str = "TABLE";
/// Table end marker
pub const ENDTAB: &str = "ENDTAB";
/// Polyline vertex marker
pub const VERTEX: &str = "VERTEX";
/// Polyline vertex sequence end marker
pub const SEQEND: &str = "SEQEND";

/// Group code of entity, section and table markers
pub const MARKER_CODE: i32 = 0;
/// Group code of header variable names
pub const VARIABLE_NAME_CODE: i32 = 9;
/// Group code of comments
pub const COMMENT_CODE: i32 = 999;

/// Broad value class of a group code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupCodeClass {
    /// 0: entity, section or table marker
    Marker,
    /// 1-9 and other string ranges
    String,
    /// 10-59 and other floating point ranges
    Double,
    /// 60-79 and other integer ranges
    Integer,
    /// 999
    Comment,
    /// Anything this codec has no class for
    Unknown,
}

impl GroupCodeClass {
    /// Classify a group code
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Marker,
            1..=9 | 100..=102 | 105 | 300..=369 | 390..=399 | 410..=419 | 430..=439
            | 470..=481 | 1000..=1009 => Self::String,
            10..=59 | 110..=149 | 210..=239 | 460..=469 | 1010..=1059 => Self::Double,
            60..=99 | 160..=179 | 270..=289 | 370..=389 | 400..=409 | 420..=429 | 440..=459
            | 1060..=1071 => Self::Integer,
            999 => Self::Comment,
            _ => Self::Unknown,
        }
    }
}

/// A single code/value group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DxfGroup {
    /// The group code
    pub code: i32,
    /// The value line, trimmed
    pub value: String,
}

impl DxfGroup {
    /// Create a new group
    pub fn new(code: i32, value: impl Into<String>) -> Self {
        Self {
            code,
            value: value.into(),
        }
    }

    /// Create a marker group (code 0)
    pub fn marker(name: impl Into<String>) -> Self {
        Self::new(MARKER_CODE, name)
    }

    /// Value class of this group's code
    pub fn class(&self) -> GroupCodeClass {
        GroupCodeClass::from_code(self.code)
    }

    /// The raw value
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Parse the value as a double
    pub fn as_double(&self) -> Result<f64> {
        self.value
            .trim()
            .parse::<f64>()
            .map_err(|_| self.malformed())
    }

    /// Parse the value as an integer.
    ///
    /// Some writers emit integer groups with a trailing `.0`; those are
    /// accepted as long as the fractional part is zero.
    pub fn as_int(&self) -> Result<i32> {
        let text = self.value.trim();
        if let Ok(v) = text.parse::<i32>() {
            return Ok(v);
        }
        match text.parse::<f64>() {
            Ok(v) if v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 => {
                Ok(v as i32)
            }
            _ => Err(self.malformed()),
        }
    }

    /// True for any code 0 group (an entity, section or table marker)
    pub fn is_entity_marker(&self) -> bool {
        self.code == MARKER_CODE
    }

    /// True when this is the code 0 marker with the given name
    pub fn is_marker(&self, name: &str) -> bool {
        self.code == MARKER_CODE && self.value == name
    }

    /// True for a code 999 comment
    pub fn is_comment(&self) -> bool {
        self.code == COMMENT_CODE
    }

    fn malformed(&self) -> DxfError {
        DxfError::MalformedNumber {
            code: self.code,
            value: self.value.clone(),
        }
    }
}

impl fmt::Display for DxfGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.code, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert_eq!(GroupCodeClass::from_code(0), GroupCodeClass::Marker);
        assert_eq!(GroupCodeClass::from_code(8), GroupCodeClass::String);
        assert_eq!(GroupCodeClass::from_code(10), GroupCodeClass::Double);
        assert_eq!(GroupCodeClass::from_code(50), GroupCodeClass::Double);
        assert_eq!(GroupCodeClass::from_code(62), GroupCodeClass::Integer);
        assert_eq!(GroupCodeClass::from_code(70), GroupCodeClass::Integer);
        assert_eq!(GroupCodeClass::from_code(999), GroupCodeClass::Comment);
        assert_eq!(GroupCodeClass::from_code(-1), GroupCodeClass::Unknown);
    }

    #[test]
    fn test_numeric_conversion() {
        assert_eq!(DxfGroup::new(10, "1.5").as_double().unwrap(), 1.5);
        assert_eq!(DxfGroup::new(10, " 1e3 ").as_double().unwrap(), 1000.0);
        assert_eq!(DxfGroup::new(62, "256").as_int().unwrap(), 256);
        assert_eq!(DxfGroup::new(70, "8.0").as_int().unwrap(), 8);
    }

    #[test]
    fn test_malformed_number() {
        let err = DxfGroup::new(20, "abc").as_double().unwrap_err();
        match err {
            DxfError::MalformedNumber { code, value } => {
                assert_eq!(code, 20);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(DxfGroup::new(62, "1.5").as_int().is_err());
    }

    #[test]
    fn test_markers() {
        let g = DxfGroup::marker("LINE");
        assert!(g.is_entity_marker());
        assert!(g.is_marker("LINE"));
        assert!(!g.is_marker("POINT"));
        assert!(!DxfGroup::new(8, "LINE").is_marker("LINE"));
        assert!(DxfGroup::new(999, "hi").is_comment());
        assert_eq!(g.to_string(), "0/LINE");
    }
}
