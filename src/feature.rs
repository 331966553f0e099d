//! Feature records: one geometry plus the fixed DXF attribute schema

use crate::geometry::Geometry;
use std::fmt;

/// Line type meaning "inherit from the layer"
pub const LTYPE_BY_LAYER: &str = "BYLAYER";

/// Color index meaning "inherit from the layer"
pub const COLOR_BY_LAYER: i32 = 256;

/// Default text style of decoded TEXT entities
pub const DEFAULT_TEXT_STYLE: &str = "STANDARD";

/// The closed attribute schema exposed to hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Geometry,
    Layer,
    LType,
    Elevation,
    Thickness,
    Color,
    Text,
    TextHeight,
    TextRotation,
    TextStyle,
}

impl Attribute {
    /// Every attribute, in schema order
    pub const ALL: [Attribute; 10] = [
        Attribute::Geometry,
        Attribute::Layer,
        Attribute::LType,
        Attribute::Elevation,
        Attribute::Thickness,
        Attribute::Color,
        Attribute::Text,
        Attribute::TextHeight,
        Attribute::TextRotation,
        Attribute::TextStyle,
    ];

    /// Schema name of the attribute
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Geometry => "GEOMETRY",
            Attribute::Layer => "LAYER",
            Attribute::LType => "LTYPE",
            Attribute::Elevation => "ELEVATION",
            Attribute::Thickness => "THICKNESS",
            Attribute::Color => "COLOR",
            Attribute::Text => "TEXT",
            Attribute::TextHeight => "TEXT_HEIGHT",
            Attribute::TextRotation => "TEXT_ROTATION",
            Attribute::TextStyle => "TEXT_STYLE",
        }
    }

    /// Look an attribute up by its schema name
    pub fn from_name(name: &str) -> Option<Self> {
        Attribute::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Value type the schema declares for this attribute
    pub fn value_type(&self) -> AttributeType {
        match self {
            Attribute::Geometry => AttributeType::Geometry,
            Attribute::Layer | Attribute::LType | Attribute::Text | Attribute::TextStyle => {
                AttributeType::String
            }
            Attribute::Elevation
            | Attribute::Thickness
            | Attribute::TextHeight
            | Attribute::TextRotation => AttributeType::Double,
            Attribute::Color => AttributeType::Integer,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    Geometry,
    String,
    Double,
    Integer,
}

/// A typed attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Geometry(Geometry),
    String(String),
    Double(f64),
    Integer(i32),
}

/// A feature record
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// The geometry (`GEOMETRY`)
    pub geometry: Geometry,
    /// `LAYER`
    pub layer: Option<String>,
    /// `LTYPE`
    pub ltype: Option<String>,
    /// `ELEVATION`
    pub elevation: Option<f64>,
    /// `THICKNESS`
    pub thickness: Option<f64>,
    /// `COLOR` (256 = by layer)
    pub color: Option<i32>,
    /// `TEXT`; a non-null value makes a point encode as a TEXT entity
    pub text: Option<String>,
    /// `TEXT_HEIGHT`
    pub text_height: Option<f64>,
    /// `TEXT_ROTATION`
    pub text_rotation: Option<f64>,
    /// `TEXT_STYLE`
    pub text_style: Option<String>,
}

impl Feature {
    /// Create a feature with a geometry and every other attribute absent
    pub fn new(geometry: Geometry) -> Self {
        Feature {
            geometry,
            layer: None,
            ltype: None,
            elevation: None,
            thickness: None,
            color: None,
            text: None,
            text_height: None,
            text_rotation: None,
            text_style: None,
        }
    }

    /// Create a feature carrying the defaults every decoded entity starts with
    pub(crate) fn with_entity_defaults(geometry: Geometry) -> Self {
        Feature {
            ltype: Some(LTYPE_BY_LAYER.to_string()),
            thickness: Some(0.0),
            color: Some(COLOR_BY_LAYER),
            ..Feature::new(geometry)
        }
    }

    /// Set the layer
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }

    /// Set the text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the color index
    pub fn with_color(mut self, color: i32) -> Self {
        self.color = Some(color);
        self
    }

    /// Copy of this feature with another geometry; every other attribute is kept
    pub fn with_geometry(&self, geometry: Geometry) -> Self {
        Feature {
            geometry,
            ..self.clone()
        }
    }

    /// Read an attribute; absent attributes yield `None`
    pub fn get(&self, attribute: Attribute) -> Option<AttributeValue> {
        match attribute {
            Attribute::Geometry => Some(AttributeValue::Geometry(self.geometry.clone())),
            Attribute::Layer => self.layer.clone().map(AttributeValue::String),
            Attribute::LType => self.ltype.clone().map(AttributeValue::String),
            Attribute::Elevation => self.elevation.map(AttributeValue::Double),
            Attribute::Thickness => self.thickness.map(AttributeValue::Double),
            Attribute::Color => self.color.map(AttributeValue::Integer),
            Attribute::Text => self.text.clone().map(AttributeValue::String),
            Attribute::TextHeight => self.text_height.map(AttributeValue::Double),
            Attribute::TextRotation => self.text_rotation.map(AttributeValue::Double),
            Attribute::TextStyle => self.text_style.clone().map(AttributeValue::String),
        }
    }

    /// Write an attribute.
    ///
    /// `None`, or a value whose type does not match the schema, clears the
    /// attribute. The geometry cannot be cleared.
    pub fn set(&mut self, attribute: Attribute, value: Option<AttributeValue>) {
        match attribute {
            Attribute::Geometry => {
                if let Some(AttributeValue::Geometry(g)) = value {
                    self.geometry = g;
                }
            }
            Attribute::Layer => self.layer = string_value(value),
            Attribute::LType => self.ltype = string_value(value),
            Attribute::Elevation => self.elevation = double_value(value),
            Attribute::Thickness => self.thickness = double_value(value),
            Attribute::Color => {
                self.color = match value {
                    Some(AttributeValue::Integer(v)) => Some(v),
                    _ => None,
                }
            }
            Attribute::Text => self.text = string_value(value),
            Attribute::TextHeight => self.text_height = double_value(value),
            Attribute::TextRotation => self.text_rotation = double_value(value),
            Attribute::TextStyle => self.text_style = string_value(value),
        }
    }

    /// The LAYER attribute when present and not blank
    pub fn layer_name(&self) -> Option<&str> {
        self.layer.as_deref().filter(|l| !l.trim().is_empty())
    }

    /// Line type to write, `None` when absent or by layer
    pub(crate) fn explicit_ltype(&self) -> Option<&str> {
        self.ltype.as_deref().filter(|l| *l != LTYPE_BY_LAYER)
    }

    /// Color to write, `None` when absent or by layer
    pub(crate) fn explicit_color(&self) -> Option<i32> {
        self.color.filter(|c| *c != COLOR_BY_LAYER)
    }

    /// Thickness to write, `None` when absent or zero
    pub(crate) fn explicit_thickness(&self) -> Option<f64> {
        self.thickness.filter(|t| *t != 0.0)
    }

    /// Elevation to write, `None` when absent or zero
    pub(crate) fn explicit_elevation(&self) -> Option<f64> {
        self.elevation.filter(|e| *e != 0.0)
    }
}

fn string_value(value: Option<AttributeValue>) -> Option<String> {
    match value {
        Some(AttributeValue::String(s)) => Some(s),
        _ => None,
    }
}

fn double_value(value: Option<AttributeValue>) -> Option<f64> {
    match value {
        Some(AttributeValue::Double(v)) => Some(v),
        Some(AttributeValue::Integer(v)) => Some(f64::from(v)),
        _ => None,
    }
}
