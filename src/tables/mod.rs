//! Symbol table items and name-keyed tables

use crate::error::Result;
use crate::geometry::hole_layer_name;
use crate::io::dxf::{DxfGroup, DxfStreamWriter};
use indexmap::IndexMap;
use std::fmt;

pub mod appid;
pub mod dimstyle;
pub mod layer;
pub mod linetype;
pub mod textstyle;
pub mod ucs;
pub mod view;
pub mod vport;

pub use appid::AppId;
pub use dimstyle::DimStyle;
pub use layer::{Layer, LayerFlags};
pub use linetype::LineType;
pub use textstyle::TextStyle;
pub use ucs::Ucs;
pub use view::View;
pub use vport::VPort;

/// Decimals used for table vectors and sizes
pub const TABLE_PRECISION: usize = 6;

/// The symbol table kinds this codec interprets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    VPort,
    LineType,
    Layer,
    TextStyle,
    View,
    Ucs,
    AppId,
    DimStyle,
}

impl TableKind {
    /// Every kind, in the order tables are written
    pub const ALL: [TableKind; 8] = [
        TableKind::VPort,
        TableKind::TextStyle,
        TableKind::LineType,
        TableKind::Layer,
        TableKind::View,
        TableKind::Ucs,
        TableKind::AppId,
        TableKind::DimStyle,
    ];

    /// DXF name of the table and of its item markers
    pub fn name(&self) -> &'static str {
        match self {
            TableKind::VPort => "VPORT",
            TableKind::LineType => "LTYPE",
            TableKind::Layer => "LAYER",
            TableKind::TextStyle => "STYLE",
            TableKind::View => "VIEW",
            TableKind::Ucs => "UCS",
            TableKind::AppId => "APPID",
            TableKind::DimStyle => "DIMSTYLE",
        }
    }

    /// Look a kind up by its DXF name
    pub fn from_name(name: &str) -> Option<Self> {
        TableKind::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Base trait for all table items.
///
/// Name (code 2) and flags (code 70) are common to every kind and handled by
/// the table codec; `read_field` and `write_fields` cover the rest.
pub trait TableEntry: Default {
    /// Kind of table the item lives in
    const KIND: TableKind;

    /// Get the item's name
    fn name(&self) -> &str;

    /// Set the item's name
    fn set_name(&mut self, name: String);

    /// Standard flags (code 70)
    fn flags(&self) -> i32;

    /// Set the standard flags
    fn set_flags(&mut self, flags: i32);

    /// Apply one group of the item's run; codes the item has no field for are
    /// ignored
    fn read_field(&mut self, group: &DxfGroup) -> Result<()>;

    /// Write every field except the marker, name and flags
    fn write_fields<W: DxfStreamWriter>(&self, writer: &mut W) -> Result<()>;
}

/// Split a point group code into (point index, axis).
///
/// Codes 10-18 are X, 20-28 Y and 30-38 Z of points 0-8.
pub(crate) fn point_axis(code: i32) -> Option<(usize, usize)> {
    match code {
        10..=18 | 20..=28 | 30..=38 => Some(((code % 10) as usize, (code / 10 - 1) as usize)),
        _ => None,
    }
}

/// Table of items keyed by name
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T: TableEntry> {
    entries: IndexMap<String, T>,
}

impl<T: TableEntry> Table<T> {
    /// Create a new empty table
    pub fn new() -> Self {
        Table {
            entries: IndexMap::new(),
        }
    }

    /// Insert an item; an item with the same name is replaced and returned
    pub fn insert(&mut self, entry: T) -> Option<T> {
        self.entries.insert(entry.name().to_string(), entry)
    }

    /// Get an item by name
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    /// Get a mutable item by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries.get_mut(name)
    }

    /// Check if an item exists
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all items
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Get all item names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}

impl<T: TableEntry> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TableEntry> IntoIterator for Table<T> {
    type Item = T;
    type IntoIter = indexmap::map::IntoValues<String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl<T: TableEntry> Extend<T> for Table<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl<T: TableEntry> FromIterator<T> for Table<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Table::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

/// The symbol tables of a document; a kind absent from the source is `None`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tables {
    pub vports: Option<Table<VPort>>,
    pub line_types: Option<Table<LineType>>,
    pub layers: Option<Table<Layer>>,
    pub text_styles: Option<Table<TextStyle>>,
    pub views: Option<Table<View>>,
    pub ucss: Option<Table<Ucs>>,
    pub app_ids: Option<Table<AppId>>,
    pub dim_styles: Option<Table<DimStyle>>,
}

impl Tables {
    /// Create an empty set of tables
    pub fn new() -> Self {
        Self::default()
    }

    /// The STYLE, LTYPE and LAYER tables written in front of encoded features.
    ///
    /// Every layer name gets a LAYER item; with `hole_layers` each name is
    /// followed by its `_`-suffixed twin. An empty list yields layer "0".
    pub fn synthesized(layer_names: &[String], hole_layers: bool) -> Self {
        let mut layers = Table::new();
        let names: Vec<&str> = if layer_names.is_empty() {
            vec!["0"]
        } else {
            layer_names.iter().map(String::as_str).collect()
        };
        for name in names {
            layers.insert(Layer::synthesized(name));
            if hole_layers {
                layers.insert(Layer::synthesized(&hole_layer_name(name, true)));
            }
        }

        Tables {
            line_types: Some(std::iter::once(LineType::continuous()).collect()),
            layers: Some(layers),
            text_styles: Some(std::iter::once(TextStyle::standard()).collect()),
            ..Tables::default()
        }
    }

    /// Number of kinds present
    pub fn kind_count(&self) -> usize {
        [
            self.vports.is_some(),
            self.line_types.is_some(),
            self.layers.is_some(),
            self.text_styles.is_some(),
            self.views.is_some(),
            self.ucss.is_some(),
            self.app_ids.is_some(),
            self.dim_styles.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    /// Look up a layer by name
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.as_ref().and_then(|t| t.get(name))
    }
}
