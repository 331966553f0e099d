//! Decoded DXF document

use crate::feature::Feature;
use crate::io::dxf::{collect_layer_names, DxfGroup};
use crate::notification::NotificationCollection;
use crate::tables::Tables;
use crate::types::Envelope;
use indexmap::IndexMap;

/// HEADER variables in source order: name (e.g. `$EXTMIN`) to the groups
/// that followed it
pub type HeaderVariables = IndexMap<String, Vec<DxfGroup>>;

/// Everything a decode produces
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// HEADER section variables
    pub header: HeaderVariables,

    /// Symbol tables from the TABLES section
    pub tables: Tables,

    /// Features from the BLOCKS and ENTITIES sections, in stream order
    features: Vec<Feature>,

    /// Notifications collected during the decode
    pub notifications: NotificationCollection,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decoded feature
    pub fn add_feature(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// Features in stream order
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Take the features out of the document
    pub fn into_features(self) -> Vec<Feature> {
        self.features
    }

    /// Number of features
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Values of a header variable
    pub fn header_variable(&self, name: &str) -> Option<&[DxfGroup]> {
        self.header.get(name).map(Vec::as_slice)
    }

    /// Drawing version from `$ACADVER`, e.g. `AC1009`
    pub fn version(&self) -> Option<&str> {
        self.header_variable("$ACADVER")
            .and_then(|values| values.first())
            .map(|g| g.value.as_str())
    }

    /// Planar envelope of every feature, `None` when there is no coordinate
    pub fn envelope(&self) -> Option<Envelope> {
        self.features
            .iter()
            .filter_map(|f| f.geometry.envelope())
            .reduce(|a, b| a.merge(&b))
    }

    /// Layer names to encode the features with: the LAYER table when the
    /// source had one, otherwise the layers the features use
    pub fn layer_names(&self) -> Vec<String> {
        match &self.tables.layers {
            Some(layers) if !layers.is_empty() => layers.names().map(str::to_string).collect(),
            _ => collect_layer_names(&self.features),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;
    use crate::tables::{Layer, Table};
    use crate::types::Coordinate;

    fn point(x: f64, y: f64, layer: &str) -> Feature {
        Feature::new(Geometry::Point(Coordinate::new(x, y))).with_layer(layer)
    }

    #[test]
    fn test_envelope_of_features() {
        let mut doc = Document::new();
        assert!(doc.envelope().is_none());

        doc.add_feature(point(1.0, 5.0, "A"));
        doc.add_feature(point(-2.0, 3.0, "B"));
        let env = doc.envelope().unwrap();
        assert_eq!((env.min_x, env.min_y, env.max_x, env.max_y), (-2.0, 3.0, 1.0, 5.0));
        assert_eq!(doc.feature_count(), 2);
    }

    #[test]
    fn test_version_from_header() {
        let mut doc = Document::new();
        doc.header
            .insert("$ACADVER".to_string(), vec![DxfGroup::new(1, "AC1009")]);
        assert_eq!(doc.version(), Some("AC1009"));
        assert!(doc.header_variable("$EXTMIN").is_none());
    }

    #[test]
    fn test_layer_names_prefer_table() {
        let mut doc = Document::new();
        doc.add_feature(point(0.0, 0.0, "FROM_FEATURE"));
        assert_eq!(doc.layer_names(), vec!["FROM_FEATURE".to_string()]);

        doc.tables.layers = Some(Table::from_iter([Layer::new("0"), Layer::new("WALL")]));
        assert_eq!(doc.layer_names(), vec!["0".to_string(), "WALL".to_string()]);
    }
}
