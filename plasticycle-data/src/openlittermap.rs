//! Wire types and normalization for the upstream litter feature collection.
//!
//! The upstream payload is third-party, crowdsourced data: fields go
//! missing, coordinates arrive as nulls, and extra keys appear without
//! warning. Deserialisation is therefore maximally lenient, and
//! [`into_drop_points`] filters rather than fails: a feature without finite
//! coordinates is dropped silently, everything else becomes a validated
//! [`DropPoint`].
//!
//! Coordinates are filtered on finiteness only. A coordinate of exactly
//! zero is legitimate and must survive normalization.

use serde::Deserialize;

use plasticycle_core::DropPoint;

/// Feature collection returned by the `litter-data` endpoint.
///
/// A payload without a `features` key deserialises to an empty collection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LitterFeatureCollection {
    /// Features in upstream order.
    #[serde(default)]
    pub features: Vec<LitterFeature>,
}

/// A single raw feature; every part of it is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LitterFeature {
    /// Free-form upstream properties.
    #[serde(default)]
    pub properties: FeatureProperties,
    /// Geometry, absent for some entries.
    #[serde(default)]
    pub geometry: Option<FeatureGeometry>,
}

/// The subset of upstream properties the map displays.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureProperties {
    /// Litter category; becomes the marker label.
    #[serde(default)]
    pub category: Option<String>,
    /// Litter material; becomes the popup body.
    #[serde(default)]
    pub material: Option<String>,
}

/// Point geometry with coordinates ordered `[longitude, latitude]`.
///
/// Entries are kept as raw JSON values because upstream mixes numbers with
/// nulls; accessors surface them as `Option<f64>`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureGeometry {
    /// Raw coordinate entries, longitude first.
    #[serde(default)]
    pub coordinates: Vec<serde_json::Value>,
}

impl LitterFeature {
    fn coordinate(&self, index: usize) -> Option<f64> {
        self.geometry
            .as_ref()?
            .coordinates
            .get(index)?
            .as_f64()
            .filter(|value| value.is_finite())
    }

    /// Longitude, when present and numeric.
    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.coordinate(0)
    }

    /// Latitude, when present and numeric.
    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.coordinate(1)
    }
}

/// Normalize a raw feature collection into an ordered drop-point batch.
///
/// Features without finite coordinates are excluded; the survivors keep
/// their relative order and receive dense ids from zero. Absent or empty
/// category and material fall back to the placeholder strings on
/// [`DropPoint`].
///
/// # Examples
///
/// ```
/// use plasticycle_data::openlittermap::{LitterFeatureCollection, into_drop_points};
///
/// let collection: LitterFeatureCollection = serde_json::from_str(
///     r#"{"features":[{"properties":{"category":"Plastic","material":"PET"},
///         "geometry":{"coordinates":[106.8,-6.2]}}]}"#,
/// )?;
/// let points = into_drop_points(collection);
/// assert_eq!(points.len(), 1);
/// assert_eq!(points[0].name, "Plastic");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[must_use]
pub fn into_drop_points(collection: LitterFeatureCollection) -> Vec<DropPoint> {
    let mut points = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let (Some(longitude), Some(latitude)) = (feature.longitude(), feature.latitude()) else {
            continue;
        };
        let FeatureProperties { category, material } = feature.properties;
        let name = category
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DropPoint::DEFAULT_NAME.to_owned());
        let description = material
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DropPoint::DEFAULT_DESCRIPTION.to_owned());
        let Ok(point) = DropPoint::new(points.len(), name, latitude, longitude, description)
        else {
            continue;
        };
        points.push(point);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(json: &str) -> LitterFeatureCollection {
        serde_json::from_str(json).expect("fixture JSON should deserialise")
    }

    #[rstest]
    fn retains_zero_coordinates() {
        let collection = parse(r#"{"features":[{"geometry":{"coordinates":[0,0]}}]}"#);
        let points = into_drop_points(collection);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].latitude, 0.0);
        assert_eq!(points[0].longitude, 0.0);
    }

    #[rstest]
    #[case::null_longitude(r#"{"geometry":{"coordinates":[null,12]}}"#)]
    #[case::null_latitude(r#"{"geometry":{"coordinates":[5,null]}}"#)]
    #[case::missing_geometry(r#"{"properties":{"category":"Plastic"}}"#)]
    #[case::short_coordinates(r#"{"geometry":{"coordinates":[106.8]}}"#)]
    #[case::non_numeric(r#"{"geometry":{"coordinates":["east",12]}}"#)]
    fn excludes_features_without_finite_coordinates(#[case] feature: &str) {
        let collection = parse(&format!(r#"{{"features":[{feature}]}}"#));
        assert!(into_drop_points(collection).is_empty());
    }

    #[rstest]
    fn applies_placeholder_labels() {
        let collection = parse(r#"{"features":[{"geometry":{"coordinates":[106.8,-6.2]}}]}"#);
        let points = into_drop_points(collection);
        assert_eq!(points[0].name, "Litter Point");
        assert_eq!(points[0].description, "Data dari OpenLitterMap");
    }

    #[rstest]
    fn treats_empty_strings_as_absent() {
        let collection = parse(
            r#"{"features":[{"properties":{"category":"","material":""},
                "geometry":{"coordinates":[106.8,-6.2]}}]}"#,
        );
        let points = into_drop_points(collection);
        assert_eq!(points[0].name, DropPoint::DEFAULT_NAME);
        assert_eq!(points[0].description, DropPoint::DEFAULT_DESCRIPTION);
    }

    #[rstest]
    fn preserves_order_and_assigns_dense_ids() {
        let collection = parse(
            r#"{"features":[
                {"properties":{"category":"A"},"geometry":{"coordinates":[1,1]}},
                {"properties":{"category":"B"},"geometry":{"coordinates":[null,1]}},
                {"properties":{"category":"C"},"geometry":{"coordinates":[3,3]}}
            ]}"#,
        );
        let points = into_drop_points(collection);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].name, "A");
        assert_eq!(points[0].id, 0);
        assert_eq!(points[1].name, "C");
        assert_eq!(points[1].id, 1);
    }

    #[rstest]
    fn missing_features_key_yields_empty_batch() {
        let collection = parse("{}");
        assert!(into_drop_points(collection).is_empty());
    }

    #[rstest]
    fn ignores_unknown_fields() {
        let collection = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"category":"Plastic","litter":7},
                 "geometry":{"type":"Point","coordinates":[106.8,-6.2]}}
            ]}"#,
        );
        assert_eq!(into_drop_points(collection).len(), 1);
    }

    #[rstest]
    fn maps_coordinates_longitude_first() {
        let collection = parse(
            r#"{"features":[{"properties":{"category":"Plastic","material":"PET"},
                "geometry":{"coordinates":[106.8,-6.2]}}]}"#,
        );
        let points = into_drop_points(collection);
        assert_eq!(points[0].longitude, 106.8);
        assert_eq!(points[0].latitude, -6.2);
    }
}
