//! Response shapes of the catalog service and their conversion into domain types.
//!
//! Every field the server may omit or null out is an `Option` here; the
//! conversions decide what an absent value means for the app.

use serde::Deserialize;

use crate::state::{Brand, CatalogItem, DetailRecord, ModelType, Musician, Specs};

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// Payload; `null` when the whole query failed.
    pub data: Option<T>,
    /// Errors reported by the server.
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

/// One entry of the `errors` array.
#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
}

/// `findAllBrands` payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandsData {
    /// Brand list; `null` is treated as empty.
    pub find_all_brands: Option<Vec<WireBrand>>,
}

/// `findBrandModels` payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelsData {
    /// Model list; `null` is treated as empty.
    pub find_brand_models: Option<Vec<WireModel>>,
}

/// `searchModels` payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    /// Matching models; `null` is treated as empty.
    pub search_models: Option<Vec<WireModel>>,
}

/// `findUniqueModel` payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsData {
    /// The model, `null` when not found.
    pub find_unique_model: Option<WireDetail>,
}

/// Brand as sent by the server.
#[derive(Debug, Deserialize)]
pub struct WireBrand {
    /// Identifier.
    pub id: String,
    /// Display name.
    pub name: Option<String>,
    /// Logo URL.
    pub image: Option<String>,
}

/// Model summary as sent by the server.
#[derive(Debug, Deserialize)]
pub struct WireModel {
    /// Identifier.
    pub id: String,
    /// Display name.
    pub name: Option<String>,
    /// Free-form type string.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Photo URL.
    pub image: Option<String>,
    /// Price (integer or float on the wire).
    pub price: Option<f64>,
}

/// Model details as sent by the server.
#[derive(Debug, Deserialize)]
pub struct WireDetail {
    /// Identifier.
    pub id: String,
    /// Display name.
    pub name: Option<String>,
    /// Free-form type string.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Photo URL.
    pub image: Option<String>,
    /// Marketing copy.
    pub description: Option<String>,
    /// Price.
    pub price: Option<f64>,
    /// Specification block.
    pub specs: Option<WireSpecs>,
    /// Associated musicians.
    pub musicians: Option<Vec<WireMusician>>,
}

/// Specification block as sent by the server.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_field_names)]
pub struct WireSpecs {
    /// Body tonewood.
    pub body_wood: Option<String>,
    /// Neck tonewood.
    pub neck_wood: Option<String>,
    /// Fingerboard tonewood.
    pub fingerboard_wood: Option<String>,
    /// Pickups.
    pub pickups: Option<String>,
    /// Tuners.
    pub tuners: Option<String>,
    /// Scale length; some records send a number.
    pub scale_length: Option<serde_json::Value>,
    /// Bridge.
    pub bridge: Option<String>,
}

/// Musician as sent by the server.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMusician {
    /// Display name.
    pub name: Option<String>,
    /// Portrait URL.
    pub musician_image: Option<String>,
    /// Band names.
    pub bands: Option<Vec<String>>,
}

/// Drop blank strings so "absent" has a single representation.
fn non_blank(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

/// Negative or non-finite prices are treated as unknown.
fn valid_price(p: Option<f64>) -> Option<f64> {
    p.filter(|v| v.is_finite() && *v >= 0.0)
}

impl From<WireBrand> for Brand {
    fn from(w: WireBrand) -> Self {
        Self {
            name: w.name.unwrap_or_else(|| w.id.clone()),
            id: w.id,
            image: non_blank(w.image),
        }
    }
}

impl From<WireModel> for CatalogItem {
    fn from(w: WireModel) -> Self {
        Self {
            name: w.name.unwrap_or_default(),
            kind: ModelType::from_wire(w.kind.as_deref()),
            raw_kind: non_blank(w.kind.map(|k| k.trim().to_string())),
            id: w.id,
            image: w.image,
            price: valid_price(w.price),
        }
    }
}

impl From<WireSpecs> for Specs {
    fn from(w: WireSpecs) -> Self {
        let scale_length = match w.scale_length {
            Some(serde_json::Value::String(s)) => Some(s),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        Self {
            body_wood: non_blank(w.body_wood),
            neck_wood: non_blank(w.neck_wood),
            fingerboard_wood: non_blank(w.fingerboard_wood),
            pickups: non_blank(w.pickups),
            tuners: non_blank(w.tuners),
            scale_length: non_blank(scale_length),
            bridge: non_blank(w.bridge),
        }
    }
}

impl From<WireMusician> for Musician {
    fn from(w: WireMusician) -> Self {
        Self {
            name: w.name.unwrap_or_default(),
            image: non_blank(w.musician_image),
            bands: w.bands.unwrap_or_default(),
        }
    }
}

impl From<WireDetail> for DetailRecord {
    fn from(w: WireDetail) -> Self {
        Self {
            item: CatalogItem {
                name: w.name.unwrap_or_default(),
                kind: ModelType::from_wire(w.kind.as_deref()),
                raw_kind: non_blank(w.kind.map(|k| k.trim().to_string())),
                id: w.id,
                image: w.image,
                price: valid_price(w.price),
            },
            description: non_blank(w.description),
            specs: w.specs.map(Specs::from),
            musicians: w
                .musicians
                .unwrap_or_default()
                .into_iter()
                .map(Musician::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Models decode with optional fields and normalized types
    ///
    /// - Input: JSON with null name, uppercase type, negative price
    /// - Output: Defaults filled, type normalized, price dropped
    fn wire_model_converts_with_defaults() {
        let json = r#"{"findBrandModels":[
            {"id":"1","name":null,"type":"BASS","image":"https://a/1.png","price":-5},
            {"id":"2","name":"Strat","type":null,"image":null,"price":1299}
        ]}"#;
        let data: ModelsData = serde_json::from_str(json).expect("decode");
        let items: Vec<CatalogItem> = data
            .find_brand_models
            .unwrap_or_default()
            .into_iter()
            .map(CatalogItem::from)
            .collect();
        assert_eq!(items[0].name, "");
        assert_eq!(items[0].kind, ModelType::Bass);
        assert_eq!(items[0].price, None);
        assert_eq!(items[1].kind, ModelType::Unspecified);
        assert_eq!(items[1].raw_kind, None);
        assert_eq!(items[1].price, Some(1299.0));
    }

    #[test]
    fn unknown_type_text_is_kept_for_display() {
        let json = r#"{"findBrandModels":[
            {"id":"3","name":"ES-335","type":" Semi-Hollow ","image":"https://a/3.png","price":2999}
        ]}"#;
        let data: ModelsData = serde_json::from_str(json).expect("decode");
        let item = CatalogItem::from(data.find_brand_models.unwrap_or_default().remove(0));
        assert_eq!(item.kind, ModelType::Unspecified);
        assert_eq!(item.raw_kind.as_deref(), Some("Semi-Hollow"));
    }

    #[test]
    fn wire_detail_converts_specs_and_musicians() {
        let json = r#"{"findUniqueModel":{
            "id":"9","name":"Les Paul","type":"electric","image":"https://a/9.png",
            "description":"  ","price":2499.5,
            "specs":{"bodyWood":"Mahogany","neckWood":null,"fingerboardWood":"Rosewood",
                     "pickups":"Humbuckers","tuners":"","scaleLength":24.75,"bridge":"Tune-o-matic"},
            "musicians":[{"name":"Slash","musicianImage":null,"bands":["Guns N' Roses"]},
                         {"name":"Jimmy Page","musicianImage":"https://a/p.png","bands":null}]
        }}"#;
        let data: DetailsData = serde_json::from_str(json).expect("decode");
        let rec = DetailRecord::from(data.find_unique_model.expect("present"));
        assert_eq!(rec.description, None);
        let specs = rec.specs.expect("specs");
        assert_eq!(specs.scale_length.as_deref(), Some("24.75"));
        assert_eq!(specs.tuners, None);
        assert_eq!(rec.musicians.len(), 2);
        assert_eq!(rec.musicians[0].bands, vec!["Guns N' Roses".to_string()]);
        assert!(rec.musicians[1].bands.is_empty());
    }

    #[test]
    fn envelope_collects_errors() {
        let json = r#"{"data":null,"errors":[{"message":"boom"}]}"#;
        let env: Envelope<BrandsData> = serde_json::from_str(json).expect("decode");
        assert!(env.data.is_none());
        assert_eq!(env.errors[0].message, "boom");
    }
}
