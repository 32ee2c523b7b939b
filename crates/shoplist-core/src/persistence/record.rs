//! Persisted Record
//!
//! Wire layout of the stored list:
//! `{"state": {"items": [...], "categories": [...], "isDarkMode": false}, "version": 0}`.
//! A bare `{"items", "categories", "isDarkMode"}` object is accepted on read too.

use serde::{Deserialize, Serialize};

use crate::config::RECORD_VERSION;
use crate::domain::{Category, Item, ListState};
use crate::error::{PersistError, PersistResult};

/// Stored state fields. Each is optional on read; missing ones keep their
/// initial value when merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    /// Earlier builds stored the list under `products`
    #[serde(default, alias = "products")]
    pub items: Option<Vec<Item>>,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    #[serde(default)]
    pub is_dark_mode: Option<bool>,
}

impl PersistedState {
    /// Shallow merge over `initial`
    pub fn merge_into(self, initial: ListState) -> ListState {
        ListState {
            items: self.items.unwrap_or(initial.items),
            categories: self.categories.unwrap_or(initial.categories),
            is_dark_mode: self.is_dark_mode.unwrap_or(initial.is_dark_mode),
        }
    }
}

impl From<&ListState> for PersistedState {
    fn from(state: &ListState) -> Self {
        Self {
            items: Some(state.items.clone()),
            categories: Some(state.categories.clone()),
            is_dark_mode: Some(state.is_dark_mode),
        }
    }
}

/// Versioned wrapper around the stored state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedEnvelope {
    pub state: PersistedState,
    #[serde(default)]
    pub version: u32,
}

/// Serialize `state` into the stored record
pub fn encode_record(state: &ListState) -> PersistResult<String> {
    let envelope = PersistedEnvelope {
        state: PersistedState::from(state),
        version: RECORD_VERSION,
    };
    serde_json::to_string(&envelope).map_err(PersistError::Encode)
}

/// Parse a stored record
pub fn decode_record(raw: &str) -> PersistResult<PersistedState> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(PersistError::Decode)?;
    if !value.is_object() {
        return Err(PersistError::Decode(serde::de::Error::custom(
            "record is not a JSON object",
        )));
    }
    if value.get("state").is_none() {
        return serde_json::from_value(value).map_err(PersistError::Decode);
    }

    let envelope: PersistedEnvelope = serde_json::from_value(value).map_err(PersistError::Decode)?;
    if envelope.version != RECORD_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found: envelope.version,
            expected: RECORD_VERSION,
        });
    }
    Ok(envelope.state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{default_categories, CategoryId, ItemId};

    #[test]
    fn test_envelope_layout() {
        let mut state = ListState::seeded(default_categories());
        state.items.push(Item::new(ItemId::from("a"), "Milk", CategoryId::from("2")));
        state.is_dark_mode = true;

        let raw = encode_record(&state).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["version"], 0);
        assert_eq!(json["state"]["isDarkMode"], true);
        assert_eq!(json["state"]["items"][0]["categoryId"], "2");
        assert_eq!(json["state"]["categories"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn test_bare_record_is_accepted() {
        let raw = r#"{
            "items":[{"id":"a","name":"Eggs","categoryId":"1","purchased":true,"order":3}],
            "isDarkMode":true
        }"#;
        let merged = decode_record(raw)
            .unwrap()
            .merge_into(ListState::seeded(default_categories()));

        assert_eq!(merged.items.len(), 1);
        assert!(merged.items[0].purchased);
        assert!(merged.is_dark_mode);
        // categories absent from the record keep the seeded set
        assert_eq!(merged.categories, default_categories());
    }

    #[test]
    fn test_products_record_from_earlier_build_loads() {
        let raw = r#"{"state":{"products":[
            {"id":"0b7c","name":"Eggs","categoryId":"3","purchased":false,"order":0},
            {"id":"9f12","name":"Bread","categoryId":"1","purchased":true,"order":1}
        ],
        "categories":[{"id":"1","name":"","color":"bg-green-100"}],
        "isDarkMode":true},"version":0}"#;

        let merged = decode_record(raw)
            .unwrap()
            .merge_into(ListState::seeded(default_categories()));

        let names: Vec<_> = merged.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Eggs", "Bread"]);
        assert!(merged.items[1].purchased);
        assert_eq!(merged.categories.len(), 1);
        assert!(merged.is_dark_mode);

        // rewritten under the current field name, items intact
        let rewritten = encode_record(&merged).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rewritten).unwrap();
        assert_eq!(json["state"]["items"][0]["name"], "Eggs");
        assert!(json["state"].get("products").is_none());
    }

    #[test]
    fn test_other_version_is_rejected() {
        let raw = r#"{"state":{"items":[],"isDarkMode":false},"version":3}"#;
        assert!(matches!(
            decode_record(raw),
            Err(PersistError::UnsupportedVersion { found: 3, expected: 0 })
        ));
    }

    #[test]
    fn test_garbage_is_a_decode_error() {
        assert!(matches!(decode_record("{not json"), Err(PersistError::Decode(_))));
        assert!(matches!(decode_record("[1, 2]"), Err(PersistError::Decode(_))));
        assert!(matches!(
            decode_record(r#"{"state":{"items":5},"version":0}"#),
            Err(PersistError::Decode(_))
        ));
    }
}
