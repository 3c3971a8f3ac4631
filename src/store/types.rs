// src/store/types.rs
// Data structures for the favorites collection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of catalog item a favorite points at.
///
/// Closed set; unknown strings fail to parse and surface as validation
/// errors at the dispatch boundary.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ItemType {
    Person,
    Planet,
    Starship,
    Film,
}

impl ItemType {
    /// Remote catalog endpoint segment for this item type.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ItemType::Person => "people",
            ItemType::Planet => "planets",
            ItemType::Starship => "starships",
            ItemType::Film => "films",
        }
    }

    /// Highest known id in the remote catalog, if the range is bounded.
    ///
    /// Ids above the bound are rejected before any network call.
    pub fn max_known_id(&self) -> Option<u32> {
        match self {
            ItemType::Person => Some(83),
            ItemType::Planet => Some(60),
            ItemType::Film => Some(6),
            ItemType::Starship => None,
        }
    }
}

/// A persisted favorite entry.
///
/// Identity is the (item_type, item_id) pair; `added_at` is stamped once at
/// creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(rename = "id")]
    pub item_id: u32,
    #[serde(default)]
    pub notes: String,
    pub added_at: DateTime<Utc>,
}

impl Favorite {
    /// Synthesized human-readable label, e.g. "person 1".
    pub fn label(&self) -> String {
        format!("{} {}", self.item_type, self.item_id)
    }
}

/// On-disk shape of the favorites file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FavoritesFile {
    #[serde(default)]
    pub favorites: Vec<Favorite>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_item_type_parse_and_display() {
        assert_eq!(ItemType::from_str("person").unwrap(), ItemType::Person);
        assert_eq!(ItemType::from_str("film").unwrap(), ItemType::Film);
        assert!(ItemType::from_str("droid").is_err());
        assert_eq!(ItemType::Starship.to_string(), "starship");
    }

    #[test]
    fn test_item_type_endpoints() {
        assert_eq!(ItemType::Person.endpoint(), "people");
        assert_eq!(ItemType::Planet.endpoint(), "planets");
        assert_eq!(ItemType::Starship.endpoint(), "starships");
        assert_eq!(ItemType::Film.endpoint(), "films");
    }

    #[test]
    fn test_known_id_ranges() {
        assert_eq!(ItemType::Person.max_known_id(), Some(83));
        assert_eq!(ItemType::Planet.max_known_id(), Some(60));
        assert_eq!(ItemType::Film.max_known_id(), Some(6));
        assert_eq!(ItemType::Starship.max_known_id(), None);
    }

    #[test]
    fn test_favorite_roundtrip_uses_original_field_names() {
        let fav = Favorite {
            item_type: ItemType::Person,
            item_id: 1,
            notes: "main hero".to_string(),
            added_at: Utc::now(),
        };
        let json = serde_json::to_value(&fav).unwrap();
        assert_eq!(json["type"], "person");
        assert_eq!(json["id"], 1);
        assert_eq!(json["notes"], "main hero");

        let back: Favorite = serde_json::from_value(json).unwrap();
        assert_eq!(back, fav);
    }

    #[test]
    fn test_label() {
        let fav = Favorite {
            item_type: ItemType::Planet,
            item_id: 8,
            notes: String::new(),
            added_at: Utc::now(),
        };
        assert_eq!(fav.label(), "planet 8");
    }

    #[test]
    fn test_favorites_file_tolerates_missing_list() {
        let file: FavoritesFile = serde_json::from_str("{}").unwrap();
        assert!(file.favorites.is_empty());
    }
}
