//! Catalog records and their wire representation.
//!
//! Records are created by deserializing detail responses and never mutated
//! afterwards; on re-fetch the whole record is replaced. The struct layout
//! mirrors the upstream JSON so compatibility with the public API is kept.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

// =============================================================================
// WIRE TYPES
// =============================================================================

/// A `{name, url}` reference as it appears all over the upstream API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name (lowercase on the wire).
    pub name: String,
    /// Resource URL.
    #[serde(default)]
    pub url: String,
}

/// One entry of `types[]`: a slot number and the type reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    /// Slot order (1-based).
    #[serde(default)]
    pub slot: u32,
    /// The type itself, nested under `type.name`.
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// One entry of `stats[]`: a base value and the stat reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatEntry {
    /// Base stat value (0-255).
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    /// The stat itself, nested under `stat.name`.
    pub stat: NamedResource,
}

/// One entry of `abilities[]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilitySlot {
    /// The ability, nested under `ability.name`.
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u32,
}

/// Sprite URLs. Only the fields this application reads are modeled; the
/// upstream object carries many more, which serde ignores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    /// Primary sprite URL. Nullable upstream.
    pub front_default: Option<String>,
    /// Nested alternate renditions (`other["official-artwork"]`).
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

/// The `sprites.other` object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtherSprites {
    /// High-resolution artwork rendition.
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ArtworkSprite>,
}

/// The `sprites.other["official-artwork"]` object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtworkSprite {
    /// Artwork URL. Nullable upstream.
    pub front_default: Option<String>,
}

// =============================================================================
// RECORD
// =============================================================================

/// One catalog entry.
///
/// Equality and ordering use the numeric identifier only - the name is a
/// secondary, lowercase-normalized key used for lookups and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Stable numeric identifier; the sole equality/sort key.
    pub id: u32,
    /// Unique name, lowercase on the wire.
    pub name: String,
    /// Height in decimetres.
    #[serde(default)]
    pub height: u32,
    /// Weight in hectograms.
    #[serde(default)]
    pub weight: u32,
    /// Base experience yield. Nullable upstream.
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Ordered category tags.
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    /// Ordered `(stat name, base value)` pairs.
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    /// Ordered ability names.
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    /// Image references.
    #[serde(default)]
    pub sprites: Sprites,
}

impl Record {
    /// Display-cased name: first letter of each hyphenated part uppercased.
    pub fn display_name(&self) -> String {
        self.name
            .split('-')
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Zero-padded dex number, e.g. `#001`.
    pub fn formatted_id(&self) -> String {
        format!("#{:03}", self.id)
    }

    /// Iterate the record's category tag names in slot order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.kind.name.as_str())
    }

    /// Whether the record carries the given category tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.type_names().any(|name| name == tag)
    }

    /// Primary sprite URL, if the upstream provides one.
    pub fn sprite_url(&self) -> Option<&str> {
        self.sprites.front_default.as_deref()
    }

    /// High-resolution artwork URL, falling back to the primary sprite.
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref())
            .or_else(|| self.sprite_url())
    }

    /// Height in metres (upstream value is in tenths).
    pub fn height_m(&self) -> f32 {
        self.height as f32 / 10.0
    }

    /// Weight in kilograms (upstream value is in tenths).
    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Record {}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Trimmed-down detail payload in the upstream shape.
    const BULBASAUR_JSON: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "base_experience": 64,
        "types": [
            {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
            {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
        ],
        "stats": [
            {"base_stat": 45, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 49, "effort": 0, "stat": {"name": "attack", "url": ""}}
        ],
        "abilities": [
            {"ability": {"name": "overgrow", "url": ""}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "chlorophyll", "url": ""}, "is_hidden": true, "slot": 3}
        ],
        "sprites": {
            "front_default": "https://example.test/sprites/1.png",
            "other": {
                "official-artwork": {"front_default": "https://example.test/artwork/1.png"}
            }
        }
    }"#;

    fn bulbasaur() -> Record {
        serde_json::from_str(BULBASAUR_JSON).unwrap()
    }

    #[test]
    fn deserializes_nested_wire_shape() {
        let record = bulbasaur();
        assert_eq!(record.id, 1);
        assert_eq!(record.name, "bulbasaur");
        assert_eq!(record.type_names().collect::<Vec<_>>(), ["grass", "poison"]);
        assert_eq!(record.stats[0].stat.name, "hp");
        assert_eq!(record.stats[0].base_stat, 45);
        assert_eq!(record.abilities[1].ability.name, "chlorophyll");
        assert!(record.abilities[1].is_hidden);
        assert_eq!(
            record.sprite_url(),
            Some("https://example.test/sprites/1.png")
        );
        assert_eq!(
            record.artwork_url(),
            Some("https://example.test/artwork/1.png")
        );
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let record: Record =
            serde_json::from_str(r#"{"id": 132, "name": "ditto", "sprites": {"front_default": null}}"#)
                .unwrap();
        assert_eq!(record.base_experience, None);
        assert_eq!(record.sprite_url(), None);
        // Artwork falls back to the sprite, which is also absent here.
        assert_eq!(record.artwork_url(), None);
    }

    #[test]
    fn display_name_cases_hyphenated_parts() {
        let record = bulbasaur();
        assert_eq!(record.display_name(), "Bulbasaur");

        let mut mime = bulbasaur();
        mime.name = "mr-mime".to_string();
        assert_eq!(mime.display_name(), "Mr-Mime");
    }

    #[test]
    fn formatted_id_zero_pads() {
        let mut record = bulbasaur();
        assert_eq!(record.formatted_id(), "#001");
        record.id = 151;
        assert_eq!(record.formatted_id(), "#151");
    }

    #[test]
    fn identity_is_the_identifier_only() {
        let a = bulbasaur();
        let mut b = bulbasaur();
        b.name = "renamed".to_string();
        assert_eq!(a, b);

        let mut c = bulbasaur();
        c.id = 2;
        assert_ne!(a, c);
        assert!(a < c);
    }

    #[test]
    fn unit_conversions_use_tenths() {
        let record = bulbasaur();
        assert!((record.height_m() - 0.7).abs() < f32::EPSILON);
        assert!((record.weight_kg() - 6.9).abs() < f32::EPSILON);
    }
}
