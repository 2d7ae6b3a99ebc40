//! # Character Entity
//!
//! Playable character data attached to a participant during enrichment.
//!
//! Enrichment never fails a request: when the upstream call errors out or
//! returns an empty list, the participant gets a single
//! [`Character::placeholder`] so the client always sees the same shape.

use crate::domain::value_objects::CharacterId;
use serde::{Deserialize, Serialize};

/// A playable character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Upstream character id; `0` for the placeholder.
    pub id: CharacterId,
    /// Character name; empty for the placeholder.
    #[serde(default)]
    pub name: String,
    /// Image URLs for the character.
    #[serde(default)]
    pub images: CharacterImages,
}

/// Image URLs for a character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterImages {
    /// Small icon URL.
    #[serde(default)]
    pub icon: String,
    /// Full display image URL.
    #[serde(default)]
    pub display_image: String,
}

impl Character {
    /// Returns the fallback character used when enrichment yields nothing.
    ///
    /// The shape (`id: 0`, empty name, empty image URLs) is part of the
    /// relay's public payload contract.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            id: CharacterId::new(0),
            name: String::new(),
            images: CharacterImages::default(),
        }
    }

    /// Returns true if this is the placeholder character.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.id.value() == 0 && self.name.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_shape() {
        let json = serde_json::to_value(Character::placeholder()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 0,
                "name": "",
                "images": { "icon": "", "displayImage": "" }
            })
        );
    }

    #[test]
    fn placeholder_is_recognized() {
        assert!(Character::placeholder().is_placeholder());
    }

    #[test]
    fn deserializes_upstream_character() {
        let json = r#"{
            "id": 1271,
            "name": "Fox",
            "images": {"icon": "https://img/icon.png", "displayImage": "https://img/full.png"}
        }"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.name, "Fox");
        assert_eq!(character.images.display_image, "https://img/full.png");
        assert!(!character.is_placeholder());
    }

    #[test]
    fn missing_images_default_to_empty() {
        let character: Character =
            serde_json::from_str(r#"{"id": 1271, "name": "Fox"}"#).unwrap();
        assert_eq!(character.images, CharacterImages::default());
    }
}
