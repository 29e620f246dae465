//! Catalog data models
//!
//! Serde types for the character catalog API: the character record itself,
//! the paginated response envelope, and the search filter types.

use serde::{Deserialize, Serialize};

// == Character ==
/// A single character record as returned by the API.
///
/// `status` and `gender` arrive as free-form strings (`"Alive"`, `"unknown"`,
/// ...); filtering compares them case-insensitively against the typed filter
/// enums rather than forcing them through an enum at decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Unique character id
    pub id: u32,
    /// Display name
    pub name: String,
    /// Life status: "Alive", "Dead" or "unknown"
    pub status: String,
    /// Species name
    pub species: String,
    /// Subspecies or variant, often empty
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Gender: "Female", "Male", "Genderless" or "unknown"
    pub gender: String,
    /// Place of origin
    #[serde(default)]
    pub origin: LocationRef,
    /// Last known location
    #[serde(default)]
    pub location: LocationRef,
    /// Portrait image URL
    #[serde(default)]
    pub image: String,
    /// Episode URLs this character appears in
    #[serde(default)]
    pub episode: Vec<String>,
    /// Canonical URL of this record
    #[serde(default)]
    pub url: String,
    /// Creation timestamp of the record, as reported by the API
    #[serde(default)]
    pub created: String,
}

/// A named reference to a location resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

// == Page Envelope ==
/// Pagination metadata attached to every collection response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of records
    pub count: u32,
    /// Total number of pages
    pub pages: u32,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub prev: Option<String>,
}

/// Collection response envelope: `{ info: {...}, results: [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

// == Filter Enums ==
/// Life-status filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterStatus {
    Alive,
    Dead,
    Unknown,
}

impl CharacterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
            CharacterStatus::Unknown => "unknown",
        }
    }
}

/// Gender filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterGender {
    Female,
    Male,
    Genderless,
    Unknown,
}

impl CharacterGender {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterGender::Female => "Female",
            CharacterGender::Male => "Male",
            CharacterGender::Genderless => "Genderless",
            CharacterGender::Unknown => "unknown",
        }
    }
}

// == Character Filters ==
/// Optional search filters; an absent field matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterFilters {
    pub status: Option<CharacterStatus>,
    pub gender: Option<CharacterGender>,
    pub species: Option<String>,
}

impl CharacterFilters {
    /// True if at least one filter is set.
    pub fn has_active_filters(&self) -> bool {
        self.status.is_some() || self.gender.is_some() || self.species.is_some()
    }

    /// Human-readable summary of the active filters.
    pub fn description(&self) -> String {
        let mut components: Vec<String> = Vec::new();
        if let Some(status) = &self.status {
            components.push(format!("Status: {}", status.as_str()));
        }
        if let Some(gender) = &self.gender {
            components.push(format!("Gender: {}", gender.as_str()));
        }
        if let Some(species) = &self.species {
            components.push(format!("Species: {}", species));
        }
        components.join(", ")
    }

    /// Query parameters for the collection endpoint, in stable order.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(status) = &self.status {
            params.push(("status", status.as_str().to_lowercase()));
        }
        if let Some(gender) = &self.gender {
            params.push(("gender", gender.as_str().to_lowercase()));
        }
        if let Some(species) = &self.species {
            params.push(("species", species.clone()));
        }
        params
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_character_json() -> &'static str {
        r#"{
            "id": 1,
            "name": "Rick Sanchez",
            "status": "Alive",
            "species": "Human",
            "type": "",
            "gender": "Male",
            "origin": {"name": "Earth (C-137)", "url": ""},
            "location": {"name": "Citadel of Ricks", "url": ""},
            "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
            "episode": ["https://rickandmortyapi.com/api/episode/1"],
            "url": "https://rickandmortyapi.com/api/character/1",
            "created": "2017-11-04T18:48:46.250Z"
        }"#
    }

    #[test]
    fn test_character_decodes_api_shape() {
        let character: Character = serde_json::from_str(sample_character_json()).unwrap();
        assert_eq!(character.id, 1);
        assert_eq!(character.name, "Rick Sanchez");
        assert_eq!(character.status, "Alive");
        assert_eq!(character.origin.name, "Earth (C-137)");
        assert_eq!(character.episode.len(), 1);
    }

    #[test]
    fn test_page_envelope_decodes() {
        let json = format!(
            r#"{{"info":{{"count":826,"pages":42,"next":"https://rickandmortyapi.com/api/character?page=2","prev":null}},"results":[{}]}}"#,
            sample_character_json()
        );
        let page: CharacterPage = serde_json::from_str(&json).unwrap();
        assert_eq!(page.info.count, 826);
        assert_eq!(page.info.pages, 42);
        assert!(page.info.next.is_some());
        assert!(page.info.prev.is_none());
        assert_eq!(page.results.len(), 1);
    }

    #[test]
    fn test_filters_default_inactive() {
        let filters = CharacterFilters::default();
        assert!(!filters.has_active_filters());
        assert_eq!(filters.description(), "");
        assert!(filters.query_params().is_empty());
    }

    #[test]
    fn test_filters_description_and_params() {
        let filters = CharacterFilters {
            status: Some(CharacterStatus::Alive),
            gender: Some(CharacterGender::Female),
            species: None,
        };
        assert!(filters.has_active_filters());
        assert_eq!(filters.description(), "Status: Alive, Gender: Female");
        assert_eq!(
            filters.query_params(),
            vec![("status", "alive".to_string()), ("gender", "female".to_string())]
        );
    }
}
