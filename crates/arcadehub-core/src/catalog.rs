use serde::{Deserialize, Serialize};

/// Unique identifier for a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u32);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One playable embedded game: identity, display text, thumbnail, and
/// embed URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEntry {
    pub id: GameId,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub iframe_url: String,
}

/// Catalog document shipped with the client.
const BUNDLED_GAMES: &str = include_str!("../data/games.json");

#[derive(Debug)]
pub enum CatalogError {
    Parse(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "catalog parse error: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Ordered, immutable collection of game entries.
///
/// The stored order is curation order from the source document, not a
/// sort key, and is preserved for the lifetime of the session.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<GameEntry>,
}

impl Catalog {
    /// Parse a catalog from a JSON array of entries. The source is
    /// trusted; entries are not validated beyond deserialization.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<GameEntry> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        tracing::debug!(count = entries.len(), "catalog loaded");
        Ok(Self { entries })
    }

    /// The catalog embedded at compile time.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_GAMES)
    }

    /// A catalog with no entries.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// All entries, in stored order.
    pub fn entries(&self) -> &[GameEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: GameId) -> Option<&GameEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fallback image for an entry whose thumbnail failed to load. Derived
/// from the entry id, so the same entry maps to the same placeholder
/// across reloads.
pub fn placeholder_thumbnail(id: GameId) -> String {
    format!("https://picsum.photos/seed/{id}/640/360?blur=2")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    fn test_entry(id: u32) -> GameEntry {
        GameEntry {
            id: GameId(id),
            title: format!("Game {id}"),
            description: "A test game".to_string(),
            thumbnail_url: format!("https://cdn.test/thumbs/{id}.jpg"),
            iframe_url: format!("https://games.test/{id}/"),
        }
    }

    #[test]
    fn bundled_catalog_parses() {
        let catalog = Catalog::bundled().expect("bundled games.json must parse");
        assert!(!catalog.is_empty());
    }

    #[test]
    fn bundled_ids_are_pairwise_distinct() {
        let catalog = Catalog::bundled().unwrap();
        let ids: HashSet<GameId> = catalog.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn bundled_entries_have_display_text_and_urls() {
        let catalog = Catalog::bundled().unwrap();
        for entry in catalog.entries() {
            assert!(!entry.title.is_empty());
            assert!(!entry.description.is_empty());
            assert!(entry.thumbnail_url.starts_with("https://"));
            assert!(entry.iframe_url.starts_with("https://"));
        }
    }

    #[test]
    fn from_json_preserves_stored_order() {
        let json = serde_json::to_string(&[test_entry(3), test_entry(1), test_entry(2)]).unwrap();
        let catalog = Catalog::from_json(&json).unwrap();
        let ids: Vec<u32> = catalog.entries().iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn from_json_accepts_camel_case_schema() {
        let json = r#"[{
            "id": 7,
            "title": "Drift",
            "description": "Slide around corners.",
            "thumbnailUrl": "https://cdn.test/drift.jpg",
            "iframeUrl": "https://games.test/drift/"
        }]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let entry = catalog.get(GameId(7)).unwrap();
        assert_eq!(entry.thumbnail_url, "https://cdn.test/drift.jpg");
        assert_eq!(entry.iframe_url, "https://games.test/drift/");
    }

    #[test]
    fn from_json_rejects_malformed_document() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn get_resolves_by_id() {
        let json = serde_json::to_string(&[test_entry(1), test_entry(2)]).unwrap();
        let catalog = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog.get(GameId(2)).unwrap().title, "Game 2");
        assert!(catalog.get(GameId(99)).is_none());
    }

    proptest! {
        #[test]
        fn placeholder_is_deterministic(id in 0u32..10_000) {
            let a = placeholder_thumbnail(GameId(id));
            let b = placeholder_thumbnail(GameId(id));
            prop_assert_eq!(a, b);
        }

        #[test]
        fn placeholder_differs_across_ids(a in 0u32..10_000, b in 0u32..10_000) {
            prop_assume!(a != b);
            prop_assert_ne!(
                placeholder_thumbnail(GameId(a)),
                placeholder_thumbnail(GameId(b))
            );
        }
    }
}
