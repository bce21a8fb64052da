use crate::catalog::{Catalog, GameEntry, GameId};

/// What the client renders for the current selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// No selection: the full card grid.
    Catalog,
    /// The selected game's player panel.
    Player(&'a GameEntry),
}

/// Top-level coordinator. Owns the single piece of mutable state in the
/// application: the currently selected game, if any.
#[derive(Debug, Default)]
pub struct Shell {
    selected: Option<GameId>,
}

impl Shell {
    /// A shell with nothing selected.
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Select a catalog entry; the next render shows the player view.
    pub fn select(&mut self, entry: &GameEntry) {
        tracing::debug!(id = entry.id.0, title = %entry.title, "game selected");
        self.selected = Some(entry.id);
    }

    /// Return to the catalog. Idempotent.
    pub fn clear(&mut self) {
        if self.selected.take().is_some() {
            tracing::debug!("selection cleared");
        }
    }

    /// Whether the header back control is shown.
    pub fn back_visible(&self) -> bool {
        self.selected.is_some()
    }

    /// Resolve the current state against the catalog into the view to
    /// render. A selection that no longer resolves falls back to the
    /// catalog view.
    pub fn view<'a>(&self, catalog: &'a Catalog) -> View<'a> {
        match self.selected.and_then(|id| catalog.get(id)) {
            Some(entry) => View::Player(entry),
            None => View::Catalog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> Catalog {
        Catalog::from_json(
            r#"[
                {"id": 1, "title": "Orbit", "description": "d",
                 "thumbnailUrl": "https://cdn.test/1.jpg", "iframeUrl": "https://games.test/1/"},
                {"id": 2, "title": "Drift", "description": "d",
                 "thumbnailUrl": "https://cdn.test/2.jpg", "iframeUrl": "https://games.test/2/"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn starts_on_catalog_view() {
        let catalog = test_catalog();
        let shell = Shell::new();
        assert_eq!(shell.view(&catalog), View::Catalog);
        assert!(!shell.back_visible());
    }

    #[test]
    fn select_switches_to_player_view() {
        let catalog = test_catalog();
        let mut shell = Shell::new();
        let entry = catalog.get(GameId(2)).unwrap();
        shell.select(entry);

        match shell.view(&catalog) {
            View::Player(e) => {
                assert_eq!(e.title, "Drift");
                assert_eq!(e.iframe_url, "https://games.test/2/");
            },
            View::Catalog => panic!("expected player view after select"),
        }
        assert!(shell.back_visible());
    }

    #[test]
    fn clear_returns_to_catalog_and_is_idempotent() {
        let catalog = test_catalog();
        let mut shell = Shell::new();
        shell.select(catalog.get(GameId(1)).unwrap());

        shell.clear();
        assert_eq!(shell.view(&catalog), View::Catalog);
        assert!(!shell.back_visible());

        // Repeated clears while already on the catalog change nothing.
        shell.clear();
        shell.clear();
        assert_eq!(shell.view(&catalog), View::Catalog);
    }

    #[test]
    fn reselecting_after_clear_resolves_the_same_entry() {
        let catalog = test_catalog();
        let mut shell = Shell::new();
        let entry = catalog.get(GameId(1)).unwrap();

        shell.select(entry);
        shell.clear();
        shell.select(entry);
        assert_eq!(shell.view(&catalog), View::Player(entry));
    }
}
