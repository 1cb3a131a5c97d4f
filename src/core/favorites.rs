/// Session-scoped favorites, in the order they were added.
///
/// Lives as long as the session that owns it; nothing is written to disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesStore {
    names: Vec<String>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` when absent, removes it when present. Returns the new membership.
    pub fn toggle(&mut self, name: &str) -> bool {
        match self.names.iter().position(|existing| existing == name) {
            Some(index) => {
                self.names.remove(index);
                false
            }
            None => {
                self.names.push(name.to_string());
                true
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = FavoritesStore::new();
        assert!(favorites.toggle("pikachu"));
        assert!(favorites.contains("pikachu"));
        assert!(!favorites.toggle("pikachu"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_content_and_order() {
        let mut favorites = FavoritesStore::new();
        for name in ["bulbasaur", "charmander", "squirtle"] {
            favorites.toggle(name);
        }
        let before = favorites.clone();

        favorites.toggle("charmander");
        assert_eq!(favorites.names(), ["bulbasaur", "squirtle"]);
        favorites.toggle("charmander");

        // A present name comes back at the end.
        assert_eq!(favorites.names(), ["bulbasaur", "squirtle", "charmander"]);

        let mut favorites = before.clone();
        favorites.toggle("eevee");
        favorites.toggle("eevee");
        assert_eq!(favorites, before);
    }

    #[test]
    fn test_exact_match_only() {
        let mut favorites = FavoritesStore::new();
        favorites.toggle("mr-mime");
        assert!(!favorites.contains("Mr-Mime"));
        assert!(!favorites.contains("mr mime"));
        assert_eq!(favorites.len(), 1);
    }
}
