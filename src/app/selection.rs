use crate::pipeline::Article;
use std::collections::HashSet;

/// The current result set and which of its articles are ticked.
///
/// `selected` only ever holds keys of articles in `articles`: replacing the
/// articles resets the selection, and toggles for unknown keys are ignored.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    articles: Vec<Article>,
    selected: HashSet<String>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a fresh result set with every article selected.
    pub fn replace(&mut self, articles: Vec<Article>) {
        self.selected = articles.iter().map(|a| a.key().to_string()).collect();
        self.articles = articles;
    }

    pub fn toggle(&mut self, key: &str, is_selected: bool) {
        if !self.contains(key) {
            return;
        }
        if is_selected {
            if !self.selected.contains(key) {
                self.selected.insert(key.to_string());
            }
        } else {
            self.selected.remove(key);
        }
    }

    /// Invert one checkbox. Returns the new state, `None` for unknown keys.
    pub fn flip(&mut self, key: &str) -> Option<bool> {
        if !self.contains(key) {
            return None;
        }
        let now = !self.is_selected(key);
        self.toggle(key, now);
        Some(now)
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains(key)
    }

    pub fn select_all(&mut self) {
        self.selected = self.articles.iter().map(|a| a.key().to_string()).collect();
    }

    pub fn select_none(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.articles.iter().any(|a| a.key() == key)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, index: usize) -> Option<&Article> {
        self.articles.get(index)
    }

    /// Selected articles in result order.
    pub fn selected_articles(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter().filter(|a| self.is_selected(a.key()))
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
