use crate::domain::{card::Card, vocabulary::Tag};

/// Transient search and tag-filter state. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    search_term: String,
    selected_tags: Vec<Tag>,
}

impl Filter {
    pub fn new(search_term: impl Into<String>, tags: impl IntoIterator<Item = Tag>) -> Self {
        let mut filter = Self {
            search_term: search_term.into(),
            selected_tags: Vec::new(),
        };
        for tag in tags {
            if !filter.selected_tags.contains(&tag) {
                filter.selected_tags.push(tag);
            }
        }
        filter
    }

    /// Gets the raw search term
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Gets the selected tags in selection order
    pub fn selected_tags(&self) -> &[Tag] {
        &self.selected_tags
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Selects the tag if absent, deselects it otherwise
    pub fn toggle_tag(&mut self, tag: Tag) {
        if let Some(pos) = self.selected_tags.iter().position(|t| *t == tag) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag);
        }
    }

    pub fn is_tag_selected(&self, tag: &Tag) -> bool {
        self.selected_tags.contains(tag)
    }

    /// Resets both the search term and the tag selection
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.selected_tags.clear();
    }

    /// Checks if anything narrows the board
    pub fn is_active(&self) -> bool {
        !self.search_term.trim().is_empty() || !self.selected_tags.is_empty()
    }

    /// Checks a card against the term and every selected tag
    pub fn matches(&self, card: &Card) -> bool {
        matches_term_and_tags(card, &self.search_term, &self.selected_tags)
    }
}

/// Term is empty or a case-insensitive substring of name, description or
/// notes; and the card carries every selected tag.
pub(crate) fn matches_term_and_tags(card: &Card, term: &str, tags: &[Tag]) -> bool {
    let term = term.trim();
    let term_matches = term.is_empty() || card.matches_lowercase(&term.to_lowercase());
    term_matches && tags.iter().all(|tag| card.has_tag(tag))
}
