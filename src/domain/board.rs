use crate::domain::{
    card::Card,
    filter::Filter,
    vocabulary::{Category, Hue},
};

/// One board column: a category and the cards that pass the filter
#[derive(Debug, Clone)]
pub struct Column<'a> {
    pub category: Category,
    pub cards: Vec<&'a Card>,
}

impl<'a> Column<'a> {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    pub fn hue(&self) -> Hue {
        self.category.hue()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Board view derived from the card collection and the current filter
#[derive(Debug, Clone)]
pub struct Board<'a> {
    pub columns: Vec<Column<'a>>,
    pub total_cards: usize,
}

impl<'a> Board<'a> {
    /// Builds one column per category, in fixed order, keeping collection
    /// order inside each column
    pub fn build(cards: &'a [Card], filter: &Filter) -> Self {
        let mut columns: Vec<Column<'a>> = Category::ALL
            .into_iter()
            .map(|category| Column {
                category,
                cards: Vec::new(),
            })
            .collect();

        for card in cards.iter().filter(|c| filter.matches(c)) {
            if let Some(column) = columns.iter_mut().find(|col| col.category == card.category) {
                column.cards.push(card);
            }
        }

        Self {
            columns,
            total_cards: cards.len(),
        }
    }

    /// Gets the column for a category
    pub fn column(&self, category: Category) -> Option<&Column<'a>> {
        self.columns.iter().find(|col| col.category == category)
    }

    /// Number of cards that passed the filter
    pub fn visible_cards(&self) -> usize {
        self.columns.iter().map(|col| col.cards.len()).sum()
    }
}
