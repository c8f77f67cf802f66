//! Drag-and-drop between board columns.
//!
//! A session only tracks which card is being dragged and which column is
//! under the pointer. Dropping yields a [`DropMove`] for
//! [`CardStore::apply_drop`](crate::store::CardStore::apply_drop); there is no
//! ordering within a column.

use crate::domain::{card::CardId, vocabulary::Category};

/// Result of dropping a card onto a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropMove {
    pub card_id: CardId,
    pub category: Category,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    dragging: Option<CardId>,
    hovered: Option<Category>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts dragging a card. Picking up a second card replaces the first.
    pub fn pick_up(&mut self, card_id: CardId) {
        self.dragging = Some(card_id);
        self.hovered = None;
    }

    /// Gets the held card, if any
    pub fn dragging(&self) -> Option<&CardId> {
        self.dragging.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Marks a column as the current drop target. Ignored when nothing is held.
    pub fn hover(&mut self, category: Category) {
        if self.dragging.is_some() {
            self.hovered = Some(category);
        }
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    /// Gets the column under the pointer
    pub fn hovered(&self) -> Option<Category> {
        self.hovered
    }

    /// Ends the drag without a move
    pub fn cancel(&mut self) {
        self.dragging = None;
        self.hovered = None;
    }

    /// Drops the held card onto `category`, ending the session
    pub fn drop_on(&mut self, category: Category) -> Option<DropMove> {
        self.hovered = None;
        self.dragging
            .take()
            .map(|card_id| DropMove { card_id, category })
    }

    /// Drops onto the hovered column, if any; otherwise the drag is cancelled
    pub fn release(&mut self) -> Option<DropMove> {
        match self.hovered {
            Some(category) => self.drop_on(category),
            None => {
                self.cancel();
                None
            }
        }
    }
}
