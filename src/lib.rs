//! # Speech Kanban
//!
//! Core store and domain model for a single-user kanban board that tracks
//! speech-technology experiments.
//!
//! Cards live in fixed category columns and are kept by a [`CardStore`],
//! which persists the whole collection through a pluggable [`Storage`]
//! backend after every change. Search and tag filtering, drag-and-drop
//! moves and the column view are derived from the store without mutating it.

pub mod config;
pub mod domain;
pub mod error;
pub mod notify;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
pub use domain::{
    board::{Board, Column},
    card::{Card, CardDraft, CardId, CardPatch},
    dnd::{DragSession, DropMove},
    filter::Filter,
    vocabulary::{Category, Hue, Tag},
};
pub use error::{KanbanError, Result};
pub use notify::{Notification, Notifier, RecordingNotifier, TracingNotifier};
pub use storage::Storage;
pub use store::CardStore;
