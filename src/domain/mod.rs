pub mod board;
pub mod card;
pub mod dnd;
pub mod filter;
pub mod sample;
pub mod vocabulary;

pub use board::{Board, Column};
pub use card::{Card, CardDraft, CardId, CardPatch};
pub use dnd::{DragSession, DropMove};
pub use filter::Filter;
pub use sample::sample_cards;
pub use vocabulary::{Category, Hue, Tag};
