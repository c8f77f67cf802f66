//! The card store: sole owner of the card collection.
//!
//! Every successful mutation writes the full collection back to the
//! storage backend before returning. Persistence failures are logged and
//! reported through the [`Notifier`]; the in-memory collection stays the
//! source of truth for the session either way.

use crate::{
    config::StoreConfig,
    domain::{
        filter::matches_term_and_tags, sample_cards, Board, Card, CardDraft, CardId, CardPatch,
        Category, DropMove, Filter, Tag,
    },
    error::Result,
    notify::{Notification, Notifier},
    storage::{parse_cards, Storage},
};
use std::{collections::HashSet, sync::Arc};
use tracing::{debug, error, info, warn};

pub struct CardStore<S: Storage> {
    cards: Vec<Card>,
    storage: S,
    notifier: Arc<dyn Notifier>,
    config: StoreConfig,
    /// Set while the latest mutation has not reached storage
    unsaved: bool,
}

impl<S: Storage> CardStore<S> {
    /// Loads the collection from `storage`.
    ///
    /// Never fails: a missing value is seeded with sample cards and an
    /// unreadable one falls back to the sample cards after a notification.
    pub async fn load(storage: S, notifier: Arc<dyn Notifier>, config: StoreConfig) -> Self {
        let mut store = Self {
            cards: Vec::new(),
            storage,
            notifier,
            config,
            unsaved: false,
        };

        if let Err(e) = store.storage.initialize().await {
            warn!(error = %e, "storage initialization failed");
        }

        store.cards = store.read_or_seed().await;
        info!(
            key = %store.config.storage_key,
            cards = store.cards.len(),
            "card store loaded"
        );
        store
    }

    async fn read_or_seed(&self) -> Vec<Card> {
        let key = self.config.storage_key.clone();

        match self.storage.read(&key).await {
            Ok(Some(raw)) => match parse_cards(&raw) {
                Ok(cards) => dedup_ids(cards),
                Err(e) => {
                    error!(key = %key, error = %e, "stored cards are corrupt, reseeding");
                    self.notifier.notify(Notification::error("Failed to load data"));
                    if self.config.quarantine_corrupt {
                        self.quarantine(&raw).await;
                    }
                    self.seed().await
                }
            },
            Ok(None) if self.config.seed_when_empty => {
                info!(key = %key, "no stored cards, seeding sample data");
                self.seed().await
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                // Unreadable is not the same as absent: keep the seed in
                // memory but leave whatever is stored alone until the next
                // mutation.
                error!(key = %key, error = %e, "failed to read stored cards");
                self.notifier.notify(Notification::error("Failed to load data"));
                sample_cards()
            }
        }
    }

    async fn seed(&self) -> Vec<Card> {
        let cards = sample_cards();
        self.persist(&cards).await;
        cards
    }

    async fn quarantine(&self, raw: &str) {
        let backup = self.free_quarantine_key().await;
        match self.storage.write(&backup, raw).await {
            Ok(()) => warn!(key = %backup, "corrupt cards preserved"),
            Err(e) => error!(key = %backup, error = %e, "failed to preserve corrupt cards"),
        }
    }

    /// First backup key that does not hold a value yet
    async fn free_quarantine_key(&self) -> String {
        let mut attempt = 0;
        loop {
            let key = self.config.quarantine_key_for(attempt);
            match self.storage.read(&key).await {
                Ok(Some(_)) => attempt += 1,
                Ok(None) => return key,
                Err(e) => {
                    warn!(key = %key, error = %e, "cannot inspect backup key, reusing it");
                    return key;
                }
            }
        }
    }

    /// Writes `cards` under the configured key, reporting failures.
    /// Returns whether the write went through.
    async fn persist(&self, cards: &[Card]) -> bool {
        match self
            .storage
            .save_cards(&self.config.storage_key, cards)
            .await
        {
            Ok(()) => {
                debug!(cards = cards.len(), "cards persisted");
                true
            }
            Err(e) => {
                error!(key = %self.config.storage_key, error = %e, "failed to persist cards");
                self.notifier.notify(Notification::error("Failed to save data"));
                false
            }
        }
    }

    /// Persists the collection after a mutation
    async fn save(&mut self) {
        self.unsaved = !self.persist(&self.cards).await;
    }

    /// Creates a card from `draft` and appends it to the collection
    pub async fn add(&mut self, draft: CardDraft) -> Result<Card> {
        let mut card = Card::from_draft(draft)?;
        while self.position(&card.id).is_some() {
            card.id = CardId::generate();
        }

        info!(card_id = %card.id, name = %card.name, category = %card.category, "card added");
        self.cards.push(card.clone());
        self.save().await;
        self.notifier
            .notify(Notification::success("Technology added successfully"));
        Ok(card)
    }

    /// Merges `patch` into the card with `id`.
    ///
    /// Returns `Ok(None)` when no such card exists. An invalid patch is
    /// rejected before any lookup.
    pub async fn update(&mut self, id: &CardId, patch: CardPatch) -> Result<Option<Card>> {
        patch.validate()?;

        let Some(pos) = self.position(id) else {
            debug!(card_id = %id, "update of unknown card ignored");
            return Ok(None);
        };

        self.cards[pos].apply(patch)?;
        let card = self.cards[pos].clone();
        info!(card_id = %id, "card updated");
        self.save().await;
        self.notifier.notify(Notification::success("Card updated"));
        Ok(Some(card))
    }

    /// Removes the card with `id`, returning it if it existed
    pub async fn remove(&mut self, id: &CardId) -> Option<Card> {
        let Some(pos) = self.position(id) else {
            debug!(card_id = %id, "removal of unknown card ignored");
            return None;
        };

        let card = self.cards.remove(pos);
        info!(card_id = %id, name = %card.name, "card removed");
        self.save().await;
        self.notifier
            .notify(Notification::success("Technology removed"));
        Some(card)
    }

    /// Moves the card with `id` into `category`
    pub async fn move_card(&mut self, id: &CardId, category: Category) -> Option<Card> {
        let Some(pos) = self.position(id) else {
            debug!(card_id = %id, "move of unknown card ignored");
            return None;
        };

        let card = &mut self.cards[pos];
        let from = card.category;
        card.set_category(category);
        let card = card.clone();

        info!(card_id = %id, from = %from, to = %category, "card moved");
        self.save().await;
        self.notifier
            .notify(Notification::success(format!("Moved to {category}")));
        Some(card)
    }

    /// Applies the outcome of a drag-and-drop session
    pub async fn apply_drop(&mut self, drop: DropMove) -> Option<Card> {
        self.move_card(&drop.card_id, drop.category).await
    }

    /// Cards matching `term` (case-insensitive on name, description and
    /// notes) that carry every tag in `tags`, in collection order
    pub fn query(&self, term: &str, tags: &[Tag]) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|card| matches_term_and_tags(card, term, tags))
            .collect()
    }

    /// [`query`](Self::query) parameterized by a [`Filter`]
    pub fn filtered(&self, filter: &Filter) -> Vec<&Card> {
        self.query(filter.search_term(), filter.selected_tags())
    }

    /// Filtered cards of one column
    pub fn by_category(&self, category: Category, filter: &Filter) -> Vec<&Card> {
        self.filtered(filter)
            .into_iter()
            .filter(|card| card.category == category)
            .collect()
    }

    /// Column view of the filtered collection
    pub fn board(&self, filter: &Filter) -> Board<'_> {
        Board::build(&self.cards, filter)
    }

    /// Gets a card by ID
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    /// Returns every card in collection order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the configuration the store was loaded with
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Whether the last mutation failed to reach storage
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Tears the store down, handing back the backend.
    ///
    /// Retries the write only when the last mutation failed to persist. A
    /// session without mutations never writes, so a collection that fell
    /// back to the sample cards cannot replace data that failed to read.
    pub async fn close(self) -> S {
        if self.unsaved {
            info!(key = %self.config.storage_key, "retrying unsaved cards on close");
            self.persist(&self.cards).await;
        }
        debug!(key = %self.config.storage_key, "card store closed");
        self.storage
    }

    fn position(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == id)
    }
}

/// Drops later cards that reuse an earlier id
fn dedup_ids(cards: Vec<Card>) -> Vec<Card> {
    let mut seen: HashSet<CardId> = HashSet::with_capacity(cards.len());
    let total = cards.len();
    let unique: Vec<Card> = cards
        .into_iter()
        .filter(|card| seen.insert(card.id.clone()))
        .collect();

    if unique.len() != total {
        warn!(dropped = total - unique.len(), "stored cards contained duplicate ids");
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::DEFAULT_STORAGE_KEY,
        notify::{Level, RecordingNotifier},
        storage::MemoryStorage,
    };
    use std::str::FromStr;

    struct Harness {
        store: CardStore<Arc<MemoryStorage>>,
        storage: Arc<MemoryStorage>,
        notifier: Arc<RecordingNotifier>,
    }

    async fn harness_with(storage: MemoryStorage) -> Harness {
        let storage = Arc::new(storage);
        let notifier = Arc::new(RecordingNotifier::new());
        let store = CardStore::load(
            storage.clone(),
            notifier.clone(),
            StoreConfig::default(),
        )
        .await;
        notifier.drain();
        Harness {
            store,
            storage,
            notifier,
        }
    }

    /// Store holding exactly the given cards
    async fn harness_with_cards(cards: &[Card]) -> Harness {
        let json = serde_json::to_string(cards).unwrap();
        harness_with(MemoryStorage::with_entry(
            crate::config::DEFAULT_STORAGE_KEY,
            json,
        ))
        .await
    }

    async fn stored(storage: &MemoryStorage) -> Vec<Card> {
        storage
            .load_cards(crate::config::DEFAULT_STORAGE_KEY)
            .await
            .unwrap()
            .unwrap()
    }

    fn draft(name: &str, category: Category, tags: &[Tag]) -> CardDraft {
        CardDraft::new(name, format!("{name} description"), category).with_tags(tags.to_vec())
    }

    fn names(cards: &[&Card]) -> Vec<String> {
        cards.iter().map(|c| c.name.clone()).collect()
    }

    fn sample_names() -> Vec<String> {
        sample_cards().into_iter().map(|c| c.name).collect()
    }

    fn loaded_names(store: &CardStore<Arc<MemoryStorage>>) -> Vec<String> {
        store.cards().iter().map(|c| c.name.clone()).collect()
    }

    #[tokio::test]
    async fn test_load_seeds_and_persists_when_empty() {
        let h = harness_with(MemoryStorage::new()).await;

        assert_eq!(loaded_names(&h.store), sample_names());
        assert_eq!(stored(&h.storage).await, h.store.cards());
    }

    #[tokio::test]
    async fn test_load_without_seeding() {
        let storage = Arc::new(MemoryStorage::new());
        let config = StoreConfig {
            seed_when_empty: false,
            ..StoreConfig::default()
        };
        let store = CardStore::load(storage.clone(), Arc::new(RecordingNotifier::new()), config)
            .await;

        assert!(store.is_empty());
        assert!(storage.keys().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_existing_cards() {
        let h = harness_with_cards(&[]).await;
        assert!(h.store.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_data_is_quarantined_and_reseeded() {
        let storage = Arc::new(MemoryStorage::with_entry(
            crate::config::DEFAULT_STORAGE_KEY,
            "[{\"id\": oops",
        ));
        let notifier = Arc::new(RecordingNotifier::new());
        let store =
            CardStore::load(storage.clone(), notifier.clone(), StoreConfig::default()).await;

        assert_eq!(loaded_names(&store), sample_names());
        assert_eq!(stored(&storage).await, store.cards());

        let backup = storage
            .read(&store.config().quarantine_key())
            .await
            .unwrap();
        assert_eq!(backup.as_deref(), Some("[{\"id\": oops"));

        let received = notifier.drain();
        assert_eq!(received, vec![Notification::error("Failed to load data")]);
    }

    #[tokio::test]
    async fn test_repeated_corruption_keeps_every_backup() {
        let storage = Arc::new(MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, "first"));
        let config = StoreConfig::default();

        CardStore::load(storage.clone(), Arc::new(RecordingNotifier::new()), config.clone()).await;
        storage.write(DEFAULT_STORAGE_KEY, "second").await.unwrap();
        CardStore::load(storage.clone(), Arc::new(RecordingNotifier::new()), config.clone()).await;

        let backup = |attempt| {
            let storage = storage.clone();
            let key = config.quarantine_key_for(attempt);
            async move { storage.read(&key).await.unwrap() }
        };
        assert_eq!(backup(0).await.as_deref(), Some("first"));
        assert_eq!(backup(1).await.as_deref(), Some("second"));
        assert!(backup(2).await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_category_counts_as_corrupt() {
        let raw = r#"[{"id":"1","name":"Whisper","description":"d","tags":[],
            "category":"Working Prototype","createdAt":"2024-01-01T00:00:00Z",
            "updatedAt":"2024-01-01T00:00:00Z"}]"#;
        let h = harness_with(MemoryStorage::with_entry(
            crate::config::DEFAULT_STORAGE_KEY,
            raw,
        ))
        .await;

        assert_eq!(h.store.len(), sample_names().len());
        assert!(h
            .storage
            .keys()
            .await
            .contains(&h.store.config().quarantine_key()));
    }

    #[tokio::test]
    async fn test_read_failure_falls_back_without_overwriting() {
        let storage = Arc::new(MemoryStorage::with_entry(
            crate::config::DEFAULT_STORAGE_KEY,
            "[]",
        ));
        storage.set_fail_reads(true);
        let notifier = Arc::new(RecordingNotifier::new());

        let store =
            CardStore::load(storage.clone(), notifier.clone(), StoreConfig::default()).await;

        assert_eq!(store.len(), sample_names().len());
        assert_eq!(notifier.drain()[0].level, Level::Error);

        storage.set_fail_reads(false);
        assert_eq!(
            storage
                .read(crate::config::DEFAULT_STORAGE_KEY)
                .await
                .unwrap()
                .as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_close_after_read_failure_leaves_storage_alone() {
        let storage = Arc::new(MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, "[]"));
        storage.set_fail_reads(true);

        let store = CardStore::load(
            storage.clone(),
            Arc::new(RecordingNotifier::new()),
            StoreConfig::default(),
        )
        .await;
        assert_eq!(loaded_names(&store), sample_names());
        assert!(!store.has_unsaved_changes());

        storage.set_fail_reads(false);
        store.close().await;

        assert_eq!(
            storage.read(DEFAULT_STORAGE_KEY).await.unwrap().as_deref(),
            Some("[]")
        );
        assert_eq!(storage.keys().await, vec![DEFAULT_STORAGE_KEY.to_string()]);
    }

    #[tokio::test]
    async fn test_mutation_after_read_failure_persists() {
        let storage = Arc::new(MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, "[]"));
        storage.set_fail_reads(true);
        let mut store = CardStore::load(
            storage.clone(),
            Arc::new(RecordingNotifier::new()),
            StoreConfig::default(),
        )
        .await;
        storage.set_fail_reads(false);

        store
            .add(draft("Vosk", Category::SpeechToText, &[]))
            .await
            .unwrap();

        assert_eq!(stored(&storage).await, store.cards());
        assert_eq!(store.len(), sample_names().len() + 1);
    }

    #[tokio::test]
    async fn test_close_retries_a_failed_write() {
        let mut h = harness_with_cards(&[]).await;
        h.storage.set_fail_writes(true);
        let card = h
            .store
            .add(draft("Whisper", Category::SpeechToText, &[]))
            .await
            .unwrap();
        assert!(h.store.has_unsaved_changes());

        h.storage.set_fail_writes(false);
        let storage = h.store.close().await;

        assert_eq!(stored(&storage).await, vec![card]);
    }

    #[tokio::test]
    async fn test_duplicate_stored_ids_keep_first() {
        let first = Card::from_draft(draft("First", Category::Other, &[])).unwrap();
        let mut second = Card::from_draft(draft("Second", Category::Other, &[])).unwrap();
        second.id = first.id.clone();

        let h = harness_with_cards(&[first, second]).await;
        assert_eq!(h.store.len(), 1);
        assert_eq!(h.store.cards()[0].name, "First");
    }

    #[tokio::test]
    async fn test_add_assigns_distinct_ids() {
        let mut h = harness_with_cards(&[]).await;

        let mut ids = HashSet::new();
        for i in 0..50 {
            let card = h
                .store
                .add(draft(&format!("Tech {i}"), Category::Other, &[]))
                .await
                .unwrap();
            assert!(ids.insert(card.id));
        }
        assert_eq!(h.store.len(), 50);
    }

    #[tokio::test]
    async fn test_add_appears_once_with_equal_timestamps() {
        let mut h = harness_with_cards(&[]).await;

        let card = h
            .store
            .add(draft("Whisper", Category::SpeechToText, &[Tag::Stt]))
            .await
            .unwrap();

        let all = h.store.query("", &[]);
        assert_eq!(all.iter().filter(|c| c.id == card.id).count(), 1);
        assert_eq!(card.created_at, card.updated_at);
        assert_eq!(stored(&h.storage).await, vec![card]);
        assert_eq!(
            h.notifier.drain(),
            vec![Notification::success("Technology added successfully")]
        );
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_draft() {
        let mut h = harness_with_cards(&[]).await;

        let result = h.store.add(draft(" ", Category::Other, &[])).await;

        assert!(result.is_err());
        assert!(h.store.is_empty());
        assert!(h.notifier.drain().is_empty());
    }

    #[tokio::test]
    async fn test_add_preserves_insertion_order() {
        let mut h = harness_with_cards(&[]).await;
        for name in ["C", "A", "B"] {
            h.store.add(draft(name, Category::Other, &[])).await.unwrap();
        }
        assert_eq!(names(&h.store.query("", &[])), vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_update_changes_only_given_fields() {
        let mut h = harness_with_cards(&[]).await;
        let card = h
            .store
            .add(draft("Whisper", Category::SpeechToText, &[Tag::Stt]).with_notes("gpu"))
            .await
            .unwrap();

        let updated = h
            .store
            .update(&card.id, CardPatch::default().name("X"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "X");
        assert_eq!(updated.description, card.description);
        assert_eq!(updated.tags, card.tags);
        assert_eq!(updated.category, card.category);
        assert_eq!(updated.notes, card.notes);
        assert_eq!(updated.created_at, card.created_at);
        assert!(updated.updated_at > card.updated_at);
        assert_eq!(stored(&h.storage).await, vec![updated]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_noop() {
        let mut h = harness_with_cards(&[]).await;
        h.store
            .add(draft("Whisper", Category::SpeechToText, &[]))
            .await
            .unwrap();
        h.notifier.drain();
        let before = stored(&h.storage).await;

        let missing = CardId::from_str("missing").unwrap();
        let result = h
            .store
            .update(&missing, CardPatch::default().name("X"))
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(stored(&h.storage).await, before);
        assert!(h.notifier.drain().is_empty());
    }

    #[tokio::test]
    async fn test_update_with_blank_name_is_rejected() {
        let mut h = harness_with_cards(&[]).await;
        let card = h
            .store
            .add(draft("Whisper", Category::SpeechToText, &[]))
            .await
            .unwrap();

        let result = h
            .store
            .update(&card.id, CardPatch::default().name(""))
            .await;

        assert!(result.is_err());
        assert_eq!(h.store.get(&card.id), Some(&card));
    }

    #[tokio::test]
    async fn test_remove_then_everything_is_noop() {
        let mut h = harness_with_cards(&[]).await;
        let card = h
            .store
            .add(draft("Whisper", Category::SpeechToText, &[]))
            .await
            .unwrap();

        assert_eq!(h.store.remove(&card.id).await, Some(card.clone()));
        assert!(stored(&h.storage).await.is_empty());

        assert!(h.store.remove(&card.id).await.is_none());
        assert!(h
            .store
            .update(&card.id, CardPatch::default().name("X"))
            .await
            .unwrap()
            .is_none());
        assert!(h.store.move_card(&card.id, Category::Other).await.is_none());
        assert!(h.store.get(&card.id).is_none());
        assert!(h.store.is_empty());
    }

    #[tokio::test]
    async fn test_query_is_filter_intersective() {
        let mut h = harness_with_cards(&[]).await;
        for (name, tags) in [
            ("Whisper", vec![Tag::Stt, Tag::OpenSource, Tag::GpuRequired]),
            ("Vosk", vec![Tag::Stt, Tag::OpenSource]),
            ("Deepgram", vec![Tag::Stt, Tag::Commercial]),
            ("Piper", vec![Tag::Tts, Tag::OpenSource]),
        ] {
            h.store
                .add(draft(name, Category::SpeechToText, &tags))
                .await
                .unwrap();
        }

        for term in ["", "o", "whisper"] {
            let none = names(&h.store.query(term, &[]));
            let one = names(&h.store.query(term, &[Tag::Stt]));
            let two = names(&h.store.query(term, &[Tag::Stt, Tag::OpenSource]));

            assert!(one.iter().all(|n| none.contains(n)), "{term}");
            assert!(two.iter().all(|n| one.contains(n)), "{term}");
        }
        assert_eq!(
            names(&h.store.query("", &[Tag::Stt, Tag::OpenSource])),
            vec!["Whisper", "Vosk"]
        );
    }

    #[tokio::test]
    async fn test_query_searches_notes() {
        let mut h = harness_with_cards(&[]).await;
        h.store
            .add(draft("Bark", Category::TextToSpeech, &[]).with_notes("Runs OFFLINE"))
            .await
            .unwrap();

        assert_eq!(names(&h.store.query("offline", &[])), vec!["Bark"]);
        assert!(h.store.query("cloud", &[]).is_empty());
    }

    #[tokio::test]
    async fn test_round_trip_through_storage() {
        let mut h = harness_with(MemoryStorage::new()).await;
        h.store
            .add(draft("Bark", Category::TextToSpeech, &[Tag::from("Offline")]))
            .await
            .unwrap();
        let before = h.store.cards().to_vec();

        let storage = h.store.close().await;
        let reloaded =
            CardStore::load(storage, h.notifier.clone(), StoreConfig::default()).await;

        assert_eq!(reloaded.cards(), before.as_slice());
    }

    #[tokio::test]
    async fn test_write_failure_keeps_memory_state() {
        let mut h = harness_with_cards(&[]).await;
        h.storage.set_fail_writes(true);

        let card = h
            .store
            .add(draft("Whisper", Category::SpeechToText, &[]))
            .await
            .unwrap();

        assert_eq!(h.store.get(&card.id), Some(&card));
        assert_eq!(
            h.notifier.drain(),
            vec![
                Notification::error("Failed to save data"),
                Notification::success("Technology added successfully"),
            ]
        );
        assert!(stored(&h.storage).await.is_empty());

        h.storage.set_fail_writes(false);
        h.store.move_card(&card.id, Category::Other).await.unwrap();
        assert_eq!(stored(&h.storage).await.len(), 1);
        assert!(!h.store.has_unsaved_changes());
    }

    #[tokio::test]
    async fn test_drop_moves_card() {
        let mut h = harness_with_cards(&[]).await;
        let card = h
            .store
            .add(draft("Alexa", Category::Other, &[]))
            .await
            .unwrap();

        let mut session = crate::domain::DragSession::new();
        session.pick_up(card.id.clone());
        session.hover(Category::VoiceAssistants);
        let drop = session.release().unwrap();

        let moved = h.store.apply_drop(drop).await.unwrap();
        assert_eq!(moved.category, Category::VoiceAssistants);
        assert_eq!(stored(&h.storage).await[0].category, Category::VoiceAssistants);
        assert_eq!(
            h.notifier.drain().last(),
            Some(&Notification::success("Moved to Voice Assistants"))
        );
    }

    #[tokio::test]
    async fn test_by_category_respects_filter() {
        let mut h = harness_with_cards(&[]).await;
        h.store
            .add(draft("Whisper", Category::SpeechToText, &[Tag::Stt]))
            .await
            .unwrap();
        h.store
            .add(draft("Vosk", Category::SpeechToText, &[Tag::OnPremise]))
            .await
            .unwrap();
        h.store
            .add(draft("Bark", Category::TextToSpeech, &[Tag::OnPremise]))
            .await
            .unwrap();

        let filter = Filter::new("", [Tag::OnPremise]);
        assert_eq!(
            names(&h.store.by_category(Category::SpeechToText, &filter)),
            vec!["Vosk"]
        );

        let board = h.store.board(&filter);
        assert_eq!(board.visible_cards(), 2);
        assert_eq!(board.total_cards, 3);
    }
}
