//! # Item Store
//!
//! Owns the ordered item collection and the draft-edit lifecycle.
//!
//! All operations are total: missing IDs are no-ops, never errors. The only
//! rejections are validation failures on `add` and `commit_edit`, which
//! leave the store (and any draft) untouched so the caller can correct the
//! input.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{constants::SEED_ITEMS, id};

use super::{Draft, DraftField, Item, Score, StoreError};

/// The ordered, session-scoped collection of items.
///
/// Items keep insertion order; deletion is permanent. Edits are staged
/// through per-item drafts so that cancelling never has to reconstruct
/// prior values and half-typed input never reaches the committed state.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Creates an empty store.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a store populated with the example seed items.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (name, impact, effort) in SEED_ITEMS {
            let impact = Score::new(impact).unwrap_or(Score::DEFAULT);
            let effort = Score::new(effort).unwrap_or(Score::DEFAULT);
            // Seed names are non-empty literals, so add cannot reject them.
            let _ = store.add(name, impact, effort);
        }
        store
    }

    /// Appends a new item with a freshly generated unique ID.
    ///
    /// Rejects names that are empty after trimming. The name is stored
    /// exactly as given, untrimmed (see `ItemStore` docs on validation).
    pub fn add(&mut self, name: &str, impact: Score, effort: Score) -> Result<&Item, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }

        let id = self.fresh_id();
        let idx = self.items.len();
        self.items.push(Item {
            id,
            name: name.to_string(),
            impact,
            effort,
            draft: None,
        });
        Ok(&self.items[idx])
    }

    /// Removes the item with the given ID.
    ///
    /// Returns `false` (no-op) if no such item exists.
    pub fn remove(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        self.items.len() != before
    }

    /// Stages a draft on the item, populated from its committed values.
    ///
    /// Calling this on an item that is already being edited resets the
    /// draft from the committed values. Other items' drafts are untouched.
    /// Returns `false` (no-op) if no such item exists.
    pub fn begin_edit(&mut self, item_id: &str) -> bool {
        let Some(item) = self.get_mut(item_id) else {
            return false;
        };

        item.draft = Some(Draft {
            name: item.name.clone(),
            impact: item.impact,
            effort: item.effort,
        });
        true
    }

    /// Overwrites one field of the item's draft.
    ///
    /// Returns `false` (no-op) if the item does not exist or has no
    /// active draft.
    pub fn update_draft(&mut self, item_id: &str, field: DraftField) -> bool {
        let Some(draft) = self.get_mut(item_id).and_then(|item| item.draft.as_mut()) else {
            return false;
        };

        match field {
            DraftField::Name(name) => draft.name = name,
            DraftField::Impact(impact) => draft.impact = impact,
            DraftField::Effort(effort) => draft.effort = effort,
        }
        true
    }

    /// Copies the draft into the committed fields and clears the draft.
    ///
    /// Returns `Ok(false)` (no-op) if the item does not exist or has no
    /// active draft. Rejects a draft whose name is empty after trimming;
    /// the draft is kept so the caller can correct it.
    pub fn commit_edit(&mut self, item_id: &str) -> Result<bool, StoreError> {
        let Some(item) = self.get_mut(item_id) else {
            return Ok(false);
        };
        let Some(draft) = item.draft.as_ref() else {
            return Ok(false);
        };

        if draft.name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }

        if let Some(draft) = item.draft.take() {
            item.name = draft.name;
            item.impact = draft.impact;
            item.effort = draft.effort;
        }
        Ok(true)
    }

    /// Clears the draft without committing; committed values are untouched.
    ///
    /// Returns `false` (no-op) if the item does not exist or has no
    /// active draft.
    pub fn cancel_edit(&mut self, item_id: &str) -> bool {
        let Some(item) = self.get_mut(item_id) else {
            return false;
        };

        item.draft.take().is_some()
    }

    /// Returns the items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by ID.
    pub fn get(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Number of items in the store.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn get_mut(&mut self, item_id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    /// Generates an ID not yet present in the collection.
    fn fresh_id(&self) -> String {
        loop {
            let candidate = id::generate();
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }
}
