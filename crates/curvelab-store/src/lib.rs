#![warn(missing_docs)]

//! History-backed keyed value store for the curvelab diagram.
//!
//! Models the browser pattern of keeping UI state in `history.state`: a
//! stack of JSON snapshots keyed by string, a cursor for back/forward
//! navigation, and change subscriptions per key. `set` edits the current
//! entry in place (no new history entry); `push_set` snapshots the current
//! entry and pushes the change as a new one, so navigating back restores
//! the previous value.
//!
//! Values are [`serde_json::Value`] because one history holds
//! heterogeneous keys, exactly like the JSON `history.state` object it
//! models.

use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

/// Errors from the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// An update was requested for a key with no current value.
    #[error("no previous state to update for key {key:?}")]
    NoPreviousValue {
        /// The key that had no value.
        key: String,
    },
}

/// Handle returned by [`History::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&Value)>;

struct Subscriber {
    key: String,
    callback: Callback,
}

/// A keyed value store with navigation history.
pub struct History {
    entries: Vec<Map<String, Value>>,
    cursor: usize,
    subscribers: HashMap<u64, Subscriber>,
    next_id: u64,
}

impl History {
    /// A history with a single empty root entry.
    pub fn new() -> Self {
        Self {
            entries: vec![Map::new()],
            cursor: 0,
            subscribers: HashMap::new(),
            next_id: 0,
        }
    }

    /// The value of `key` in the current entry, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries[self.cursor].get(key)
    }

    /// Number of history entries (current plus past and forward ones).
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Subscribe to changes of `key`.
    ///
    /// The callback fires immediately if the key currently has a value,
    /// then on every change to it, including changes caused by navigation.
    pub fn subscribe(
        &mut self,
        key: impl Into<String>,
        mut callback: impl FnMut(&Value) + 'static,
    ) -> SubscriptionId {
        let key = key.into();
        if let Some(value) = self.entries[self.cursor].get(&key) {
            let value = value.clone();
            callback(&value);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.insert(
            id,
            Subscriber {
                key,
                callback: Box::new(callback),
            },
        );
        SubscriptionId(id)
    }

    /// Remove a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.remove(&id.0);
    }

    /// Set `key` in the current entry, without creating a history entry.
    ///
    /// No-op (and no notification) when the value is unchanged.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if self.entries[self.cursor].get(&key) == Some(&value) {
            return;
        }
        self.entries[self.cursor].insert(key.clone(), value.clone());
        self.notify(&key, &value);
    }

    /// Set `key`, pushing the change as a new history entry.
    ///
    /// Any forward entries are discarded, as when navigating after going
    /// back. No-op when the value is unchanged.
    pub fn push_set(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if self.entries[self.cursor].get(&key) == Some(&value) {
            return;
        }
        let mut entry = self.entries[self.cursor].clone();
        entry.insert(key.clone(), value.clone());
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor += 1;
        self.notify(&key, &value);
    }

    /// Derive a new value for `key` from its current one, in place.
    ///
    /// # Errors
    ///
    /// [`StoreError::NoPreviousValue`] if the key has no current value.
    pub fn update(
        &mut self,
        key: &str,
        f: impl FnOnce(&Value) -> Value,
    ) -> Result<(), StoreError> {
        let current = self.get(key).ok_or_else(|| StoreError::NoPreviousValue {
            key: key.to_string(),
        })?;
        let next = f(current);
        self.set(key, next);
        Ok(())
    }

    /// Like [`update`](Self::update), but pushes a new history entry.
    ///
    /// # Errors
    ///
    /// [`StoreError::NoPreviousValue`] if the key has no current value.
    pub fn push_update(
        &mut self,
        key: &str,
        f: impl FnOnce(&Value) -> Value,
    ) -> Result<(), StoreError> {
        let current = self.get(key).ok_or_else(|| StoreError::NoPreviousValue {
            key: key.to_string(),
        })?;
        let next = f(current);
        self.push_set(key, next);
        Ok(())
    }

    /// Navigate one entry back. Returns whether navigation happened.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.notify_current();
        true
    }

    /// Navigate one entry forward. Returns whether navigation happened.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        self.notify_current();
        true
    }

    fn notify(&mut self, key: &str, value: &Value) {
        for sub in self.subscribers.values_mut() {
            if sub.key == key {
                (sub.callback)(value);
            }
        }
    }

    /// Notify every subscriber whose key is present in the current entry,
    /// the popstate analog.
    fn notify_current(&mut self) {
        let entry = self.entries[self.cursor].clone();
        for sub in self.subscribers.values_mut() {
            if let Some(value) = entry.get(&sub.key) {
                (sub.callback)(value);
            }
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
