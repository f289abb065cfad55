//! Todo Store
//!
//! List operations and the persistence round-trip. The list operations take
//! the list by value and hand back the new one; only `load` and `save` touch
//! storage.

use thiserror::Error;

use crate::models::{Todo, TodoList};
use crate::storage::{KeyValueStorage, StorageError};

/// Errors from the persistence round-trip
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to decode todo list: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode todo list: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Todo list persisted under one fixed key
#[derive(Debug, Clone)]
pub struct TodoStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> TodoStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Read the persisted list. A missing key is an empty list.
    pub fn try_load(&self) -> Result<TodoList, StoreError> {
        let Some(json) = self.storage.get(&self.key)? else {
            return Ok(TodoList::new());
        };
        let list: TodoList = serde_json::from_str(&json).map_err(StoreError::Decode)?;
        Ok(list.sanitized())
    }

    /// Read the persisted list, falling back to an empty one on any failure
    pub fn load(&self) -> TodoList {
        match self.try_load() {
            Ok(list) => {
                log::info!("[STORE] Loaded {} todos from '{}'", list.len(), self.key);
                list
            }
            Err(e) => {
                log::warn!("[STORE] Could not load '{}', starting empty: {}", self.key, e);
                TodoList::new()
            }
        }
    }

    /// Overwrite the persisted value with the full list
    pub fn save(&self, list: &TodoList) -> Result<(), StoreError> {
        let json = serde_json::to_string(list).map_err(StoreError::Encode)?;
        self.storage.set(&self.key, &json)?;
        log::debug!("[STORE] Saved {} todos to '{}'", list.len(), self.key);
        Ok(())
    }
}

/// Append a todo stamped with the current time
pub fn add(list: TodoList, text: &str) -> TodoList {
    add_at(list, text, now_millis())
}

/// Append a todo created at `now_ms`. Blank text leaves the list unchanged.
pub fn add_at(mut list: TodoList, text: &str, now_ms: u64) -> TodoList {
    let text = text.trim();
    if text.is_empty() {
        return list;
    }
    let id = list.next_id(now_ms);
    list.push(Todo::new(id, text));
    list
}

/// Flip `completed` on the todo with `id`
pub fn toggle(mut list: TodoList, id: u64) -> TodoList {
    if let Some(todo) = list.find_mut(id) {
        todo.completed = !todo.completed;
    }
    list
}

pub fn remove(mut list: TodoList, id: u64) -> TodoList {
    list.retain(|todo| todo.id != id);
    list
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const KEY: &str = "todos";

    fn sample_list() -> TodoList {
        let list = add_at(TodoList::new(), "buy milk", 1000);
        let list = add_at(list, "walk dog", 2000);
        add_at(list, "write report", 3000)
    }

    /// Backend whose every call fails
    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                message: "SecurityError".to_string(),
            })
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                message: "QuotaExceededError".to_string(),
            })
        }
    }

    #[test]
    fn test_add_appends_incomplete_todo() {
        let list = sample_list();
        let before = list.len();

        let list = add(list, "call mom");
        assert_eq!(list.len(), before + 1);

        let last = list.iter().last().unwrap();
        assert_eq!(last.text, "call mom");
        assert!(!last.completed);
    }

    #[test]
    fn test_add_trims_text() {
        let list = add_at(TodoList::new(), "  buy milk \n", 1000);
        assert_eq!(list.get(1000).unwrap().text, "buy milk");
    }

    #[test]
    fn test_add_blank_is_noop() {
        let list = sample_list();
        assert_eq!(add(list.clone(), ""), list);
        assert_eq!(add(list.clone(), "   "), list);
        assert_eq!(add(list.clone(), "\t\n"), list);
    }

    #[test]
    fn test_add_same_millisecond_gets_distinct_ids() {
        let list = add_at(TodoList::new(), "one", 5000);
        let list = add_at(list, "two", 5000);
        let list = add_at(list, "three", 4000);

        let ids: Vec<u64> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5000, 5001, 5002]);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let list = sample_list();
        let toggled = toggle(list.clone(), 2000);
        assert!(toggled.get(2000).unwrap().completed);
        assert_ne!(toggled, list);

        assert_eq!(toggle(toggled, 2000), list);
    }

    #[test]
    fn test_toggle_keeps_order_and_others() {
        let list = toggle(sample_list(), 2000);
        let ids: Vec<u64> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1000, 2000, 3000]);
        assert!(!list.get(1000).unwrap().completed);
        assert!(!list.get(3000).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let list = sample_list();
        assert_eq!(toggle(list.clone(), 42), list);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let list = sample_list();
        let once = remove(list, 2000);
        let twice = remove(once.clone(), 2000);

        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
        assert!(once.get(2000).is_none());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let list = sample_list();
        assert_eq!(remove(list.clone(), 42), list);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = TodoStore::new(MemoryStorage::new(), KEY);
        let list = toggle(sample_list(), 1000);

        store.save(&list).expect("Save failed");
        assert_eq!(store.load(), list);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let store = TodoStore::new(MemoryStorage::new(), KEY);
        store.save(&sample_list()).unwrap();
        store.save(&TodoList::new()).unwrap();

        assert_eq!(store.storage.raw(KEY).as_deref(), Some("[]"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = TodoStore::new(MemoryStorage::new(), KEY);
        assert!(store.try_load().unwrap().is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_corrupted_data_is_empty() {
        for raw in ["not json", "{\"id\":1}", "[{\"id\":\"x\",\"text\":1}]", ""] {
            let store = TodoStore::new(MemoryStorage::with_entry(KEY, raw), KEY);
            assert!(matches!(store.try_load(), Err(StoreError::Decode(_))), "raw: {raw:?}");
            assert!(store.load().is_empty());
        }
    }

    #[test]
    fn test_load_drops_invalid_entries() {
        let raw = r#"[{"id":1,"text":"keep","completed":false},{"id":1,"text":"dup","completed":true},{"id":2,"text":"","completed":false}]"#;
        let store = TodoStore::new(MemoryStorage::with_entry(KEY, raw), KEY);

        let list = store.load();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(1).unwrap().text, "keep");
    }

    #[test]
    fn test_load_uses_its_own_key() {
        let store = TodoStore::new(MemoryStorage::with_entry("other", "[]"), KEY);
        store.save(&sample_list()).unwrap();
        assert_eq!(store.key, KEY);
        assert_eq!(store.storage.raw("other").as_deref(), Some("[]"));
    }

    #[test]
    fn test_broken_storage_degrades() {
        let store = TodoStore::new(BrokenStorage, KEY);
        assert!(matches!(store.try_load(), Err(StoreError::Storage(_))));
        assert!(store.load().is_empty());

        let err = store.save(&sample_list()).unwrap_err();
        assert!(err.to_string().contains("QuotaExceededError"));
    }

    #[test]
    fn test_scenario_add_toggle_remove() {
        let store = TodoStore::new(MemoryStorage::new(), KEY);
        let list = store.load();
        assert!(list.is_empty());

        let list = add(list, "buy milk");
        store.save(&list).unwrap();
        assert_eq!(list.len(), 1);
        let todo = list.iter().next().unwrap().clone();
        assert_eq!(todo.text, "buy milk");
        assert!(!todo.completed);

        let list = toggle(list, todo.id);
        store.save(&list).unwrap();
        assert!(store.load().get(todo.id).unwrap().completed);

        let list = remove(list, todo.id);
        store.save(&list).unwrap();
        assert!(list.is_empty());
        assert!(store.load().is_empty());
    }
}
