//! Todo Models
//!
//! The persisted data: a `Todo` record and the ordered `TodoList`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Millisecond timestamp taken at creation, unique within a list
    pub id: u64,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Ordered list of todos, serialized as a bare JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList(Vec<Todo>);

impl TodoList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.0.iter()
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.0.iter().find(|todo| todo.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.0.iter().filter(|todo| todo.completed).count()
    }

    /// Id for a todo created at `now_ms`.
    ///
    /// Never below the clock reading, and always above every id already in the
    /// list, so two additions in the same millisecond cannot collide.
    pub fn next_id(&self, now_ms: u64) -> u64 {
        match self.0.iter().map(|todo| todo.id).max() {
            Some(max) => now_ms.max(max.saturating_add(1)),
            None => now_ms,
        }
    }

    pub(crate) fn push(&mut self, todo: Todo) {
        self.0.push(todo);
    }

    pub(crate) fn find_mut(&mut self, id: u64) -> Option<&mut Todo> {
        self.0.iter_mut().find(|todo| todo.id == id)
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&Todo) -> bool) {
        self.0.retain(keep);
    }

    /// Drop entries that break the list invariants: blank text or an id seen
    /// earlier in the list. Order of the remaining entries is kept.
    pub fn sanitized(self) -> Self {
        let before = self.0.len();
        let mut seen = HashSet::with_capacity(before);
        let kept: Vec<Todo> = self
            .0
            .into_iter()
            .filter(|todo| !todo.text.trim().is_empty() && seen.insert(todo.id))
            .collect();

        if kept.len() != before {
            log::warn!(
                "[STORE] Dropped {} invalid todo(s) from persisted data",
                before - kept.len()
            );
        }
        Self(kept)
    }
}

impl IntoIterator for TodoList {
    type Item = Todo;
    type IntoIter = std::vec::IntoIter<Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
