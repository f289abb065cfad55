//! Todo Controller Context
//!
//! Turns user actions into store operations. Every action saves the full list;
//! the reactive state is only written when the list actually changed.

use leptos::prelude::*;

use crate::models::TodoList;
use crate::state::{AppStateStoreFields, AppStore};
use crate::storage::{BrowserStorage, KeyValueStorage};
use crate::store::{self, TodoStore};

/// Controller shared via context
pub struct TodoContext<S = BrowserStorage> {
    state: AppStore,
    persistence: StoredValue<TodoStore<S>>,
}

impl<S> Clone for TodoContext<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for TodoContext<S> {}

impl<S> TodoContext<S>
where
    S: KeyValueStorage + Send + Sync + 'static,
{
    pub fn new(state: AppStore, persistence: TodoStore<S>) -> Self {
        Self {
            state,
            persistence: StoredValue::new(persistence),
        }
    }

    pub fn set_pending(&self, text: String) {
        self.state.pending().set(text);
    }

    /// Add the pending input as a new todo. The input is cleared only when
    /// something was added.
    pub fn submit(&self) {
        let text = self.state.pending().get_untracked();
        if self.apply(|todos| store::add(todos, &text)) {
            self.state.pending().set(String::new());
        }
    }

    /// Returns whether a todo with `id` existed
    pub fn toggle(&self, id: u64) -> bool {
        self.apply(|todos| store::toggle(todos, id))
    }

    /// Returns whether a todo with `id` existed
    pub fn delete(&self, id: u64) -> bool {
        self.apply(|todos| store::remove(todos, id))
    }

    /// Run a list operation, persist the result and publish it if it differs.
    /// Returns whether the list changed.
    fn apply(&self, op: impl FnOnce(TodoList) -> TodoList) -> bool {
        let current = self.state.todos().get_untracked();
        let next = op(current.clone());

        self.persistence.with_value(|persistence| {
            if let Err(e) = persistence.save(&next) {
                log::error!("[STORE] Failed to save todos: {}", e);
            }
        });

        let changed = next != current;
        if changed {
            self.state.todos().set(next);
        }
        changed
    }
}

/// Get the controller from context
pub fn use_todos() -> TodoContext {
    use_context::<TodoContext>().expect("TodoContext should be provided")
}
