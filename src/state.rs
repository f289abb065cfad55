//! Global Application State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoList;

/// Reactive view state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current list, mirrored to storage after every change
    pub todos: TodoList,
    /// Text in the input field, not yet submitted
    pub pending: String,
}

impl AppState {
    pub fn new(todos: TodoList) -> Self {
        Self {
            todos,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
