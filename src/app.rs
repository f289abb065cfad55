//! SityakaTyatodo App
//!
//! Root component: hydrates the list from storage and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TodoListView};
use crate::config::AppConfig;
use crate::context::TodoContext;
use crate::state::{AppState, AppStateStoreFields};
use crate::storage::BrowserStorage;
use crate::store::TodoStore;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();

    // Hydrate once on mount
    let persistence = TodoStore::new(BrowserStorage, config.storage_key);
    let todos = persistence.load();
    log::info!("[APP] Starting with {} todos", todos.len());

    let state = Store::new(AppState::new(todos));

    // Provide context to all children
    provide_context(config);
    provide_context(state);
    provide_context(TodoContext::new(state, persistence));

    view! {
        <div class="app-layout">
            <div class="app-card-column">
                <h1 class="app-title">{config.title}</h1>

                <div class="app-card">
                    <NewTodoForm />
                    <TodoListView />
                </div>

                <p class="item-count">
                    {move || {
                        let todos = state.todos().read();
                        format!("{} items, {} done", todos.len(), todos.completed_count())
                    }}
                </p>
                <p class="app-footer">{config.footer}</p>
            </div>
        </div>
    }
}
