//! Todo List View Component
//!
//! Renders the current list in insertion order.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::state::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoListView() -> impl IntoView {
    let state = use_app_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || state.todos().get()
                // completed is part of the key so a toggled row re-renders
                key=|todo| (todo.id, todo.completed)
                children=move |todo| view! { <TodoItem todo=todo /> }
            />
        </ul>
    }
}
