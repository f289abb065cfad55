//! Todo Item Component
//!
//! A single row. Clicking the row toggles it; the delete button removes it.

use leptos::prelude::*;

use crate::context::use_todos;
use crate::models::Todo;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_todos();

    let id = todo.id;
    let completed = todo.completed;

    view! {
        <li
            class=if completed { "todo-row completed" } else { "todo-row" }
            on:click=move |_| {
                ctx.toggle(id);
            }
        >
            <span class="todo-text">{todo.text}</span>
            <button
                class="delete-btn"
                title="Delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.delete(id);
                }
            >
                "×"
            </button>
        </li>
    }
}
