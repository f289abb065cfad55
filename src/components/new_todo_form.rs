//! New Todo Form Component
//!
//! Text input plus add button. Enter in the input submits as well.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::context::use_todos;
use crate::state::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todos();
    let state = use_app_store();
    let config = expect_context::<AppConfig>();

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        // Enter that confirms an IME composition must not submit
        if ev.key() == "Enter" && !ev.is_composing() {
            ev.prevent_default();
            ctx.submit();
        }
    };

    view! {
        <div class="new-todo-row">
            <input
                type="text"
                class="new-todo-input"
                placeholder=config.placeholder
                prop:value=move || state.pending().get()
                on:input=move |ev| ctx.set_pending(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="add-btn" title="Add" on:click=move |_| ctx.submit()>
                "+"
            </button>
        </div>
    }
}
