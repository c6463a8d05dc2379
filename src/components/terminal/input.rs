//! Terminal input component with autocompletion and history navigation.

use leptos::{ev, prelude::*};

use crate::app::AppContext;
use crate::core::KeyAction;
use crate::utils::dom::move_caret_to_end;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Terminal input line.
///
/// Typing goes through `input` events; special keys are mapped to
/// [`KeyAction`]s and applied to the session.
#[component]
pub fn Input() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let terminal = ctx.terminal;
    let prompt = ctx.prompt();

    let input_ref = NodeRef::<leptos::html::Input>::new();
    let value = Memo::new(move |_| terminal.buffer());

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        let action = KeyAction::from_key(&ev.key(), ev.ctrl_key());
        if action.prevents_default() {
            ev.prevent_default();
        }
        terminal.dispatch(action);

        // Recalled or completed text: show it now and put the caret at the end
        if matches!(
            action,
            KeyAction::HistoryOlder | KeyAction::HistoryNewer | KeyAction::Complete
        ) && let Some(input) = input_ref.get()
        {
            input.set_value(&terminal.buffer());
            move_caret_to_end(&input);
        }
    };

    let handle_input = move |ev: ev::Event| {
        terminal.edit(event_target_value(&ev));
    };

    view! {
        <div class=css::line>
            <span class=format!("{} glow", css::prompt)>{prompt}</span>
            <input
                node_ref=input_ref
                type="text"
                class=css::input
                autocomplete="off"
                spellcheck="false"
                prop:value=move || value.get()
                on:input=handle_input
                on:keydown=handle_keydown
            />
            <span class=css::cursor></span>
        </div>
    }
}
