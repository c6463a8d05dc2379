//! Terminal view component.
//!
//! The transcript, the input line once booted, and the candidate panel.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::utils::dom::focus_terminal_input;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

#[component]
pub fn Terminal(output_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let terminal = ctx.terminal;

    let booted = Memo::new(move |_| terminal.is_booted());

    let candidates_view = move || {
        terminal.candidates().map(|names| {
            view! {
                <div class=css::suggestions>
                    <div class=css::suggestionsTitle>"Available commands:"</div>
                    {names
                        .into_iter()
                        .map(|name| view! { <div class=css::suggestion>{name}</div> })
                        .collect_view()}
                </div>
            }
        })
    };

    view! {
        <div class=css::container on:click=move |_| focus_terminal_input()>
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || terminal.lines()
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />

                <Show when=move || booted.get() fallback=|| ()>
                    <Input />
                </Show>

                {candidates_view}
            </div>
        </div>
    }
}
