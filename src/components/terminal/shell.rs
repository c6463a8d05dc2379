//! Main shell component.
//!
//! Window chrome around the terminal: title bar, boot start-up, output
//! autoscroll and the key-hint footer.

use leptos::prelude::*;

use super::boot;
use super::terminal::Terminal;
use crate::app::{AppContext, TerminalState};

stylance::import_crate_style!(css, "src/components/terminal/shell.module.css");

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Auto-scroll output to bottom when lines or the candidate panel change.
fn setup_autoscroll_effect(terminal: TerminalState, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        terminal.revision.track();
        terminal.panel.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

// ============================================================================
// Shell Component
// ============================================================================

/// Shell component hosting the terminal window.
///
/// This is a container component that:
/// - Starts the boot sequence once
/// - Keeps the output scrolled to the newest line
/// - Renders the window title bar and key-hint footer
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let output_ref = NodeRef::<leptos::html::Div>::new();

    // Boot sequence runs once
    let boot_started = StoredValue::new(false);
    Effect::new(move || {
        if !boot_started.get_value() {
            boot_started.set_value(true);
            boot::run(ctx);
        }
    });

    setup_autoscroll_effect(ctx.terminal, output_ref);

    let title = ctx.site.title();
    let owner = ctx.site.owner.clone();

    view! {
        <div class=css::screen>
            <div class=css::scanline></div>

            <div class=css::window>
                <div class=css::header>
                    <span class=format!("{} {}", css::dot, css::dotRed)></span>
                    <span class=format!("{} {}", css::dot, css::dotYellow)></span>
                    <span class=format!("{} {}", css::dot, css::dotGreen)></span>
                    <span class=css::title>{title}</span>
                </div>

                <Terminal output_ref=output_ref />

                <div class=css::footer>
                    <div class=css::keys>
                        <span><kbd class=css::key>"TAB"</kbd>" autocomplete"</span>
                        <span><kbd class=css::key>"↑↓"</kbd>" history"</span>
                        <span><kbd class=css::key>"Ctrl+K"</kbd>" clear"</span>
                        <span><kbd class=css::key>"ESC"</kbd>" cancel"</span>
                    </div>
                    <div class=css::credit>
                        "💡 Start with "
                        <span class=css::accent>"\"help\""</span>
                        " • Built by "
                        <span class=css::key>{owner}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
