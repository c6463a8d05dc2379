use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::{DisplayedLine, Tone};
use crate::utils::time::clock;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// Get CSS class for a Tone
fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Prompt | Tone::Plain => css::textFg,
        Tone::Error => css::textRed,
        Tone::Success => css::textGreen,
        Tone::Progress => css::textCyan,
    }
}

#[component]
pub fn Output(line: DisplayedLine) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let stamp = clock(line.timestamp);
    let tone = line.tone();

    if tone == Tone::Prompt {
        return view! {
            <div class=css::line title=stamp>
                <span class=format!("{} glow", css::prompt)>{ctx.prompt()}</span>
                " "
                <span class=css::textFg>{line.text}</span>
            </div>
        }
        .into_any();
    }

    if line.is_blank() {
        // Non-breaking space keeps the row height
        return view! {
            <div class=css::line title=stamp>"\u{a0}"</div>
        }
        .into_any();
    }

    view! {
        <div class=format!("{} {} {}", css::line, css::typewriter, tone_class(tone)) title=stamp>
            {line.text}
        </div>
    }
    .into_any()
}
