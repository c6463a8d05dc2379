//! Boot sequence logic
//!
//! Reveals the boot script line by line, then hands the terminal to the user.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::core::boot::{steps, total_duration_ms};

/// Run the boot sequence
///
/// Each message waits for its delay before appearing, strictly one after
/// another. Input is accepted once the last message is shown.
pub fn run(ctx: AppContext) {
    spawn_local(async move {
        let boot = &ctx.site.boot;
        log::info!(
            "booting: {} messages over {}ms",
            boot.messages.len(),
            total_duration_ms(boot)
        );

        for step in steps(boot) {
            TimeoutFuture::new(step.delay_ms).await;
            ctx.terminal.push_output(step.message);
        }

        ctx.terminal.finish_boot();
        log::info!("boot complete");
    });
}
