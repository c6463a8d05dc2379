//! Boot sequence schedule.
//!
//! The boot script is a list of messages revealed one at a time. Each step
//! waits its delay and then shows its message; steps never overlap.

use crate::config::BootConfig;

/// One line of the boot script and the pause before it appears.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BootStep<'a> {
    pub delay_ms: u32,
    pub message: &'a str,
}

/// Steps of the boot script in order.
///
/// The first `slow_steps` messages wait `slow_delay_ms`; the rest wait
/// `fast_delay_ms`.
pub fn steps(config: &BootConfig) -> impl Iterator<Item = BootStep<'_>> {
    config
        .messages
        .iter()
        .enumerate()
        .map(move |(i, message)| BootStep {
            delay_ms: if i < config.slow_steps {
                config.slow_delay_ms
            } else {
                config.fast_delay_ms
            },
            message,
        })
}

/// Total time the boot script takes, in milliseconds.
pub fn total_duration_ms(config: &BootConfig) -> u64 {
    steps(config).map(|s| u64::from(s.delay_ms)).sum()
}
