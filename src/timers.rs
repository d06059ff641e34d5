//! One-shot UI Timers
//!
//! Simulated latency for loading and submission states. Each timer fires
//! exactly once and is scoped to the reactive owner that created it.

use gloo_timers::callback::Timeout;
use leptos::on_cleanup;

/// Run `f` after `ms` milliseconds.
///
/// The timeout handle is dropped when the current reactive scope is
/// disposed, which cancels the timer: a view that unmounts before its
/// delay elapses never sees the callback.
pub fn view_timeout(ms: u32, f: impl FnOnce() + 'static) {
    let handle = Timeout::new(ms, f);
    on_cleanup(move || drop(handle));
}
