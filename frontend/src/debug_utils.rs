// Throttled logging for high-frequency handlers
//
// Scroll and tooltip reposition handlers fire on every frame. Logging each
// call floods the browser console and the dev server log.

use std::sync::atomic::{AtomicUsize, Ordering};

static LOG_COUNT: AtomicUsize = AtomicUsize::new(0);

const LOGS_PER_WINDOW: usize = 5;
const LOG_WINDOW: usize = 100;

#[derive(Debug, PartialEq)]
enum Throttle {
    Log,
    Announce,
    Drop,
}

fn throttle(call: usize) -> Throttle {
    match call % LOG_WINDOW {
        slot if slot < LOGS_PER_WINDOW => Throttle::Log,
        LOGS_PER_WINDOW => Throttle::Announce,
        _ => Throttle::Drop,
    }
}

/// Logs the first few calls out of every hundred.
/// Use instead of `zoon::println!` in scroll/resize handlers.
pub fn debug_throttled(message: &str) {
    match throttle(LOG_COUNT.fetch_add(1, Ordering::Relaxed)) {
        Throttle::Log => zoon::println!("[THROTTLED] {}", message),
        Throttle::Announce => {
            zoon::println!("[THROTTLED] Log rate limit reached, suppressing further messages...")
        }
        Throttle::Drop => {}
    }
}

/// Always printed; errors and important state changes only.
pub fn debug_critical(message: &str) {
    zoon::eprintln!("[CRITICAL] {}", message);
}
