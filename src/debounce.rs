use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

/// Ignores repeated clicks on the same element that arrive too quickly
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    last_click: HashMap<String, Instant>,
}

impl Debouncer {
    /// Create a debouncer that ignores clicks within `window` of the last accepted one
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            last_click: HashMap::new(),
        }
    }
    /// Get the debounce window
    pub fn window(&self) -> Duration {
        self.window
    }
    /// Register a click on an element and check if it should be handled
    pub fn accept(&mut self, symbol: &str, now: Instant) -> bool {
        if let Some(last) = self.last_click.get(symbol) {
            if now.saturating_duration_since(*last) < self.window {
                return false;
            }
        }
        self.last_click.insert(symbol.into(), now);
        true
    }
}
