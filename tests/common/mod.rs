//! Shared utilities for integration testing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use futbol_links::{NavigationError, Navigator};

/// Navigator that records every path it is asked to open.
#[derive(Default)]
pub struct RecordingNavigator {
    calls: Mutex<Vec<String>>,
    failing: AtomicBool,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent navigations fail.
    #[allow(dead_code)]
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) -> Result<(), NavigationError> {
        self.calls.lock().unwrap().push(path.to_string());
        if self.failing.load(Ordering::SeqCst) {
            Err(NavigationError::Unroutable(path.to_string()))
        } else {
            Ok(())
        }
    }
}
