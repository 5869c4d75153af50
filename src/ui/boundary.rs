//! Panic containment for view composition.
//!
//! A panic inside [`ErrorBoundary::contain`] is caught and recorded as a
//! fault. Until [`ErrorBoundary::reset`] is called the boundary renders
//! its fallback instead of composing again.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

thread_local! {
    static CONTAINING: Cell<bool> = const { Cell::new(false) };
}

/// True while the current thread runs inside [`ErrorBoundary::contain`].
///
/// The terminal panic hook checks this to leave the screen alone for
/// panics that will be caught.
pub fn is_containing() -> bool {
    CONTAINING.with(Cell::get)
}

pub const FALLBACK_TITLE: &str = "Something went wrong";
pub const FALLBACK_HINT: &str = "Press r to try again";

#[derive(Debug, Default)]
pub struct ErrorBoundary {
    fault: Option<String>,
}

impl ErrorBoundary {
    pub fn contain<T>(&mut self, compose: impl FnOnce() -> T) -> Option<T> {
        if self.fault.is_some() {
            return None;
        }

        CONTAINING.with(|flag| flag.set(true));
        let result = panic::catch_unwind(AssertUnwindSafe(compose));
        CONTAINING.with(|flag| flag.set(false));

        match result {
            Ok(value) => Some(value),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::error!(error = %message, "View composition panicked");
                self.fault = Some(message);
                None
            }
        }
    }

    pub fn has_fault(&self) -> bool {
        self.fault.is_some()
    }

    pub fn reset(&mut self) {
        self.fault = None;
    }

    /// Lines shown in place of the view. Panic details only in debug builds.
    pub fn fallback_lines(&self) -> Vec<String> {
        let mut lines = vec![FALLBACK_TITLE.to_string(), FALLBACK_HINT.to_string()];
        if cfg!(debug_assertions) {
            if let Some(fault) = &self.fault {
                lines.push(String::new());
                lines.push(fault.clone());
            }
        }
        lines
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
