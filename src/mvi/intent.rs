//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (submitting a search, closing an overlay)
/// - Request lifecycle events (pending, fulfilled, rejected)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
