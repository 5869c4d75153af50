//! Terminal client.

pub mod app;
pub mod boundary;
pub mod events;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod scroll;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use runtime::run;
