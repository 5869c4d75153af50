pub mod cli;
pub mod client;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod provider;
pub mod proxy;
pub mod store;
pub mod ui;
