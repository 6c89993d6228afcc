//! Terminal client.
//!
//! Renders the session with ratatui and turns key presses into session
//! transitions.

mod client;
mod state;
mod ui;

pub use client::{run, run_tui};
pub use state::{Action, ClientApp, SettingsEditor, SettingsField};
