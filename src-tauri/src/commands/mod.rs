//! Usage: Tauri command modules, re-exported for `generate_handler!`.

pub(crate) mod app;
pub(crate) mod auth_setup;

pub(crate) use app::*;
pub(crate) use auth_setup::*;
