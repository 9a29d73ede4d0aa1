//! Usage: Shared Tauri state for the authorization workflow, used by `commands/*`.

use std::sync::Mutex;

use crate::domain::workflow::AuthWorkflow;

#[derive(Default)]
pub(crate) struct SetupState(pub(crate) Mutex<AuthWorkflow>);
