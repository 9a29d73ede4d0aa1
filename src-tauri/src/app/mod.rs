//! Usage: Application wiring (logging, managed state).

pub(crate) mod logging;
pub(crate) mod setup_state;
