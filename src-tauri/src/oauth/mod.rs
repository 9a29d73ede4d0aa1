//! Usage: Installed-app OAuth flow, delegated to yup-oauth2.
//!
//! This module owns no protocol logic: consent URL, local redirect listener
//! and code exchange all live in the external library. It wires the flow
//! delegate, the token sink and the failure classification together.

pub(crate) mod browser_delegate;
pub(crate) mod installed_flow;
