//! Question provisioning — builds the fixed interview question list from
//! request parameters and persists the resulting interview document.

pub mod covers;
pub mod handlers;
pub mod questions;
