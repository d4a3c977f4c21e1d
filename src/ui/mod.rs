//! UI utilities for terminal output
//!
//! Progress reporting while the inventory is being collected.

mod spinner;

pub use spinner::{abandon_spinner, create_spinner, finish_spinner, set_spinner_message};
