//! Output module
//!
//! Writes the flattened resource inventory to disk.

mod resources;

pub use resources::write_csv;
