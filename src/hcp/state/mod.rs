//! State module - current state download and resource extraction

mod api;
mod models;

pub use models::{
    CurrentStateVersion, CurrentStateVersionResponse, Resource, StateInstance, StateResource,
    StateVersionAttributes, TerraformState,
};
