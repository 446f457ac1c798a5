//! CLI command implementations

pub mod reassign;

pub use reassign::ReassignArgs;
