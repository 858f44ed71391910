//! Live adapters for real external interactions.

pub mod filesystem;
pub mod linker;
pub mod packages;
pub mod react_native;
pub mod shell;
