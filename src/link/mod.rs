//! Linking a dependency's hooks, native code and assets into the project.

pub mod error;
pub mod hook;
pub mod link_all;
pub mod package_name;
pub mod pipeline;

pub use error::LinkError;
pub use hook::HookCommand;
pub use link_all::link_all;
pub use package_name::normalize_package_name;
pub use pipeline::{filter_platforms, LinkPipeline, Stage};

#[cfg(test)]
mod fakes;
