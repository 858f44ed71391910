//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the resolution and linking core
//! and the outside world (filesystem, hook commands, native project edits,
//! package installation layout). Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod linker;
pub mod packages;
pub mod react_native;
pub mod shell;

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

pub use filesystem::FileSystem;
pub use linker::{AssetLinker, NativeLinker};
pub use packages::{InstalledPackage, PackageIndex};
pub use react_native::ReactNativeLocator;
pub use shell::HookExecutor;

/// Error type returned by every port.
pub type PortError = Box<dyn Error + Send + Sync>;

/// Boxed future for one asynchronous link step, keeping the step traits dyn-compatible.
pub type StepFuture<'a> = Pin<Box<dyn Future<Output = Result<(), PortError>> + Send + 'a>>;
