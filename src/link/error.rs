//! Errors raised by the link workflows.

use thiserror::Error;

use super::Stage;

/// Where link failures should be reported.
pub const ISSUES_URL: &str = "https://github.com/react-native-community/react-native-cli/issues";

/// Failure of a link workflow.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The requested package is not an installed dependency. Nothing was run.
    #[error(
        "Unknown dependency \"{name}\".\n\nMake sure that the package you are trying to link is \
         already installed\nin your \"node_modules\" and present in your \"package.json\" \
         dependencies."
    )]
    UnknownDependency {
        /// Normalized package name that was looked up.
        name: String,
    },

    /// A pipeline step failed; later steps did not run.
    #[error(
        "Something went wrong while linking. Reason: {reason}\n\nPlease file an issue here: {}",
        ISSUES_URL
    )]
    Pipeline {
        /// Step that failed.
        stage: Stage,
        /// Message of the underlying failure.
        reason: String,
    },

    /// One or more dependencies failed while linking everything.
    #[error("{}", render_link_all(.failed, .assets.as_deref()))]
    LinkAll {
        /// Packages whose pipeline failed.
        failed: Vec<String>,
        /// Why the project's own assets failed to link, if they did.
        assets: Option<String>,
    },
}

fn render_link_all(failed: &[String], assets: Option<&str>) -> String {
    let mut message = format!("Failed to link {}: see the errors above", failed.join(", "));
    if let Some(reason) = assets {
        message.push_str(&format!("\nLinking project assets also failed: {reason}"));
    }
    message
}
