//! # clawdump-share
//!
//! Selection and publishing of workspace context files.
//!
//! [`Dispatcher::share`] validates a [`ShareRequest`], checks credentials via
//! an [`AuthChecker`], and uploads through a [`SnippetPublisher`]. [`GhCli`]
//! implements both against the GitHub CLI; tests inject fakes.

pub mod capability;
pub mod dispatcher;
pub mod error;
pub mod gh;

pub use capability::{AuthChecker, FilePicker, SharedSnippet, SnippetPublisher};
pub use dispatcher::{Dispatcher, ShareOutcome, ShareRequest};
pub use error::ShareError;
pub use gh::GhCli;
