//! # clawdump-viewer
//!
//! Fetch-and-render for shared context dumps, keyed by a URL fragment.
//!
//! ```text
//! "#<gist id>" ──parse_fragment──▶ Viewer::route ──BundleSource::fetch──▶ RenderState
//!                                                                   │
//!                                               PageRenderer::render ▼
//!                                                                 HTML page
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clawdump_viewer::{GistApiClient, PageRenderer, Viewer};
//!
//! fn show(fragment: &str) {
//!     let mut viewer = Viewer::new(GistApiClient::default());
//!     let state = viewer.route(fragment);
//!     if let Ok(renderer) = PageRenderer::new() {
//!         if let Ok(html) = renderer.render(state) {
//!             println!("{html}");
//!         }
//!     }
//! }
//! ```

pub mod bundle;
pub mod client;
pub mod error;
pub mod fragment;
pub mod markdown;
pub mod page;
pub mod state;

pub use bundle::{BundleFile, RemoteBundle};
pub use client::{BundleSource, GistApiClient};
pub use error::{FetchError, RenderError};
pub use fragment::{parse_fragment, validate_id};
pub use page::PageRenderer;
pub use state::{ContentView, Panel, RenderState, Ticket, Viewer};
