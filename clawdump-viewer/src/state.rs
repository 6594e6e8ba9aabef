//! The viewer's render state machine.
//!
//! ```text
//!            no id                     fetch ok
//! route ──────────────▶ Landing    ┌──────────────▶ Content
//!   │       id                     │
//!   └─────────────────▶ Loading ───┤
//!                                  │   fetch failed
//!                                  └──────────────▶ Error
//! ```
//!
//! Every navigation bumps a generation counter and hands out a [`Ticket`].
//! A completion whose ticket is older than the current generation is
//! discarded, so a slow response for a previous identifier never overwrites
//! the view of a newer one.

use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::Serialize;

use crate::bundle::RemoteBundle;
use crate::client::BundleSource;
use crate::error::FetchError;
use crate::fragment::{parse_fragment, validate_id};
use crate::markdown;

const ANONYMOUS: &str = "anonymous";

/// What the page currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderState {
    Landing,
    Loading { id: String },
    Error { reason: String },
    Content(ContentView),
}

/// A loaded bundle prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentView {
    pub id: String,
    pub owner: String,
    /// Creation date for display in the viewer's time zone, e.g.
    /// `"February 3, 2026"`.
    pub created: String,
    pub html_url: String,
    pub panels: Vec<Panel>,
}

/// One rendered file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub filename: String,
    pub html: String,
}

/// Calendar date of `at` as seen from `offset`, or from the local time zone
/// when `offset` is `None`.
fn display_date(at: DateTime<Utc>, offset: Option<FixedOffset>) -> String {
    const FORMAT: &str = "%B %-d, %Y";
    match offset {
        Some(offset) => at.with_timezone(&offset).format(FORMAT).to_string(),
        None => at.with_timezone(&Local).format(FORMAT).to_string(),
    }
}

impl ContentView {
    pub fn from_bundle(bundle: &RemoteBundle, offset: Option<FixedOffset>) -> Self {
        Self {
            id: bundle.id.clone(),
            owner: bundle
                .owner
                .clone()
                .unwrap_or_else(|| ANONYMOUS.to_string()),
            created: display_date(bundle.created_at, offset),
            html_url: bundle.html_url.clone(),
            panels: bundle
                .files
                .iter()
                .map(|f| Panel {
                    filename: f.filename.clone(),
                    html: markdown::to_html(&f.content),
                })
                .collect(),
        }
    }
}

/// Proof of an in-flight navigation; pass back to [`Viewer::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    id: String,
}

impl Ticket {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Drives [`RenderState`] transitions against a [`BundleSource`].
pub struct Viewer<S> {
    source: S,
    state: RenderState,
    generation: u64,
    display_offset: Option<FixedOffset>,
}

impl<S: BundleSource> Viewer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RenderState::Landing,
            generation: 0,
            display_offset: None,
        }
    }

    /// Show dates at a fixed UTC offset instead of the local time zone.
    pub fn with_display_offset(mut self, offset: FixedOffset) -> Self {
        self.display_offset = Some(offset);
        self
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Start a navigation to `fragment`.
    ///
    /// Without an identifier the state becomes `Landing` and `None` is
    /// returned; otherwise the state becomes `Loading` and the caller must
    /// fetch and [`complete`](Self::complete) the returned ticket.
    pub fn navigate(&mut self, fragment: &str) -> Option<Ticket> {
        self.generation += 1;
        match parse_fragment(fragment) {
            None => {
                self.state = RenderState::Landing;
                None
            }
            Some(id) => {
                self.state = RenderState::Loading { id: id.clone() };
                Some(Ticket {
                    generation: self.generation,
                    id,
                })
            }
        }
    }

    /// Apply a fetch result. Returns `false` when the ticket was superseded
    /// by a later navigation and the result was dropped.
    pub fn complete(&mut self, ticket: Ticket, result: Result<RemoteBundle, FetchError>) -> bool {
        if ticket.generation != self.generation {
            tracing::warn!(
                id = %ticket.id,
                stale = ticket.generation,
                current = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }
        self.state = match result {
            Ok(bundle) => {
                RenderState::Content(ContentView::from_bundle(&bundle, self.display_offset))
            },
            Err(err) => RenderState::Error {
                reason: format!("Could not load gist: {err}"),
            },
        };
        true
    }

    /// Fetch for `ticket` through the configured source.
    pub fn fetch(&self, ticket: &Ticket) -> Result<RemoteBundle, FetchError> {
        validate_id(&ticket.id)?;
        self.source.fetch(&ticket.id)
    }

    /// Full synchronous cycle: navigate, fetch once, complete.
    pub fn route(&mut self, fragment: &str) -> &RenderState {
        if let Some(ticket) = self.navigate(fragment) {
            let result = self.fetch(&ticket);
            self.complete(ticket, result);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;
    use crate::bundle::BundleFile;

    struct Fixed;

    impl BundleSource for Fixed {
        fn fetch(&self, id: &str) -> Result<RemoteBundle, FetchError> {
            Ok(RemoteBundle {
                id: id.to_string(),
                owner: None,
                created_at: Utc.with_ymd_and_hms(2026, 2, 3, 10, 0, 0).unwrap(),
                html_url: format!("https://gist.github.com/{id}"),
                files: vec![BundleFile {
                    filename: "NOTES.md".into(),
                    content: "# Hi".into(),
                }],
            })
        }
    }

    #[test]
    fn content_view_formats_metadata() {
        let bundle = Fixed.fetch("abc").unwrap();
        let view = ContentView::from_bundle(&bundle, FixedOffset::east_opt(0));
        assert_eq!(view.owner, "anonymous");
        assert_eq!(view.created, "February 3, 2026");
        assert_eq!(view.panels[0].html, "<h1>Hi</h1>\n");
    }

    #[rstest]
    #[case(0, "February 3, 2026")]
    #[case(2 * 3600, "February 4, 2026")]
    #[case(-(11 * 3600), "February 3, 2026")]
    fn created_date_follows_display_offset(#[case] east_secs: i32, #[case] expected: &str) {
        let at = Utc.with_ymd_and_hms(2026, 2, 3, 23, 30, 0).unwrap();
        let offset = FixedOffset::east_opt(east_secs).unwrap();
        assert_eq!(display_date(at, Some(offset)), expected);
    }

    #[test]
    fn early_utc_morning_is_previous_day_west_of_greenwich() {
        let at = Utc.with_ymd_and_hms(2026, 2, 3, 2, 0, 0).unwrap();
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(display_date(at, Some(offset)), "February 2, 2026");
    }

    #[test]
    fn viewer_applies_display_offset() {
        let mut viewer =
            Viewer::new(Fixed).with_display_offset(FixedOffset::east_opt(14 * 3600).unwrap());
        match viewer.route("#abc") {
            RenderState::Content(view) => assert_eq!(view.created, "February 4, 2026"),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut viewer = Viewer::new(Fixed);
        let first = viewer.navigate("#first").unwrap();
        let second = viewer.navigate("#second").unwrap();

        let late = viewer.fetch(&first);
        assert!(!viewer.complete(first, late));
        assert_eq!(viewer.state(), &RenderState::Loading { id: "second".into() });

        let fresh = viewer.fetch(&second);
        assert!(viewer.complete(second, fresh));
        match viewer.state() {
            RenderState::Content(view) => assert_eq!(view.id, "second"),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn navigating_to_landing_supersedes_in_flight_fetch() {
        let mut viewer = Viewer::new(Fixed);
        let ticket = viewer.navigate("#abc").unwrap();
        assert!(viewer.navigate("").is_none());
        let result = viewer.fetch(&ticket);
        assert!(!viewer.complete(ticket, result));
        assert_eq!(viewer.state(), &RenderState::Landing);
    }
}
