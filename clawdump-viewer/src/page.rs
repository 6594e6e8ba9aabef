//! Tera page renderer — one template per [`RenderState`] variant.
//!
//! | State   | Template       |
//! |---------|----------------|
//! | Landing | `landing.html` |
//! | Loading | `loading.html` |
//! | Error   | `error.html`   |
//! | Content | `content.html` |
//!
//! All extend `base.html`. Templates end in `.html`, so Tera autoescapes every
//! interpolation; only pre-rendered panel bodies are marked `safe`.

use tera::{Context, Tera};

use crate::error::RenderError;
use crate::state::RenderState;

const TPLS: &[(&str, &str)] = &[
    ("base.html", include_str!("templates/base.html")),
    ("landing.html", include_str!("templates/landing.html")),
    ("loading.html", include_str!("templates/loading.html")),
    ("error.html", include_str!("templates/error.html")),
    ("content.html", include_str!("templates/content.html")),
];

pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TPLS.iter().copied())?;
        Ok(Self { tera })
    }

    /// Render a complete HTML document for `state`.
    pub fn render(&self, state: &RenderState) -> Result<String, RenderError> {
        let name = match state {
            RenderState::Landing => "landing.html",
            RenderState::Loading { .. } => "loading.html",
            RenderState::Error { .. } => "error.html",
            RenderState::Content(_) => "content.html",
        };
        let mut ctx = Context::new();
        ctx.insert("state", state);
        ctx.insert("version", env!("CARGO_PKG_VERSION"));
        Ok(self.tera.render(name, &ctx)?)
    }
}
