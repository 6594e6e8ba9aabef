//! `clawdump view [<id>|#<id>|<viewer-url>] [--out <file>]`

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use clawdump_viewer::{client::DEFAULT_API_BASE, GistApiClient, PageRenderer, RenderState, Viewer};

/// Arguments for `clawdump view`.
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Gist id, `#<id>`, or a viewer URL whose fragment holds the id.
    /// Empty renders the landing page.
    #[arg(default_value = "")]
    pub target: String,

    /// Write the HTML page to this file instead of stdout.
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// Gist API base URL.
    #[arg(long, env = "CLAWDUMP_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
}

impl ViewArgs {
    pub fn run(self) -> Result<()> {
        let renderer = PageRenderer::new().context("failed to load page templates")?;
        let mut viewer = Viewer::new(GistApiClient::new(self.api_base));
        let state = viewer.route(&self.target);
        let html = renderer.render(state).context("failed to render page")?;

        match &self.out {
            Some(path) => {
                std::fs::write(path, &html)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                eprintln!("wrote {}", path.display());
            }
            None => print!("{html}"),
        }

        if let RenderState::Error { reason } = state {
            bail!("{reason}");
        }
        Ok(())
    }
}
