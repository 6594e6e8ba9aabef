//! Markdown → HTML for file panels.
//!
//! GitHub-flavoured extensions are enabled. Raw HTML in the source is emitted
//! as escaped text, so a shared file cannot inject markup into the page.

use pulldown_cmark::{html, Event, Options, Parser};

pub fn to_html(text: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
