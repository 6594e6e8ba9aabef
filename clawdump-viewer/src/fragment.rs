//! URL-fragment routing input.

use crate::error::FetchError;

/// Extract the identifier from a fragment-bearing input.
///
/// Accepts `"#abc"`, `"abc"`, or a full URL such as
/// `"https://host/clawdump/#abc"`. Returns `None` when there is no identifier,
/// which routes to the landing view.
pub fn parse_fragment(input: &str) -> Option<String> {
    let input = input.trim();
    let raw = match input.split_once('#') {
        Some((_, fragment)) => fragment,
        None if input.contains("://") => "",
        None => input,
    };
    let id = raw.trim();
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// Gist ids are ASCII alphanumerics; `-` and `_` are tolerated.
pub fn validate_id(id: &str) -> Result<(), FetchError> {
    let ok = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(FetchError::InvalidId(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", None)]
    #[case("#", None)]
    #[case("  # ", None)]
    #[case("#abc123", Some("abc123"))]
    #[case("abc123", Some("abc123"))]
    #[case("https://luebken.github.io/clawdump/#abc123", Some("abc123"))]
    #[case("https://luebken.github.io/clawdump/", None)]
    fn parses(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(parse_fragment(input).as_deref(), expected);
    }

    #[rstest]
    #[case("abc123", true)]
    #[case("aa5a315d61ae9438b18d", true)]
    #[case("../users", false)]
    #[case("abc?x=1", false)]
    #[case("", false)]
    fn validates(#[case] id: &str, #[case] ok: bool) {
        assert_eq!(validate_id(id).is_ok(), ok);
    }
}
