use regex::Regex;
use std::sync::LazyLock;

static SLUG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("Failed to compile the slug pattern")
});
static DISALLOWED_CHARACTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9 -]").expect("Failed to compile the character filter"));
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Failed to compile the whitespace filter"));
static HYPHEN_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("Failed to compile the hyphen filter"));

/// A validated post identifier: lowercase alphanumeric runs separated by
/// single hyphens. Doubles as the filename stem of the stored markdown file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    /// Returns `Ok(Slug)` when the input already has the canonical shape.
    pub fn parse(s: String) -> Result<Slug, String> {
        if SLUG_PATTERN.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid post slug.", s))
        }
    }

    /// Reduce free-form text to slug characters. The result matches the
    /// canonical shape or is empty, never anything in between.
    pub fn sanitize(raw: &str) -> String {
        let lowered = raw.to_lowercase();
        let filtered = DISALLOWED_CHARACTERS.replace_all(lowered.trim(), "");
        let hyphenated = WHITESPACE_RUNS.replace_all(filtered.trim(), "-");
        let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");
        collapsed.trim_matches('-').to_string()
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
