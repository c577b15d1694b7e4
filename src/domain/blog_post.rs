use crate::domain::front_matter::ParsedDocument;
use crate::domain::post_date;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

const EXCERPT_LIMIT: usize = 180;
const EXCERPT_ELLIPSIS: &str = "...";

static MARKDOWN_LINKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("Failed to compile the markdown link pattern")
});
static MARKDOWN_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[#>*_`-]").expect("Failed to compile the markdown punctuation pattern")
});
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Failed to compile the whitespace pattern"));

/// A fully normalized blog post. Every field is populated: missing metadata
/// is derived from the slug or the body, never left empty-handed.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    /// Display-formatted date, e.g. `March 2, 2024`. Empty when the source
    /// file carried no date.
    pub date: String,
    pub author: String,
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub content: String,
}

impl BlogPost {
    /// Fill in derived and defaulted fields from parsed front matter.
    pub fn from_document(slug: &str, document: ParsedDocument) -> Self {
        let ParsedDocument { metadata, content } = document;

        let title = metadata
            .get("title")
            .filter(|title| !title.is_empty())
            .cloned()
            .unwrap_or_else(|| title_from_slug(slug));
        let date = metadata
            .get("date")
            .map(|date| post_date::display_date(date))
            .unwrap_or_default();
        let excerpt = metadata
            .get("excerpt")
            .cloned()
            .unwrap_or_else(|| derive_excerpt(&content));
        let author = metadata.get("author").cloned().unwrap_or_default();
        let image = metadata
            .get("image")
            .filter(|image| !image.is_empty())
            .cloned();

        Self {
            slug: slug.to_string(),
            title,
            date,
            author,
            excerpt,
            image,
            content,
        }
    }
}

fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Summarize a markdown body: links keep their text, markdown punctuation is
/// dropped, whitespace collapses, and anything past 180 characters is cut
/// with an ellipsis.
fn derive_excerpt(content: &str) -> String {
    let text = MARKDOWN_LINKS.replace_all(content, "$1");
    let text = MARKDOWN_PUNCTUATION.replace_all(&text, "");
    let text = WHITESPACE_RUNS.replace_all(&text, " ");
    let text = text.trim();

    let mut excerpt: String = text.chars().take(EXCERPT_LIMIT).collect();
    if text.chars().count() > EXCERPT_LIMIT {
        excerpt.push_str(EXCERPT_ELLIPSIS);
    }
    excerpt
}
