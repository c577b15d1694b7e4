use crate::domain::front_matter::render_document;
use crate::domain::post_date;
use crate::domain::slug::Slug;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;
use validator::ValidateUrl;

pub const DEFAULT_AUTHOR: &str = "Editorial Team";

/// The request body accepted by the create-post endpoint, before any
/// validation has happened.
///
/// Title and content are optional at this layer so that an absent field
/// lands in the field-issue report instead of a deserialization rejection.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreatePostPayload {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    pub image: Option<String>,
    pub content: Option<String>,
}

/// A single rejected field and the constraint it violated.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// A validated post, ready to be written to disk.
#[derive(Debug)]
pub struct NewPost {
    slug: Slug,
    title: String,
    date: String,
    author: String,
    excerpt: String,
    image: String,
    content: String,
}

impl NewPost {
    /// Check a candidate payload against all our structural constraints,
    /// gathering every violation instead of stopping at the first one.
    pub fn parse(payload: CreatePostPayload) -> Result<NewPost, Vec<FieldIssue>> {
        let CreatePostPayload {
            title,
            slug,
            author,
            date,
            excerpt,
            image,
            content,
        } = payload;
        let mut issues = Vec::new();

        // Lengths are counted in graphemes, the way a reader would count
        // characters, so composed accents do not eat into the caps.
        let title = title.unwrap_or_default().trim().to_string();
        if !(3..=160).contains(&title.graphemes(true).count()) {
            issues.push(FieldIssue::new(
                "title",
                "must be between 3 and 160 characters long",
            ));
        }

        // A blank slug field is treated the same as an absent one.
        let supplied_slug = slug.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let candidate = Slug::sanitize(supplied_slug.unwrap_or(&title));
        let candidate_length = candidate.graphemes(true).count();
        let slug = match Slug::parse(candidate) {
            Ok(parsed) if (3..=160).contains(&candidate_length) => Some(parsed),
            _ => {
                issues.push(FieldIssue::new(
                    "slug",
                    "must be 3 to 160 characters of lowercase letters, digits and hyphens",
                ));
                None
            }
        };

        let content = content.unwrap_or_default().trim().to_string();
        if content.graphemes(true).count() < 20 {
            issues.push(FieldIssue::new(
                "content",
                "must be at least 20 characters long",
            ));
        }

        let excerpt = excerpt.map(|e| e.trim().to_string()).unwrap_or_default();
        if excerpt.graphemes(true).count() > 320 {
            issues.push(FieldIssue::new(
                "excerpt",
                "must be at most 320 characters long",
            ));
        }

        let image = image.map(|i| i.trim().to_string()).unwrap_or_default();
        if !image.is_empty() && !image.validate_url() {
            issues.push(FieldIssue::new(
                "image",
                "must be a well-formed URL when provided",
            ));
        }

        let author = author
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

        let date = date.map(|d| d.trim().to_string()).unwrap_or_default();
        let date = match post_date::parse_calendar_date(&date) {
            Some(parsed) => post_date::calendar_date(parsed),
            None => date,
        };

        match (slug, issues.is_empty()) {
            (Some(slug), true) => Ok(NewPost {
                slug,
                title,
                date,
                author,
                excerpt,
                image,
                content,
            }),
            _ => Err(issues),
        }
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Render the post as a markdown file with a front-matter block.
    /// Empty fields are left out entirely.
    pub fn to_document(&self) -> String {
        render_document(
            &[
                ("title", self.title.as_str()),
                ("date", self.date.as_str()),
                ("author", self.author.as_str()),
                ("excerpt", self.excerpt.as_str()),
                ("image", self.image.as_str()),
            ],
            &self.content,
        )
    }
}
