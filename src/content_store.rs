use crate::domain::{BlogPost, NewPost, Slug, parse_document, post_date};
use crate::telemetry::error_chain_fmt;
use anyhow::Context;
use std::cmp::Reverse;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

/// File-backed blog repository. One markdown file per post, named after
/// the post's slug.
#[derive(Clone, Debug)]
pub struct ContentStore {
    posts_dir: PathBuf,
}

impl ContentStore {
    pub fn new(posts_dir: impl Into<PathBuf>) -> Self {
        Self {
            posts_dir: posts_dir.into(),
        }
    }

    /// All posts, newest first. A missing directory yields an empty list,
    /// an unreadable file is skipped.
    pub async fn list_posts(&self) -> Result<Vec<BlogPost>, anyhow::Error> {
        let mut entries = match tokio::fs::read_dir(&self.posts_dir).await {
            Ok(entries) => entries,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => {
                return Err(
                    anyhow::Error::from(error).context("Failed to open the posts directory.")
                );
            }
        };

        let mut posts = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .context("Failed to read the posts directory.")?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            let slug = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };
            let raw = match tokio::fs::read_to_string(&path).await {
                Ok(raw) => raw,
                Err(error) => {
                    tracing::warn!("Skipping unreadable post file {:?}: {:?}", path, error);
                    continue;
                }
            };

            let document = parse_document(&raw);
            // Sort on the raw front-matter date when there is one. Posts
            // without a parseable date get timestamp 0 and end up last.
            let raw_date = document.metadata.get("date").cloned();
            let post = BlogPost::from_document(&slug, document);
            let timestamp = post_date::sort_timestamp(raw_date.as_deref().unwrap_or(&post.date));
            posts.push((timestamp, post));
        }

        posts.sort_by_key(|(timestamp, _)| Reverse(*timestamp));
        Ok(posts.into_iter().map(|(_, post)| post).collect())
    }

    pub async fn get_post(&self, slug: &Slug) -> Result<Option<BlogPost>, anyhow::Error> {
        let path = self.post_path(slug);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(anyhow::Error::from(error).context("Failed to read the post file."));
            }
        };
        Ok(Some(BlogPost::from_document(
            slug.as_ref(),
            parse_document(&raw),
        )))
    }

    /// Write a new post to disk. `create_new` makes the existence check and
    /// the file creation a single atomic step, so two racing writers cannot
    /// both claim a slug.
    pub async fn create_post(&self, post: &NewPost) -> Result<(), PersistPostError> {
        tokio::fs::create_dir_all(&self.posts_dir)
            .await
            .context("Failed to create the posts directory.")?;

        let path = self.post_path(post.slug());
        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::AlreadyExists => {
                return Err(PersistPostError::SlugTaken);
            }
            Err(error) => {
                return Err(anyhow::Error::from(error)
                    .context("Failed to create the post file.")
                    .into());
            }
        };

        file.write_all(post.to_document().as_bytes())
            .await
            .context("Failed to write the post file.")?;
        file.flush()
            .await
            .context("Failed to flush the post file.")?;
        Ok(())
    }

    fn post_path(&self, slug: &Slug) -> PathBuf {
        self.posts_dir.join(format!("{}.md", slug.as_ref()))
    }
}

#[derive(thiserror::Error)]
pub enum PersistPostError {
    #[error("A post with this slug already exists.")]
    SlugTaken,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for PersistPostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
