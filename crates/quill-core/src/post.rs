//! This module defines the `PostRecord` struct which is the heart of quill!

use serde::Serialize;
use std::fmt::{Display, Formatter};
use textwrap::core::display_width;
use textwrap::{self, wrap};

const CARD_WIDTH: usize = 50;

/// One blog post as read from the posts file.
///
/// `likes` is not a field anyone sets directly. It follows the title: each call
/// to [`PostRecord::set_title`] recomputes it as the character count of the new
/// title, and a record that never saw a title has no likes at all.
///
/// Characters are Unicode scalar values, so `"😃a"` counts as 2, not as the 3
/// UTF-16 code units a JavaScript `.length` would report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    published: Option<bool>,
    body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    likes: Option<usize>,
    liked_by: Vec<String>,
}

impl PostRecord {
    /// An empty record, as the loader starts every section with.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn published(&self) -> Option<bool> {
        self.published
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn likes(&self) -> Option<usize> {
        self.likes
    }

    pub fn liked_by(&self) -> &[String] {
        &self.liked_by
    }

    /// Set the title and recompute `likes` from it.
    pub fn set_title(&mut self, title: String) {
        self.likes = Some(title.chars().count());
        self.title = Some(title);
    }

    pub fn set_date(&mut self, date: String) {
        self.date = Some(date);
    }

    pub fn set_user_id(&mut self, user_id: String) {
        self.user_id = Some(user_id);
    }

    /// Replaces any previously set tags.
    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
    }

    pub fn set_published(&mut self, published: bool) {
        self.published = Some(published);
    }

    /// Append text to the body without any separator.
    pub fn push_body(&mut self, text: &str) {
        self.body.push_str(text);
    }

    /// Ids are handed out by the store on finalization, never by input.
    pub(crate) fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Display for PostRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:-<54}\n", "")?;
        write!(
            f,
            "\\ {:^50} /\n",
            self.title.as_deref().unwrap_or("Post Title")
        )?;
        let meta = format!(
            "{} | likes: {} | {}",
            self.id,
            self.likes.unwrap_or(0),
            self.date.as_deref().unwrap_or("N/A")
        );
        write!(f, "/ {:>50} \\\n", meta)?;

        let mut lines: Vec<String> = Vec::new();
        let wrapping_config = textwrap::Options::new(CARD_WIDTH).break_words(true);
        for line in wrap(&self.body, wrapping_config) {
            lines.push(line.into_owned());
        }
        if !self.tags.is_empty() {
            lines.push(format!("Tags: {}", self.tags.join(", ")));
        }
        if let Some(published) = self.published {
            lines.push(format!("Published: {}", if published { "Yes" } else { "No" }));
        }

        for (count, line) in lines.iter().enumerate() {
            let (left_closure, right_closure) = if count % 2 == 0 {
                ("\\ ", " /")
            } else {
                ("/ ", " \\")
            };
            let whitespace = CARD_WIDTH.saturating_sub(display_width(line));
            write!(
                f,
                "{left_closure}{}{}{right_closure}\n",
                line,
                " ".repeat(whitespace)
            )?;
        }
        write!(f, "{:-<54}", "")
    }
}
