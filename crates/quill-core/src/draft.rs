//! Editor state for creating or editing a single post.

use chrono::{SecondsFormat, Utc};

use crate::{post::PostRecord, tags::TagSelection};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    /// Set when editing an existing post.
    pub id: Option<String>,
    pub user_id: Option<String>,
    /// Kept from the post being edited; a new post is dated when saved.
    pub date: Option<String>,
    pub title: String,
    pub body: String,
    pub tags: TagSelection,
    pub published: bool,
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill the editor from an existing post.
    pub fn from_record(post: &PostRecord) -> Self {
        Self {
            id: Some(post.id().to_string()),
            user_id: post.user_id().map(String::from),
            date: post.date().map(String::from),
            title: post.title().unwrap_or_default().to_string(),
            body: post.body().to_string(),
            tags: TagSelection::new(post.tags()),
            published: post.published().unwrap_or(false),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// A post needs both a title and a body.
    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty() && !self.body.trim().is_empty()
    }

    /// Empties the form but stays on the same post.
    pub fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
        self.tags.clear();
        self.published = false;
    }

    /// The record the draft would save as.
    ///
    /// A draft without a date is stamped with the current UTC time in RFC 3339
    /// with milliseconds. `likes` is not reset to zero for new posts: it is
    /// derived from the title like on every other record.
    pub fn to_record(&self) -> PostRecord {
        let mut post = PostRecord::new();
        if let Some(id) = &self.id {
            post.assign_id(id.clone());
        }
        if let Some(user_id) = &self.user_id {
            post.set_user_id(user_id.clone());
        }
        let date = self
            .date
            .clone()
            .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
        post.set_date(date);
        post.set_title(self.title.trim().to_string());
        post.push_body(&self.body);
        post.set_tags(self.tags.tags().to_vec());
        post.set_published(self.published);
        post
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::parse_date;
    use crate::loader::parse_posts;

    #[test]
    fn save_needs_title_and_body() {
        let mut draft = PostDraft::new();
        assert!(!draft.can_save());
        draft.title = "Title".into();
        assert!(!draft.can_save());
        draft.body = "   ".into();
        assert!(!draft.can_save());
        draft.body = "Body".into();
        assert!(draft.can_save());
    }

    #[test]
    fn edit_existing_post_then_clear() {
        let text = "title: Hi\nuser: U3\ntags: a, a, b\npublished: true\nText";
        let loaded = parse_posts(text).unwrap();
        let mut draft = PostDraft::from_record(loaded.store.get("P1").unwrap());
        assert!(draft.is_editing());
        assert_eq!(draft.title, "Hi");
        assert_eq!(draft.tags.tags(), ["a", "b"]);
        assert!(draft.published);

        draft.clear();
        assert_eq!(draft.id.as_deref(), Some("P1"));
        assert_eq!(draft.user_id.as_deref(), Some("U3"));
        assert!(draft.title.is_empty());
        assert!(draft.tags.tags().is_empty());
        assert!(!draft.published);
    }

    #[test]
    fn record_from_draft_derives_likes() {
        let mut draft = PostDraft::new();
        draft.title = " New post ".into();
        draft.body = "Body".into();
        let post = draft.to_record();
        assert_eq!(post.title(), Some("New post"));
        assert_eq!(post.likes(), Some(8));
        assert_eq!(post.published(), Some(false));
    }

    #[test]
    fn new_post_is_dated_now_and_edits_keep_their_date() {
        let mut draft = PostDraft::new();
        draft.title = "Fresh".into();
        let before = Utc::now() - chrono::Duration::seconds(1);
        let post = draft.to_record();
        let stamped = post.date().and_then(parse_date).unwrap();
        assert!(stamped >= before);
        assert!(post.date().unwrap().ends_with('Z'));

        let loaded = parse_posts("title: Old\ndate: 2019-01-01\nBody").unwrap();
        let draft = PostDraft::from_record(loaded.store.get("P1").unwrap());
        assert_eq!(draft.to_record().date(), Some("2019-01-01"));
    }
}
