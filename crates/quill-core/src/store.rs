use std::collections::HashMap;

use crate::{post::PostRecord, state::StoreMetadata, QuillError, QuillResult};

/// A PostStore holds every loaded post keyed by its ID.
///
/// It is an explicit ordered map: `posts` keeps insertion order and `index`
/// maps each ID to its slot in `posts`. IDs are unique, and since the loader
/// only ever inserts under [`PostStore::next_id`], the n-th inserted post is
/// always `P<n>`.
#[derive(Debug, Default, Clone)]
pub struct PostStore {
    posts: Vec<PostRecord>,
    index: HashMap<String, usize>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// ID the next finalized record will receive.
    pub fn next_id(&self) -> String {
        format!("P{}", self.posts.len() + 1)
    }

    /// Adds a post under its ID. Fails if the ID is already taken.
    pub fn insert(&mut self, post: PostRecord) -> QuillResult<()> {
        if self.index.contains_key(post.id()) {
            return Err(QuillError::DuplicateId {
                id: post.id().into(),
            }
            .into());
        }
        self.index.insert(post.id().into(), self.posts.len());
        self.posts.push(post);
        Ok(())
    }

    /// Return a specific post.
    pub fn get(&self, id: &str) -> Option<&PostRecord> {
        self.index.get(id).and_then(|idx| self.posts.get(*idx))
    }

    /// Like [`PostStore::get`] but treats a missing post as an error.
    pub fn require(&self, id: &str) -> QuillResult<&PostRecord> {
        self.get(id).ok_or_else(|| QuillError::invalid_id(id).into())
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Posts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PostRecord> {
        self.posts.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.posts.iter().map(|post| post.id())
    }

    pub fn metadata(&self) -> StoreMetadata {
        StoreMetadata {
            posts_count: self.len(),
            published_count: self
                .posts
                .iter()
                .filter(|post| post.published() == Some(true))
                .count(),
            latest_post_id: self.posts.last().map(|post| post.id().to_string()),
        }
    }
}
