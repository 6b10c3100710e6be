use serde::Serialize;

use crate::post::PostRecord;
use crate::users::User;

#[derive(Serialize, Debug)]
#[serde(rename_all = "snake_case")]
pub struct PostsResponse<'a> {
    pub posts: Vec<&'a PostRecord>,
    pub users: &'a [User],
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct StoreMetadata {
    pub posts_count: usize,
    pub published_count: usize,
    pub latest_post_id: Option<String>,
}
