use crate::models::Post;
use serde::Serialize;

/// Everything the feed page needs.
#[derive(Debug)]
pub struct FeedPage<'a> {
    pub posts: &'a [Post],
    pub posts_left: usize,
    pub top_alert: &'a str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: i64,
    pub posts: usize,
}
