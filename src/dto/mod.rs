mod requests;
mod responses;

pub use requests::PostForm;
pub use responses::{FeedPage, HealthResponse};
