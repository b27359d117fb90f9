mod health;
mod post;

pub use health::health_check;
pub use post::{create_post, get_feed};
