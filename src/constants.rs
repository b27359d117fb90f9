use std::time::Duration;

/// Posts kept before the board flushes itself.
pub const MAX_POSTS: usize = 100;
/// Characters kept from a submission, counted before HTML escaping.
pub const MAX_POST_LENGTH: usize = 400;
/// Accepted posts per IP between limit refreshes.
pub const POSTS_PER_IP: usize = 10;

pub const FLUSH_INTERVAL: Duration = Duration::from_secs(168 * 60 * 60);
pub const LIMIT_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Notice shown at the top of the board.
pub const TOP_ALERT: &str =
    "Old posts are deleted every 7 days. 10 posts up to 400 characters per user daily.";
