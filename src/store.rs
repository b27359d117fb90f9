use crate::{
    audit::AuditLog,
    constants::{MAX_POSTS, POSTS_PER_IP},
    models::Post,
    names::name_from_ip,
    sanitize::Content,
};
use chrono::Utc;
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};
use tracing::{debug, info};

struct BoardInner {
    posts: Vec<Post>, // Oldest first
    counters: HashMap<String, usize>,
    audit: AuditLog,
}

impl BoardInner {
    fn flush(&mut self) {
        if let Some(last) = self.posts.pop() {
            self.posts.clear();
            self.posts.push(last);
        }
    }
}

/// The message board: posts plus per-IP daily counters.
///
/// Every operation runs under one lock, request handlers and the
/// maintenance tasks alike.
pub struct Board {
    inner: Mutex<BoardInner>,
}

impl Board {
    pub fn new(audit: AuditLog) -> Self {
        Self {
            inner: Mutex::new(BoardInner {
                posts: Vec::with_capacity(MAX_POSTS),
                counters: HashMap::new(),
                audit,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BoardInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a post from `ip`.
    ///
    /// A full board is flushed first, even when the post is then dropped.
    /// Posts over the caller's daily limit are dropped without notice.
    pub fn add_post(&self, content: Content, ip: &str) {
        let mut inner = self.lock();

        if inner.posts.len() >= MAX_POSTS {
            inner.flush();
            info!("Board full, flushed old posts");
        }

        let count = inner.counters.get(ip).copied().unwrap_or(0);
        if count >= POSTS_PER_IP {
            debug!(ip, "Post limit reached, dropping post");
            return;
        }

        let post = Post {
            time: Utc::now(),
            name: name_from_ip(ip),
            content: content.into_inner(),
            ip: ip.to_string(),
        };

        inner.audit.record(&post);
        inner.posts.push(post);
        *inner.counters.entry(ip.to_string()).or_insert(0) += 1;
    }

    /// Drop every post except the most recent one.
    pub fn flush_posts(&self) {
        self.lock().flush();
        info!("Flushed old posts");
    }

    /// Reset every IP's daily counter.
    pub fn refresh_limit(&self) {
        self.lock().counters = HashMap::new();
        info!("Refreshed limit of posts per IP");
    }

    pub fn post_count(&self, ip: &str) -> usize {
        self.lock().counters.get(ip).copied().unwrap_or(0)
    }

    pub fn posts_left(&self, ip: &str) -> usize {
        POSTS_PER_IP.saturating_sub(self.post_count(ip))
    }

    pub fn snapshot(&self) -> Vec<Post> {
        self.lock().posts.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the stored posts, keeping at most the newest `MAX_POSTS`.
    /// Counters are left alone.
    pub fn replace_posts(&self, mut posts: Vec<Post>) {
        if posts.len() > MAX_POSTS {
            posts.drain(..posts.len() - MAX_POSTS);
        }
        self.lock().posts = posts;
    }

    /// Run `f` against the posts while holding the lock.
    pub fn with_posts<T>(&self, f: impl FnOnce(&[Post]) -> T) -> T {
        f(&self.lock().posts)
    }

    /// Close the audit log; later posts are still stored but not logged.
    pub fn close_audit_log(&self) {
        self.lock().audit.close();
    }
}
