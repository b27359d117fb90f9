//! JSON snapshot of the board, read at startup and written at shutdown.

use crate::{errors::BoardError, models::Post, store::Board};
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tracing::{info, warn};

/// Read posts from `path`. A missing file yields an empty list.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, BoardError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "No saved posts, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(BoardError::io(path, e)),
    };

    serde_json::from_slice(&bytes).map_err(|e| BoardError::json(path, e))
}

/// Write posts to `path` through a sibling temp file and a rename.
pub fn save_posts(path: &Path, posts: &[Post]) -> Result<(), BoardError> {
    let json = serde_json::to_vec(posts).map_err(|e| BoardError::json(path, e))?;

    let tmp = temp_path(path);
    let mut file = fs::File::create(&tmp).map_err(|e| BoardError::io(&tmp, e))?;
    file.write_all(&json)
        .and_then(|_| file.sync_all())
        .map_err(|e| BoardError::io(&tmp, e))?;
    drop(file);

    fs::rename(&tmp, path).map_err(|e| BoardError::io(path, e))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Hydrate `board` from `path`, logging instead of failing.
pub fn restore(board: &Board, path: &Path) {
    match load_posts(path) {
        Ok(posts) if posts.is_empty() => {}
        Ok(posts) => {
            let count = posts.len();
            board.replace_posts(posts);
            info!(path = %path.display(), count, "Loaded saved posts");
        }
        Err(e) => warn!("Failed to load posts: {}", e),
    }
}

/// Save the board to `path` under its lock, logging instead of failing.
pub fn persist(board: &Board, path: &Path) {
    info!(path = %path.display(), "Saving posts");
    match board.with_posts(|posts| save_posts(path, posts)) {
        Ok(()) => info!(path = %path.display(), "Saved posts"),
        Err(e) => warn!("Failed to save posts: {}", e),
    }
}
