use crate::store::Board;
use std::sync::Arc;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// The board is built once in `main` and handed to the router and the
/// maintenance scheduler; cloning the state only clones the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<Board>,
}

impl AppState {
    pub fn new(board: Arc<Board>) -> Self {
        Self { board }
    }
}
