use crate::{
    constants::{FLUSH_INTERVAL, LIMIT_REFRESH_INTERVAL},
    store::Board,
};
use std::{sync::Arc, time::Duration};
use tokio::{
    task::JoinHandle,
    time::{self, Instant},
};
use tracing::info;

/// Board maintenance tasks: weekly flush and daily limit refresh.
pub struct Scheduler {
    tasks: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub fn start(board: Arc<Board>) -> Self {
        Self::with_intervals(board, FLUSH_INTERVAL, LIMIT_REFRESH_INTERVAL)
    }

    pub fn with_intervals(board: Arc<Board>, flush_every: Duration, refresh_every: Duration) -> Self {
        let flush_board = board.clone();
        let flush = spawn_every(flush_every, move || flush_board.flush_posts());
        let refresh = spawn_every(refresh_every, move || board.refresh_limit());

        info!(
            flush_every_secs = flush_every.as_secs(),
            refresh_every_secs = refresh_every.as_secs(),
            "Scheduled board maintenance"
        );

        Self {
            tasks: vec![flush, refresh],
        }
    }

    /// Stop both tasks and wait for them to exit.
    pub async fn shutdown(self) {
        for task in &self.tasks {
            task.abort();
        }
        for task in self.tasks {
            // Cancellation is the expected outcome
            let _ = task.await;
        }
        info!("Stopped board maintenance");
    }
}

/// First run happens one full `period` after the call.
fn spawn_every(period: Duration, mut job: impl FnMut() + Send + 'static) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + period, period);
        loop {
            interval.tick().await;
            job();
        }
    })
}
