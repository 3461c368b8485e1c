//! Deferred analysis.
//!
//! Generation runs on a tokio task after a fixed delay, standing in for a
//! slow backend call. Only one analysis is in flight: starting another
//! aborts the previous one, so a superseded request can never overwrite
//! a newer result.

use std::time::Duration;

use tokio::task::{AbortHandle, JoinHandle};

use crate::dashboard::Dashboard;
use crate::error::DashboardError;
use crate::generate;
use crate::snapshot::Snapshot;
use crate::store::SnapshotRepository;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

pub struct AnalysisScheduler {
    delay: Duration,
    in_flight: Option<AbortHandle>,
}

pub struct AnalysisTicket {
    handle: JoinHandle<Snapshot>,
}

impl AnalysisScheduler {
    pub fn new(delay: Duration) -> Self {
        AnalysisScheduler {
            delay,
            in_flight: None,
        }
    }

    /// Must be called from inside a tokio runtime.
    pub fn start(&mut self, keywords: Vec<String>) -> AnalysisTicket {
        self.cancel();

        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            generate::generate(&keywords)
        });

        self.in_flight = Some(handle.abort_handle());
        AnalysisTicket { handle }
    }

    pub fn cancel(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            if !previous.is_finished() {
                tracing::debug!("cancelling superseded analysis");
                previous.abort();
            }
        }
    }
}

impl Default for AnalysisScheduler {
    fn default() -> Self {
        AnalysisScheduler::new(DEFAULT_DELAY)
    }
}

impl AnalysisTicket {
    pub async fn wait(self) -> Result<Snapshot, DashboardError> {
        match self.handle.await {
            Ok(snapshot) => Ok(snapshot),
            Err(e) if e.is_cancelled() => Err(DashboardError::Cancelled),
            Err(e) => Err(DashboardError::TaskFailed(e.to_string())),
        }
    }
}

/// Validate, spend quota, wait out the deferred generation, then record.
pub async fn run_analysis<R: SnapshotRepository>(
    dashboard: &mut Dashboard<R>,
    scheduler: &mut AnalysisScheduler,
    inputs: &[String],
) -> Result<Snapshot, DashboardError> {
    let keywords = dashboard.begin_analysis(inputs)?;
    let snapshot = scheduler.start(keywords).wait().await?;
    Ok(dashboard.complete_analysis(snapshot)?.clone())
}
