//! Refresh scheduler: one cycle right away, then one per interval until stopped.
//!
//! Every cycle dispatches the four source fetches as independent tasks. A
//! cycle never waits for the previous one, and a failed fetch only costs that
//! source its update for that cycle.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, warn};

use crate::fetch::{FetchError, Fetcher};
use crate::types::{Snapshot, Source};

/// A fetched snapshot plus the refresh cycle that requested it.
#[derive(Debug, Clone)]
pub struct Update {
    pub cycle: u64,
    pub snapshot: Snapshot,
}

impl Update {
    pub fn source(&self) -> Source {
        self.snapshot.source()
    }
}

/// Owner of the ticking task. Stopping (or dropping) it ends the schedule;
/// fetches already in flight may still deliver.
pub struct SchedulerHandle {
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    pub fn stop(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub fn spawn_scheduler(
    fetcher: Fetcher,
    period: Duration,
    tx: UnboundedSender<Update>,
) -> SchedulerHandle {
    let task = tokio::spawn(async move {
        // first tick completes immediately
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut cycle: u64 = 0;
        loop {
            ticker.tick().await;
            if tx.is_closed() {
                debug!("update receiver gone, scheduler exiting");
                break;
            }
            cycle += 1;
            debug!(cycle, "refresh cycle");
            dispatch_cycle(&fetcher, cycle, &tx);
        }
    });
    SchedulerHandle { task }
}

/// Fire all four fetches for one cycle without waiting on any of them.
pub fn dispatch_cycle(fetcher: &Fetcher, cycle: u64, tx: &UnboundedSender<Update>) {
    let f = fetcher.clone();
    dispatch(Source::Metrics, cycle, tx, async move {
        f.fetch_metrics().await.map(Snapshot::Metrics)
    });
    let f = fetcher.clone();
    dispatch(Source::Connections, cycle, tx, async move {
        f.fetch_connections().await.map(Snapshot::Connections)
    });
    let f = fetcher.clone();
    dispatch(Source::Hosts, cycle, tx, async move {
        f.fetch_hosts().await.map(Snapshot::Hosts)
    });
    let f = fetcher.clone();
    dispatch(Source::SystemInfo, cycle, tx, async move {
        f.fetch_system_info().await.map(Snapshot::SystemInfo)
    });
}

fn dispatch<Fut>(source: Source, cycle: u64, tx: &UnboundedSender<Update>, fut: Fut)
where
    Fut: Future<Output = Result<Snapshot, FetchError>> + Send + 'static,
{
    let tx = tx.clone();
    tokio::spawn(async move {
        match fut.await {
            Ok(snapshot) => {
                // receiver may be gone during shutdown
                let _ = tx.send(Update { cycle, snapshot });
            }
            Err(e) => warn!(source = source.name(), cycle, error = %e, "fetch failed"),
        }
    });
}
