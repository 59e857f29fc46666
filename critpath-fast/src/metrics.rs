//! Instrumentation counters for a single algorithm invocation.
//!
//! A `Metrics` value is owned by the caller and handed to exactly one
//! algorithm call as `&mut Metrics`. Nothing here is global, so independent
//! pipeline runs never see each other's counts.

use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default, Serialize)]
pub struct Metrics {
    #[serde(skip)]
    started: Option<Instant>,
    elapsed_nanos: u64,

    dfs_visits: u64,
    edges_processed: u64,

    queue_pushes: u64,
    queue_pops: u64,

    relaxations: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_timer(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Record time since the last `start_timer`. A stop without a start
    /// leaves the elapsed time unchanged.
    pub fn stop_timer(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed_nanos = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);
        }
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_nanos)
    }

    pub fn elapsed_nanos(&self) -> u64 {
        self.elapsed_nanos
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed_nanos / 1_000_000
    }

    pub fn increment_dfs_visits(&mut self) {
        self.dfs_visits += 1;
    }

    pub fn increment_edges_processed(&mut self, count: u64) {
        self.edges_processed += count;
    }

    pub fn increment_queue_pushes(&mut self) {
        self.queue_pushes += 1;
    }

    pub fn increment_queue_pops(&mut self) {
        self.queue_pops += 1;
    }

    pub fn increment_relaxations(&mut self) {
        self.relaxations += 1;
    }

    pub fn dfs_visits(&self) -> u64 {
        self.dfs_visits
    }

    pub fn edges_processed(&self) -> u64 {
        self.edges_processed
    }

    pub fn queue_pushes(&self) -> u64 {
        self.queue_pushes
    }

    pub fn queue_pops(&self) -> u64 {
        self.queue_pops
    }

    pub fn relaxations(&self) -> u64 {
        self.relaxations
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time (ms): {}, DFS Visits: {}, Edges Processed: {}, Queue Pushes: {}, Queue Pops: {}, Relaxations: {}",
            self.elapsed_millis(),
            self.dfs_visits,
            self.edges_processed,
            self.queue_pushes,
            self.queue_pops,
            self.relaxations
        )
    }
}
