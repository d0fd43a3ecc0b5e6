//! Query profiler: records every statement a store dispatches.
//!
//! Shared as `Arc<QueryProfiler>` between the store that writes to it and
//! the caller that reads it. A disabled profiler hands out no-op handles
//! and keeps whatever it recorded before it was disabled.

pub mod clock;
pub mod record;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use datamapper_core::Scalar;
use serde::Serialize;

pub use clock::{Clock, SystemClock};
pub use record::{round_seconds, ProfileRecord};

pub struct QueryProfiler {
    enabled: AtomicBool,
    records: Mutex<Vec<ProfileRecord>>,
    clock: Arc<dyn Clock>,
}

/// Open record returned by [`QueryProfiler::start`].
#[must_use = "a profile record stays unfinished until `finish` is called"]
pub struct ProfileHandle<'a> {
    profiler: &'a QueryProfiler,
    index: Option<usize>,
}

/// Serializable snapshot of everything recorded so far.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub count: usize,
    pub total_elapsed_seconds: f64,
    pub records: Vec<ProfileRecord>,
}

impl QueryProfiler {
    /// A disabled profiler on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            enabled: AtomicBool::new(false),
            records: Mutex::new(Vec::new()),
            clock,
        }
    }

    /// An enabled profiler on the system clock.
    pub fn enabled() -> Self {
        let profiler = Self::new();
        profiler.set_enabled(true);
        profiler
    }

    pub fn set_enabled(&self, enabled: bool) -> &Self {
        self.enabled.store(enabled, Ordering::Relaxed);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Open a record stamped with the current time. Appended to the log
    /// immediately; its finish time is set by [`ProfileHandle::finish`].
    pub fn start(&self, sql: &str, binds: &[(String, Scalar)]) -> ProfileHandle<'_> {
        if !self.is_enabled() {
            return ProfileHandle {
                profiler: self,
                index: None,
            };
        }

        let record = ProfileRecord::new(sql, binds.to_vec(), self.clock.now_seconds());
        let mut records = self.lock();
        records.push(record);
        let index = records.len() - 1;

        ProfileHandle {
            profiler: self,
            index: Some(index),
        }
    }

    /// All records, oldest first.
    pub fn records(&self) -> Vec<ProfileRecord> {
        self.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Sum of every finished record's elapsed time, rounded to 4 decimals.
    /// Unfinished records are left out.
    pub fn total_elapsed_seconds(&self) -> f64 {
        let total: f64 = self
            .lock()
            .iter()
            .filter_map(ProfileRecord::elapsed_seconds)
            .sum();
        round_seconds(total)
    }

    pub fn summary(&self) -> ProfileSummary {
        let records = self.records();
        let total: f64 = records.iter().filter_map(ProfileRecord::elapsed_seconds).sum();
        ProfileSummary {
            count: records.len(),
            total_elapsed_seconds: round_seconds(total),
            records,
        }
    }

    pub fn summary_json(&self) -> serde_json::Value {
        serde_json::to_value(self.summary()).unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ProfileRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for QueryProfiler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for QueryProfiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryProfiler")
            .field("enabled", &self.is_enabled())
            .field("count", &self.count())
            .finish()
    }
}

impl ProfileHandle<'_> {
    /// Stamp the record with the current time.
    pub fn finish(self) {
        let Some(index) = self.index else {
            return;
        };
        let now = self.profiler.clock.now_seconds();
        if let Some(record) = self.profiler.lock().get_mut(index) {
            record.finished_at = Some(now);
        }
    }
}
