/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Per-request capture of executed SQL statements.
//!
//! The connection reports every statement through a sea-orm metric callback.
//! Statements are appended to the [`QueryLog`] installed for the running task
//! with [`QueryLog::scope`]; statements executed outside a scope are dropped.

use sea_orm::DatabaseConnection;
use sea_orm::metric::Info;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::consts::QUERY_LOG_LIMIT;

tokio::task_local! {
    static CURRENT_QUERY_LOG: QueryLog;
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryRecord {
    pub elapsed: Duration,
    pub sql: String,
    pub failed: bool,
}

impl QueryRecord {
    pub fn new(elapsed: Duration, sql: impl Into<String>) -> Self {
        QueryRecord {
            elapsed,
            sql: sql.into(),
            failed: false,
        }
    }

    /// Elapsed seconds with millisecond precision, e.g. `0.004`.
    pub fn time(&self) -> String {
        format!("{:.3}", self.elapsed.as_secs_f64())
    }
}

impl From<&Info<'_>> for QueryRecord {
    fn from(info: &Info<'_>) -> Self {
        QueryRecord {
            elapsed: info.elapsed,
            sql: info.statement.to_string(),
            failed: info.failed,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryLog {
    records: Arc<Mutex<VecDeque<QueryRecord>>>,
}

impl QueryLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<QueryRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, record: QueryRecord) {
        let mut records = self.lock();

        if records.len() >= QUERY_LOG_LIMIT {
            records.pop_front();
        }

        records.push_back(record);
    }

    pub fn records(&self) -> Vec<QueryRecord> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Runs `future` with this log as the current one.
    pub async fn scope<F: Future>(self, future: F) -> F::Output {
        CURRENT_QUERY_LOG.scope(self, future).await
    }

    pub fn current() -> Option<QueryLog> {
        CURRENT_QUERY_LOG.try_with(QueryLog::clone).ok()
    }
}

pub fn capture_queries(db: &mut DatabaseConnection) {
    db.set_metric_callback(|info: &Info<'_>| {
        let Some(log) = QueryLog::current() else {
            return;
        };

        tracing::trace!(
            elapsed = ?info.elapsed,
            failed = info.failed,
            "captured query"
        );

        log.push(QueryRecord::from(info));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_has_millisecond_precision() {
        let record = QueryRecord::new(Duration::from_micros(4_400), "SELECT 1");
        assert_eq!(record.time(), "0.004");

        let record = QueryRecord::new(Duration::from_millis(1_250), "SELECT 1");
        assert_eq!(record.time(), "1.250");
    }

    #[test]
    fn test_log_drops_oldest_past_limit() {
        let log = QueryLog::new();

        for i in 0..QUERY_LOG_LIMIT + 2 {
            log.push(QueryRecord::new(Duration::ZERO, format!("SELECT {}", i)));
        }

        let records = log.records();
        assert_eq!(records.len(), QUERY_LOG_LIMIT);
        assert_eq!(records[0].sql, "SELECT 2");
    }

    #[test]
    fn test_clones_share_records() {
        let log = QueryLog::new();
        let other = log.clone();

        other.push(QueryRecord::new(Duration::ZERO, "SELECT 1"));
        assert_eq!(log.len(), 1);

        log.clear();
        assert!(other.is_empty());
    }
}
