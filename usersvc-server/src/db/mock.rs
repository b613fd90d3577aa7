//! In-memory [`Database`] for router tests
//!
//! Records every statement it receives and replays queued responses.
//! With nothing queued, `fetch` returns no rows and `execute` reports
//! zero affected rows.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Database, DbError, Param};
use crate::models::{MutationResult, User};

/// Which trait method a recorded call went through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Fetch,
    Execute,
}

/// A statement the mock received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub kind: CallKind,
    pub sql: String,
    pub params: Vec<Param>,
}

pub struct MockDatabase {
    reachable: AtomicBool,
    calls: Mutex<Vec<Call>>,
    rows: Mutex<VecDeque<Result<Vec<User>, DbError>>>,
    mutations: Mutex<VecDeque<Result<MutationResult, DbError>>>,
}

impl Default for MockDatabase {
    fn default() -> Self {
        Self {
            reachable: AtomicBool::new(true),
            calls: Mutex::default(),
            rows: Mutex::default(),
            mutations: Mutex::default(),
        }
    }
}

impl MockDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    /// Queue the result of the next `fetch`
    pub fn push_rows(&self, rows: Vec<User>) {
        self.rows.lock().unwrap().push_back(Ok(rows));
    }

    /// Queue the result of the next `execute`
    pub fn push_mutation(&self, result: MutationResult) {
        self.mutations.lock().unwrap().push_back(Ok(result));
    }

    /// Make the next `fetch` fail
    pub fn fail_next_fetch(&self) {
        self.rows
            .lock()
            .unwrap()
            .push_back(Err(DbError::Sqlx(sqlx::Error::PoolTimedOut)));
    }

    /// Make the next `execute` fail
    pub fn fail_next_execute(&self) {
        self.mutations
            .lock()
            .unwrap()
            .push_back(Err(DbError::Sqlx(sqlx::Error::PoolTimedOut)));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, kind: CallKind, sql: &str, params: &[Param]) {
        self.calls.lock().unwrap().push(Call {
            kind,
            sql: sql.to_owned(),
            params: params.to_vec(),
        });
    }
}

#[async_trait]
impl Database for MockDatabase {
    async fn ping(&self) -> bool {
        self.reachable.load(Ordering::SeqCst)
    }

    async fn fetch(&self, sql: &str, params: &[Param]) -> Result<Vec<User>, DbError> {
        self.record(CallKind::Fetch, sql, params);
        self.rows.lock().unwrap().pop_front().unwrap_or(Ok(Vec::new()))
    }

    async fn execute(&self, sql: &str, params: &[Param]) -> Result<MutationResult, DbError> {
        self.record(CallKind::Execute, sql, params);
        self.mutations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(MutationResult::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_queued_rows_then_defaults() {
        let mock = MockDatabase::new();
        mock.push_rows(vec![User {
            id: 1,
            name: Some("Ann".into()),
            mail: None,
            title: None,
            image: None,
        }]);

        let first = mock.fetch("SELECT 1", &[]).await.unwrap();
        assert_eq!(first.len(), 1);

        let second = mock.fetch("SELECT 1", &[]).await.unwrap();
        assert!(second.is_empty());
        assert_eq!(mock.calls().len(), 2);
    }

    #[tokio::test]
    async fn execute_defaults_to_zero_rows() {
        let mock = MockDatabase::new();
        let result = mock.execute("DELETE", &[Param::Id(3)]).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(mock.calls()[0].params, vec![Param::Id(3)]);
    }

    #[tokio::test]
    async fn ping_follows_reachability() {
        let mock = MockDatabase::new();
        assert!(mock.ping().await);
        mock.set_reachable(false);
        assert!(!mock.ping().await);
    }
}
