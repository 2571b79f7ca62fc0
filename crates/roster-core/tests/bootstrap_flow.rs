use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use proptest::prelude::*;
use roster_core::{run_scoped, NewUser, Reporter, User, UserStore};

#[derive(Debug)]
struct StoreFailure(&'static str);

impl std::fmt::Display for StoreFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "store failure: {}", self.0)
    }
}

impl std::error::Error for StoreFailure {}

#[derive(Debug, Default)]
struct RecordingReporter {
    created: Vec<User>,
    listed: Vec<Vec<User>>,
}

impl Reporter for RecordingReporter {
    fn created(&mut self, user: &User) {
        self.created.push(user.clone());
    }

    fn listed(&mut self, users: &[User]) {
        self.listed.push(users.to_vec());
    }
}

#[derive(Default)]
struct MemoryStore {
    rows: Mutex<Vec<User>>,
    next_id: AtomicUsize,
    fail_create: bool,
    fail_list: bool,
    disconnects: AtomicUsize,
}

impl MemoryStore {
    fn failing(fail_create: bool, fail_list: bool) -> Self {
        Self {
            fail_create,
            fail_list,
            ..Self::default()
        }
    }
}

#[async_trait]
impl<'a> UserStore for &'a MemoryStore {
    type Error = StoreFailure;

    async fn create_user(&self, new_user: &NewUser) -> Result<User, Self::Error> {
        if self.fail_create {
            return Err(StoreFailure("connection refused"));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let user = User {
            id,
            name: new_user.name.clone(),
        };
        self.rows.lock().expect("rows lock").push(user.clone());
        Ok(user)
    }

    async fn find_many_users(&self) -> Result<Vec<User>, Self::Error> {
        if self.fail_list {
            return Err(StoreFailure("read timed out"));
        }
        Ok(self.rows.lock().expect("rows lock").clone())
    }

    async fn disconnect(&self) {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn run_inserts_alice_and_lists_it() {
    let store = MemoryStore::default();
    let mut reporter = RecordingReporter::default();

    let report = run_scoped(&store, &NewUser::default(), &mut reporter)
        .await
        .expect("run succeeds");

    assert_eq!(report.created.name, "Alice");
    assert_eq!(report.users, vec![report.created.clone()]);
    assert_eq!(reporter.created, vec![report.created.clone()]);
    assert_eq!(reporter.listed, vec![report.users.clone()]);
    assert_eq!(store.disconnects.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn repeated_runs_create_distinct_records() {
    let store = MemoryStore::default();
    let mut previous_count = 0;
    for _ in 0..4 {
        let mut reporter = RecordingReporter::default();
        let report = run_scoped(&store, &NewUser::default(), &mut reporter)
            .await
            .expect("run succeeds");
        assert!(report.users.len() > previous_count, "count never decreases");
        previous_count = report.users.len();
    }

    let rows = store.rows.lock().expect("rows lock").clone();
    let mut ids: Vec<i64> = rows.iter().map(|user| user.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4, "every run assigns a fresh id");
    assert!(rows.iter().all(|user| user.name == "Alice"));
    assert_eq!(store.disconnects.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn create_failure_still_disconnects_once() {
    let store = MemoryStore::failing(true, false);
    let mut reporter = RecordingReporter::default();

    let err = run_scoped(&store, &NewUser::default(), &mut reporter)
        .await
        .expect_err("create fails");

    assert_eq!(err.to_string(), "store failure: connection refused");
    assert!(reporter.created.is_empty());
    assert!(reporter.listed.is_empty());
    assert_eq!(store.disconnects.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn list_failure_keeps_created_record_reported() {
    let store = MemoryStore::failing(false, true);
    let mut reporter = RecordingReporter::default();

    run_scoped(&store, &NewUser::new("Bob"), &mut reporter)
        .await
        .expect_err("list fails");

    assert_eq!(reporter.created.len(), 1);
    assert_eq!(reporter.created[0].name, "Bob");
    assert!(reporter.listed.is_empty());
    assert_eq!(store.disconnects.load(Ordering::SeqCst), 1);
}

proptest! {
    #[test]
    fn disconnect_runs_exactly_once_per_run(
        outcomes in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..8)
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");
        for (fail_create, fail_list) in outcomes {
            let store = MemoryStore::failing(fail_create, fail_list);
            let mut reporter = RecordingReporter::default();
            let result = runtime.block_on(run_scoped(&store, &NewUser::default(), &mut reporter));
            prop_assert_eq!(result.is_ok(), !fail_create && !fail_list);
            prop_assert_eq!(store.disconnects.load(Ordering::SeqCst), 1);
        }
    }
}
