//! Logging contract tests: absent single-entity results warn, found
//! results log their identifiers, and store failures are logged at
//! error level before propagating.

use std::io;
use std::sync::{Arc, Mutex};

use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use tracing::instrument::WithSubscriber;
use tracing_subscriber::fmt::MakeWriter;
use userlens_core::error::{LensError, LensResult};
use userlens_core::models::session::{CreateSession, DeviceType};
use userlens_core::models::user::{CreateUser, UserStatus, UserWithSessions};
use userlens_core::store::UserStore;
use userlens_db::{SurrealSessionStore, SurrealUserStore};
use userlens_query::UserQueryService;

/// Shared buffer the fmt subscriber writes into.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture() -> (CapturedLog, impl tracing::Subscriber + Send + Sync) {
    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(log.clone())
        .with_ansi(false)
        .finish();
    (log, subscriber)
}

async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    userlens_db::run_migrations(&db).await.unwrap();
    db
}

struct FailingUserStore;

impl UserStore for FailingUserStore {
    async fn most_sessions(&self) -> LensResult<Option<UserWithSessions>> {
        Err(LensError::Store("connection reset by peer".into()))
    }

    async fn with_device_session(
        &self,
        _device: DeviceType,
    ) -> LensResult<Vec<UserWithSessions>> {
        Err(LensError::Store("connection reset by peer".into()))
    }
}

#[tokio::test]
async fn absent_user_result_logs_a_warning() {
    let db = setup().await;
    let service = UserQueryService::new(SurrealUserStore::new(db));

    let (log, subscriber) = capture();
    let result = async { service.user_with_most_sessions().await }
        .with_subscriber(subscriber)
        .await
        .unwrap();

    assert!(result.is_none());

    let output = log.contents();
    assert!(output.contains("WARN"), "missing warning: {output}");
    assert!(output.contains("No users found"), "missing message: {output}");
}

#[tokio::test]
async fn found_user_result_logs_its_id_and_count() {
    let db = setup().await;
    let user = SurrealUserStore::new(db.clone())
        .create(CreateUser {
            email: "alice@example.com".into(),
            status: UserStatus::Active,
        })
        .await
        .unwrap();
    SurrealSessionStore::new(db.clone())
        .create(CreateSession {
            user_id: user.id,
            device_type: DeviceType::Desktop,
            started_at: chrono::Utc::now(),
            ended_at: None,
        })
        .await
        .unwrap();

    let service = UserQueryService::new(SurrealUserStore::new(db));

    let (log, subscriber) = capture();
    let top = async { service.user_with_most_sessions().await }
        .with_subscriber(subscriber)
        .await
        .unwrap();

    assert!(top.is_some());

    let output = log.contents();
    assert!(
        output.contains("Found user with most sessions"),
        "missing message: {output}"
    );
    assert!(
        output.contains(&user.id.to_string()),
        "missing user id: {output}"
    );
    assert!(output.contains("session_count=1"), "missing count: {output}");
}

#[tokio::test]
async fn store_failure_is_logged_at_error_level_before_propagating() {
    let service = UserQueryService::new(FailingUserStore);

    let (log, subscriber) = capture();
    let result = async { service.user_with_most_sessions().await }
        .with_subscriber(subscriber)
        .await;

    // The failure still reaches the caller unchanged.
    match result {
        Err(LensError::Store(msg)) => assert_eq!(msg, "connection reset by peer"),
        other => panic!("expected a propagated store failure, got {other:?}"),
    }

    let output = log.contents();
    assert!(output.contains("ERROR"), "missing error log: {output}");
    assert!(
        output.contains("connection reset by peer"),
        "missing cause: {output}"
    );
}
