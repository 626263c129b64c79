#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use gaswatch_api::config::ServerConfig;
use gaswatch_api::router::build_app_router;
use gaswatch_api::state::AppState;
use gaswatch_db::DbPool;
use gaswatch_events::{
    AlertDispatcher, AlertStatsSnapshot, Notifier, SmsError, SmsMessage, SmsTransport,
};

/// How the recording transport answers each send.
#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    Succeed,
    Fail,
    Hang,
}

/// SMS transport double that records every attempted message.
pub struct RecordingTransport {
    sent: Mutex<Vec<SmsMessage>>,
    behavior: Behavior,
}

impl RecordingTransport {
    pub fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            behavior,
        })
    }

    pub fn sent(&self) -> Vec<SmsMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SmsTransport for RecordingTransport {
    async fn send(&self, message: &SmsMessage) -> Result<(), SmsError> {
        self.sent.lock().unwrap().push(message.clone());
        match self.behavior {
            Behavior::Succeed => Ok(()),
            Behavior::Fail => Err(SmsError::Unauthorized(401)),
            Behavior::Hang => {
                std::future::pending::<()>().await;
                Ok(())
            }
        }
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// A fully wired router plus handles for asserting on side effects.
pub struct TestApp {
    pub app: Router,
    pub pool: DbPool,
    pub alerts: AlertDispatcher,
    pub transport: Arc<RecordingTransport>,
}

/// Build a test `ServerConfig` from defaults with fixed alert routing.
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::from_lookup(|key| match key {
        "ALERT_FROM" => Some("+15550001111".to_string()),
        "ALERT_TO" => Some("+15550002222".to_string()),
        _ => None,
    })
    .expect("default config is valid");
    config.alert.timeout = Duration::from_millis(200);
    config
}

pub async fn spawn_app(pool: DbPool) -> TestApp {
    spawn_app_with(pool, Behavior::Succeed).await
}

/// Build the production router over the per-test database and a recording
/// SMS transport.
pub async fn spawn_app_with(pool: DbPool, behavior: Behavior) -> TestApp {
    let config = test_config();

    let transport = RecordingTransport::new(behavior);
    let notifier = Notifier::new(transport.clone(), config.alert.clone());
    let (alerts, _worker) = AlertDispatcher::start(notifier, config.alert_queue_capacity);

    let state = AppState {
        pool: pool.clone(),
        alerts: alerts.clone(),
    };

    TestApp {
        app: build_app_router(state, &config),
        pool,
        alerts,
        transport,
    }
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn reading_count(pool: &DbPool) -> i64 {
    gaswatch_db::repositories::ReadingRepo::count(pool)
        .await
        .unwrap()
}

/// Poll the alert counters until `done` holds or two seconds pass.
pub async fn wait_for_alerts(
    alerts: &AlertDispatcher,
    done: impl Fn(&AlertStatsSnapshot) -> bool,
) -> AlertStatsSnapshot {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    loop {
        let stats = alerts.stats();
        if done(&stats) {
            return stats;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "alert condition not reached, stats: {stats:?}"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
