//! End-to-end tests for the daemon's HTTP surface and the panel client.
//!
//! Each test serves the real axum router on a local TCP port, backed by an
//! in-memory speaker remote, and drives it through the reqwest panel client
//! exactly as the CLI panel does.

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use z407_adapter_http_axum::router;
use z407_adapter_http_axum::state::AppState;
use z407_adapter_http_reqwest::PanelClient;
use z407_app::ports::{Notifier, PanelRenderer, SpeakerRemote};
use z407_app::services::action_invoker::ActionOutcome;
use z407_app::services::panel_context::PanelContext;
use z407_app::services::remote_service::RemoteService;
use z407_domain::action::ActionEndpoint;
use z407_domain::error::RemoteError;
use z407_domain::panel::{DetailField, Indicator, PanelState};
use z407_domain::protocol::{Command, Notification};
use z407_domain::speaker::{InputMode, SpeakerState};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

#[derive(Default)]
struct FakeRemote {
    connected: bool,
    fail_writes: bool,
    state: Mutex<SpeakerState>,
    sent: Mutex<Vec<Command>>,
    status_reads: AtomicUsize,
}

impl FakeRemote {
    fn connected(input: InputMode) -> Self {
        let mut state = SpeakerState::default();
        state.apply(&Notification::Connected(input));
        state.apply(&Notification::BluetoothPaired);
        Self {
            connected: true,
            state: Mutex::new(state),
            ..Self::default()
        }
    }

    fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::connected(InputMode::Aux)
        }
    }
}

impl SpeakerRemote for FakeRemote {
    async fn is_connected(&self) -> bool {
        self.connected
    }

    async fn state(&self) -> SpeakerState {
        self.status_reads.fetch_add(1, Ordering::SeqCst);
        self.state.lock().unwrap().clone()
    }

    async fn send(&self, command: Command) -> Result<(), RemoteError> {
        if self.fail_writes {
            return Err(RemoteError::Device(Box::new(std::io::Error::other(
                "write failed",
            ))));
        }
        if let Command::SelectInput(mode) = command {
            self.state
                .lock()
                .unwrap()
                .apply(&Notification::InputChanged(mode));
        }
        self.sent.lock().unwrap().push(command);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingRenderer(RefCell<Vec<PanelState>>);

impl RecordingRenderer {
    fn rendered(&self) -> Vec<PanelState> {
        self.0.borrow().clone()
    }
}

impl PanelRenderer for RecordingRenderer {
    fn render(&self, state: &PanelState) {
        self.0.borrow_mut().push(state.clone());
    }
}

#[derive(Default)]
struct RecordingNotifier(RefCell<Vec<String>>);

impl RecordingNotifier {
    fn alerts(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

type Panel = PanelContext<PanelClient, RecordingRenderer, RecordingNotifier>;

fn panel(base_url: &str) -> Panel {
    PanelContext::new(
        PanelClient::new(base_url).unwrap(),
        RecordingRenderer::default(),
        RecordingNotifier::default(),
    )
}

async fn serve_router(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn serve(remote: Arc<FakeRemote>) -> String {
    let state = AppState::new(RemoteService::new(remote));
    serve_router(router::build(state, None)).await
}

async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn endpoint(raw: &str) -> ActionEndpoint {
    ActionEndpoint::new(raw).unwrap()
}

// ---------------------------------------------------------------------------
// Status polling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_connected_speaker_details() {
    let url = serve(Arc::new(FakeRemote::connected(InputMode::Aux))).await;
    let panel = panel(&url);

    let state = panel.check_status().await;

    assert_eq!(state.indicator, Indicator::Connected);
    assert_eq!(state.connection_mode, DetailField::Bold("aux".to_string()));
    assert_eq!(
        state.bluetooth_status,
        DetailField::Bold("connected".to_string())
    );
    assert_eq!(panel.renderer().rendered(), vec![state]);
}

#[tokio::test]
async fn should_render_disconnected_when_speaker_link_is_down() {
    let url = serve(Arc::new(FakeRemote::default())).await;
    let panel = panel(&url);

    let state = panel.check_status().await;

    assert_eq!(state.indicator, Indicator::Disconnected);
    assert_eq!(state.connection_mode, DetailField::Unknown);
    assert_eq!(state.bluetooth_status, DetailField::Unknown);
}

#[tokio::test]
async fn should_render_error_when_backend_is_unreachable() {
    let panel = panel(&unreachable_url().await);

    let state = panel.check_status().await;

    assert_eq!(state, PanelState::error());
    assert_eq!(panel.renderer().rendered(), vec![PanelState::error()]);
}

#[tokio::test]
async fn should_render_any_reported_values_verbatim() {
    let app = Router::new().route(
        "/status",
        axum::routing::get(|| async {
            axum::Json(serde_json::json!({
                "status": "connected",
                "connection_mode": "WiFi",
                "bluetooth_status": "Paired",
            }))
        }),
    );
    let panel = panel(&serve_router(app).await);

    let state = panel.check_status().await;

    assert_eq!(state.indicator, Indicator::Connected);
    assert_eq!(state.connection_mode, DetailField::Bold("WiFi".to_string()));
    assert_eq!(state.bluetooth_status, DetailField::Bold("Paired".to_string()));
}

#[tokio::test]
async fn should_render_array_body_as_disconnected() {
    let app = Router::new().route(
        "/status",
        axum::routing::get(|| async {
            axum::Json(serde_json::json!(["connected", "WiFi", "Paired"]))
        }),
    );
    let panel = panel(&serve_router(app).await);

    let state = panel.check_status().await;

    assert_eq!(state.indicator, Indicator::Disconnected);
    assert_eq!(state.connection_mode, DetailField::Unknown);
    assert_eq!(state.bluetooth_status, DetailField::Unknown);
}

#[tokio::test]
async fn should_render_null_body_as_error() {
    let app = Router::new().route(
        "/status",
        axum::routing::get(|| async { axum::Json(serde_json::Value::Null) }),
    );
    let panel = panel(&serve_router(app).await);

    let state = panel.check_status().await;

    assert_eq!(state, PanelState::error());
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_refresh_status_after_input_switch() {
    let remote = Arc::new(FakeRemote::connected(InputMode::Aux));
    let url = serve(Arc::clone(&remote)).await;
    let panel = panel(&url);

    let outcome = panel.call_action(&endpoint("/input-usb")).await;

    let refreshed = PanelState {
        indicator: Indicator::Connected,
        connection_mode: DetailField::Bold("usb".to_string()),
        bluetooth_status: DetailField::Bold("connected".to_string()),
    };
    assert_eq!(outcome, ActionOutcome::Refreshed(refreshed.clone()));
    assert_eq!(
        *remote.sent.lock().unwrap(),
        vec![Command::SelectInput(InputMode::Usb)]
    );
    assert_eq!(remote.status_reads.load(Ordering::SeqCst), 1);
    assert_eq!(panel.renderer().rendered(), vec![refreshed]);
}

#[tokio::test]
async fn should_not_refresh_after_volume_change() {
    let remote = Arc::new(FakeRemote::connected(InputMode::Aux));
    let url = serve(Arc::clone(&remote)).await;
    let panel = panel(&url);

    let outcome = panel.call_action(&endpoint("volume-up")).await;

    assert_eq!(outcome, ActionOutcome::Completed);
    assert_eq!(*remote.sent.lock().unwrap(), vec![Command::VolumeUp]);
    assert_eq!(remote.status_reads.load(Ordering::SeqCst), 0);
    assert!(panel.renderer().rendered().is_empty());
}

#[tokio::test]
async fn should_alert_when_speaker_command_fails() {
    let url = serve(Arc::new(FakeRemote::failing())).await;
    let panel = panel(&url);

    let outcome = panel.call_action(&endpoint("/input-bluetooth")).await;

    assert_eq!(outcome, ActionOutcome::Rejected(500));
    assert_eq!(
        panel_alerts(&panel),
        vec!["Error executing /input-bluetooth: 500"]
    );
    assert!(panel.renderer().rendered().is_empty());
}

#[tokio::test]
async fn should_alert_with_status_for_unknown_action() {
    let url = serve(Arc::new(FakeRemote::connected(InputMode::Aux))).await;
    let panel = panel(&url);

    let outcome = panel.call_action(&endpoint("/reboot")).await;

    assert_eq!(outcome, ActionOutcome::Rejected(404));
    assert_eq!(panel_alerts(&panel), vec!["Error executing /reboot: 404"]);
}

#[tokio::test]
async fn should_alert_with_service_unavailable_when_speaker_is_away() {
    let url = serve(Arc::new(FakeRemote::default())).await;
    let panel = panel(&url);

    let outcome = panel.call_action(&endpoint("/play-pause")).await;

    assert_eq!(outcome, ActionOutcome::Rejected(503));
    assert_eq!(panel_alerts(&panel), vec!["Error executing /play-pause: 503"]);
}

#[tokio::test]
async fn should_alert_when_backend_is_unreachable_for_action() {
    let panel = panel(&unreachable_url().await);

    let outcome = panel.call_action(&endpoint("/volume-down")).await;

    assert_eq!(outcome, ActionOutcome::Failed);
    let alerts = panel_alerts(&panel);
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].starts_with("Failed to call /volume-down: "));
    assert!(panel.renderer().rendered().is_empty());
}

fn panel_alerts(panel: &Panel) -> Vec<String> {
    panel.notifier().alerts()
}
