//! Z407 remote — discovery, connection and the notification listener.

use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use btleplug::api::{
    Central, CentralEvent, Characteristic, Manager as _, Peripheral as _, ScanFilter,
    ValueNotification,
};
use btleplug::platform::{Adapter, Manager, Peripheral};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_stream::{Stream, StreamExt as _};

use z407_app::ports::SpeakerRemote;
use z407_domain::error::RemoteError;
use z407_domain::protocol::{
    COMMAND_CHAR, Command, HexFrame, Notification, RESPONSE_CHAR, SERVICE_UUID,
};
use z407_domain::speaker::SpeakerState;

use crate::config::BleConfig;
use crate::error::BleError;
use crate::gatt;

type Notifications = Pin<Box<dyn Stream<Item = ValueNotification> + Send>>;

/// A connected Z407 speaker.
///
/// A background task applies every notification to the shared
/// [`SpeakerState`] and answers the ones that expect a reply.
pub struct Z407Remote {
    peripheral: Peripheral,
    command_char: Characteristic,
    state: Arc<RwLock<SpeakerState>>,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl Z407Remote {
    /// Scan for a speaker and connect to the first acceptable one.
    ///
    /// # Errors
    ///
    /// Returns [`BleError::NotFound`] when the scan sees no speaker,
    /// [`BleError::Timeout`] when connecting takes too long, or any BLE
    /// error raised along the way.
    pub async fn discover_and_connect(config: &BleConfig) -> Result<Self, BleError> {
        let peripheral = discover(config).await?;
        let timeout = Duration::from_secs(u64::from(config.connect_timeout_secs));
        Self::connect(peripheral, timeout).await
    }

    /// Connect to `peripheral`, subscribe to its notifications and open the
    /// control session.
    ///
    /// `timeout` bounds the connect, discovery and subscribe steps; the link
    /// is dropped again when it runs out.
    ///
    /// # Errors
    ///
    /// Returns [`BleError::Timeout`] if those steps take too long,
    /// [`BleError::GattConnect`] if the connection fails,
    /// [`BleError::CharacteristicNotFound`] if the speaker lacks a control
    /// characteristic, or [`BleError::Scan`] for other BLE failures.
    pub async fn connect(peripheral: Peripheral, timeout: Duration) -> Result<Self, BleError> {
        let session = tokio::time::timeout(timeout, subscribe(&peripheral)).await;
        let (command_char, notifications) = match session {
            Ok(Ok(session)) => session,
            Ok(Err(err)) => {
                drop_link(&peripheral).await;
                return Err(err);
            }
            Err(_) => {
                tracing::warn!(timeout_secs = timeout.as_secs(), "speaker connect timed out");
                drop_link(&peripheral).await;
                return Err(BleError::Timeout);
            }
        };

        let state = Arc::new(RwLock::new(SpeakerState::default()));
        let listener = tokio::spawn(listen(
            peripheral.clone(),
            command_char.clone(),
            Arc::clone(&state),
            notifications,
        ));

        let handshake = gatt::write_command(&peripheral, &command_char, Command::Handshake).await;
        if let Err(err) = handshake {
            listener.abort();
            drop_link(&peripheral).await;
            return Err(err);
        }
        tracing::info!(address = %peripheral.address(), "connected to speaker");

        Ok(Self {
            peripheral,
            command_char,
            state,
            listener: Mutex::new(Some(listener)),
        })
    }

    /// Stop listening and drop the BLE link.
    ///
    /// # Errors
    ///
    /// Returns [`BleError::Scan`] if the disconnect fails.
    pub async fn disconnect(&self) -> Result<(), BleError> {
        let listener = self
            .listener
            .lock()
            .map(|mut guard| guard.take())
            .unwrap_or_default();
        if let Some(handle) = listener {
            handle.abort();
            tracing::debug!("notification listener aborted");
        }
        self.peripheral.disconnect().await?;
        tracing::info!("speaker disconnected");
        Ok(())
    }
}

impl SpeakerRemote for Z407Remote {
    async fn is_connected(&self) -> bool {
        match self.peripheral.is_connected().await {
            Ok(connected) => connected,
            Err(err) => {
                tracing::warn!(%err, "failed to query link state");
                false
            }
        }
    }

    async fn state(&self) -> SpeakerState {
        self.state.read().await.clone()
    }

    async fn send(&self, command: Command) -> Result<(), RemoteError> {
        gatt::write_command(&self.peripheral, &self.command_char, command)
            .await
            .map_err(BleError::into_domain)
    }
}

/// Connect, discover services and subscribe to the response characteristic.
async fn subscribe(peripheral: &Peripheral) -> Result<(Characteristic, Notifications), BleError> {
    peripheral.connect().await.map_err(BleError::GattConnect)?;
    peripheral.discover_services().await?;

    let command_char = gatt::find_characteristic(peripheral, COMMAND_CHAR)?;
    let response_char = gatt::find_characteristic(peripheral, RESPONSE_CHAR)?;

    let notifications = peripheral.notifications().await?;
    peripheral.subscribe(&response_char).await?;
    Ok((command_char, notifications))
}

async fn drop_link(peripheral: &Peripheral) {
    if let Err(err) = peripheral.disconnect().await {
        tracing::warn!(%err, "failed to drop half-open speaker link");
    }
}

/// Scan until a speaker passing the address filter shows up, or the scan
/// window closes.
///
/// Speakers the host already knows may never raise `DeviceDiscovered`, so
/// updates and advertisements count too, and the central's known
/// peripherals are checked once the window closes.
async fn discover(config: &BleConfig) -> Result<Peripheral, BleError> {
    let manager = Manager::new().await?;
    let adapters = manager.adapters().await?;
    let central = adapters.into_iter().next().ok_or(BleError::NotAvailable)?;

    let mut events = central.events().await?;
    central
        .start_scan(ScanFilter {
            services: vec![SERVICE_UUID],
        })
        .await?;

    tracing::info!(
        duration_secs = config.scan_duration_secs,
        "scanning for speaker"
    );

    let duration = Duration::from_secs(u64::from(config.scan_duration_secs));
    let deadline = tokio::time::Instant::now() + duration;
    let mut found = None;

    while tokio::time::Instant::now() < deadline {
        let remaining = deadline - tokio::time::Instant::now();
        match tokio::time::timeout(remaining, events.next()).await {
            Ok(Some(
                CentralEvent::DeviceDiscovered(id)
                | CentralEvent::DeviceUpdated(id)
                | CentralEvent::ServicesAdvertisement { id, .. },
            )) => {
                let Ok(peripheral) = central.peripheral(&id).await else {
                    continue;
                };
                if is_speaker(&central, &peripheral, config).await {
                    found = Some(peripheral);
                    break;
                }
            }
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => break,
        }
    }

    central.stop_scan().await?;

    if found.is_none() {
        found = known_speaker(&central, config).await?;
    }
    found.ok_or(BleError::NotFound)
}

/// First peripheral already known to the central that is an acceptable speaker.
async fn known_speaker(
    central: &Adapter,
    config: &BleConfig,
) -> Result<Option<Peripheral>, BleError> {
    for peripheral in central.peripherals().await? {
        if is_speaker(central, &peripheral, config).await {
            return Ok(Some(peripheral));
        }
    }
    tracing::debug!("no known peripheral is a speaker");
    Ok(None)
}

async fn is_speaker(central: &Adapter, peripheral: &Peripheral, config: &BleConfig) -> bool {
    let Ok(Some(props)) = peripheral.properties().await else {
        return false;
    };

    let address = props.address.to_string();
    if !accepts_speaker(&props.services, &address, config) {
        return false;
    }

    tracing::info!(
        %address,
        name = ?props.local_name,
        adapter = ?central.adapter_info().await.ok(),
        "speaker found"
    );
    true
}

/// Not every backend honours the scan filter, so the service is checked again.
fn accepts_speaker(services: &[uuid::Uuid], address: &str, config: &BleConfig) -> bool {
    if !services.contains(&SERVICE_UUID) {
        tracing::trace!(%address, "ignoring device without the Z407 service");
        return false;
    }
    if !config.accepts(address) {
        tracing::debug!(%address, "filtered out by device_address");
        return false;
    }
    true
}

/// Apply notifications until the stream closes.
async fn listen(
    peripheral: Peripheral,
    command_char: Characteristic,
    state: Arc<RwLock<SpeakerState>>,
    mut notifications: impl Stream<Item = ValueNotification> + Unpin,
) {
    while let Some(ValueNotification { uuid, value }) = notifications.next().await {
        if uuid != RESPONSE_CHAR {
            continue;
        }

        if let Some(command) = handle_frame(&state, &value).await
            && let Err(err) = gatt::write_command(&peripheral, &command_char, command).await
        {
            tracing::warn!(%err, ?command, "failed to answer notification");
        }
    }

    tracing::warn!("notification stream closed");
}

/// Decode one frame, fold it into the state and return the reply to send, if any.
async fn handle_frame(state: &RwLock<SpeakerState>, frame: &[u8]) -> Option<Command> {
    let notification = Notification::decode(frame);
    log_notification(&notification, frame);
    state.write().await.apply(&notification)
}

fn log_notification(notification: &Notification, raw: &[u8]) {
    match notification {
        Notification::Unknown(_) => {
            tracing::warn!(frame = %HexFrame(raw), "unknown notification");
        }
        Notification::VolumeUpAcknowledged
        | Notification::VolumeDownAcknowledged
        | Notification::PlayPauseAcknowledged
        | Notification::InputSwitchAcknowledged(_) => {
            tracing::debug!(?notification, "command acknowledged");
        }
        other => tracing::info!(notification = ?other, "speaker event"),
    }
}
