use super::ds::{DashboardSettings, MapPosition, Subsystem, SubsystemUpdate, TimeOfDay};
use crate::error::{AppError, SettingsError};
use crate::gateway::SubmissionGateway;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Single source of truth for the dashboard session. Records are replaced
/// wholesale, so a caller editing one field sends the full record back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsStore {
    settings: DashboardSettings,
    position: MapPosition,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and replaces the named subsystem's record.
    pub fn update(&mut self, update: SubsystemUpdate) -> Result<(), SettingsError> {
        update.validate()?;
        match update {
            SubsystemUpdate::Lifting(s) => self.settings.lifting_settings = s,
            SubsystemUpdate::Distribution(s) => self.settings.distribution_settings = s,
            SubsystemUpdate::Pressure(s) => self.settings.pressure_settings = s,
            SubsystemUpdate::Solar(s) => self.settings.solar_settings = s,
        }
        debug!(subsystem = %update.subsystem(), "settings record replaced");
        Ok(())
    }

    /// Replaces only the time window of the named subsystem, keeping its
    /// numeric fields as they are.
    pub fn update_time_range(&mut self, subsystem: Subsystem, window: TimeOfDay) -> Result<(), SettingsError> {
        window.validate()?;
        match subsystem {
            Subsystem::Lifting => self.settings.lifting_settings.time_of_day = window,
            Subsystem::Distribution => self.settings.distribution_settings.time_of_day = window,
            Subsystem::Pressure => self.settings.pressure_settings.time_of_day = window,
            Subsystem::Solar => self.settings.solar_settings.time_of_day = window,
        }
        debug!(subsystem = %subsystem, start = window.start, end = window.end, "time window replaced");
        Ok(())
    }

    pub fn snapshot(&self, subsystem: Subsystem) -> SubsystemUpdate {
        match subsystem {
            Subsystem::Lifting => SubsystemUpdate::Lifting(self.settings.lifting_settings),
            Subsystem::Distribution => SubsystemUpdate::Distribution(self.settings.distribution_settings),
            Subsystem::Pressure => SubsystemUpdate::Pressure(self.settings.pressure_settings),
            Subsystem::Solar => SubsystemUpdate::Solar(self.settings.solar_settings),
        }
    }

    pub fn snapshot_all(&self) -> DashboardSettings {
        self.settings
    }

    pub fn position(&self) -> MapPosition {
        self.position
    }

    pub fn set_position(&mut self, position: MapPosition) -> Result<(), SettingsError> {
        position.validate()?;
        self.position = position;
        Ok(())
    }
}

/// Shared controller state: the settings store plus the gateway that
/// delivers snapshots to the management backend.
pub struct AppState<G: SubmissionGateway> {
    pub store: RwLock<SettingsStore>,
    pub gateway: Arc<G>,
    applying: AtomicBool,
}

/// Holds the in-flight slot for one submission. Clearing the flag on drop
/// keeps the slot usable when the apply future is cancelled mid-submit
/// (the server drops handler futures when the client disconnects).
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<G: SubmissionGateway> AppState<G> {
    pub fn new(gateway: Arc<G>) -> Arc<Self> {
        Arc::new(Self { store: RwLock::new(SettingsStore::new()), gateway, applying: AtomicBool::new(false) })
    }

    /// Sends the current snapshot to the backend. At most one submission is
    /// in flight at a time; a second apply is refused rather than queued.
    pub async fn apply(&self) -> Result<(), AppError> {
        if self.applying.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst).is_err() {
            return Err(AppError::InFlight);
        }
        let _slot = InFlightGuard(&self.applying);
        let snapshot = self.store.read().await.snapshot_all();
        let result = match snapshot.validate() {
            Ok(()) => self.gateway.submit(snapshot).await,
            Err(e) => Err(AppError::Validation(e)),
        };
        match &result {
            Ok(()) => info!("settings applied successfully"),
            Err(e) => warn!(error = %e, "failed to apply settings"),
        }
        result
    }
}
