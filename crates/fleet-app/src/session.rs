//! One user session over a rental company's fleet

use std::path::Path;

use fleet_domain::{NewVehicle, VehicleRecord};
use fleet_store::{CsvFleetRepository, FleetStore};
use fleet_types::{Error, LoadError, Result, ValidationError};
use tracing::{info, warn};

use crate::config::Config;
use crate::notifier::Notifier;

/// Fleet store opened from configuration, plus where to save it
pub struct FleetSession {
    config: Config,
    store: FleetStore,
    repo: CsvFleetRepository,
    /// Why an existing fleet file could not be read, if it couldn't
    load_failure: Option<String>,
}

impl FleetSession {
    /// Open the fleet named in `config` and load its vehicles.
    ///
    /// A missing or unreadable fleet file is reported through `notifier` and
    /// the session starts with an empty fleet. An unreadable file is never
    /// overwritten by [`FleetSession::save`].
    pub fn open(config: Config, notifier: &dyn Notifier) -> Result<Self> {
        let repo = CsvFleetRepository::new(config.data_file()?);
        let mut store = FleetStore::new(config.company_name.clone(), config.manager.clone());

        let mut load_failure = None;
        match store.load_from(&repo) {
            Ok(count) => info!(count, path = %repo.csv_path().display(), "session opened"),
            Err(e) => {
                warn!(error = %e, "starting with an empty fleet");
                notifier.notify(&format!("❌ {}", e));
                if !matches!(e, Error::Load(LoadError::NotFound(_))) {
                    load_failure = Some(e.to_string());
                }
            }
        }

        Ok(Self {
            config,
            store,
            repo,
            load_failure,
        })
    }

    /// Reason the fleet file exists but could not be loaded
    pub fn load_failure(&self) -> Option<&str> {
        self.load_failure.as_deref()
    }

    pub fn store(&self) -> &FleetStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data_file(&self) -> &Path {
        self.repo.csv_path()
    }

    pub fn add(&mut self, draft: NewVehicle) -> std::result::Result<VehicleRecord, ValidationError> {
        self.store.add(draft)
    }

    /// Change the manager in the store and the in-memory config
    pub fn set_manager(&mut self, manager: impl Into<String>) {
        let manager = manager.into();
        self.config.manager = manager.clone();
        self.store.set_manager(manager);
    }

    /// Write the fleet back to its file.
    ///
    /// Fails with [`Error::SaveBlocked`] when the file failed to load, since
    /// writing would replace its vehicles with this session's.
    pub fn save(&self) -> Result<()> {
        if let Some(ref reason) = self.load_failure {
            return Err(Error::SaveBlocked {
                path: self.repo.csv_path().to_path_buf(),
                reason: reason.clone(),
            });
        }
        self.store.save_to(&self.repo)
    }
}
