use std::collections::VecDeque;

use ::log::debug;

use crate::{Settings, SettingsRepository, SettingsService, StorageError, log};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    fn get_settings(&self) -> Result<Settings, StorageError> {
        self.repository.read_settings()
    }

    fn set_settings(&self, settings: Settings) -> Result<(), StorageError> {
        debug!("switching to theme {}", settings.theme.name());
        self.repository.write_settings(settings)
    }
}

#[cfg(test)]
mod tests {
    use ::log::Level;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{MemoryStorage, Theme, log::Service as _};

    #[test]
    fn test_settings_service() {
        let service = Service::new(MemoryStorage::default());

        assert_eq!(service.get_settings().unwrap(), Settings::default());

        service
            .set_settings(Settings {
                theme: Theme::Inferno,
                ..Settings::default()
            })
            .unwrap();

        assert_eq!(service.get_settings().unwrap().theme, Theme::Inferno);
    }

    #[test]
    fn test_log_service() {
        let service = Service::new(MemoryStorage::default());
        let entry = log::Entry {
            time: "Oct 18 10:00:00".into(),
            level: Level::Error,
            message: "failed".into(),
        };

        service.add_log_entry(entry.clone()).unwrap();

        assert_eq!(service.get_log_entries().unwrap(), VecDeque::from([entry]));
    }
}
