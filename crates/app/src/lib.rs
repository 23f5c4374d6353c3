#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod explorer;
pub mod log;
pub mod selector;
pub mod service;
pub mod settings;
pub mod storage;

pub use explorer::{BadgeStyle, GroupCard, MuscleExplorer, SelectionCard};
pub use selector::MuscleSelector;
pub use service::Service;
pub use settings::{Palette, Settings, SettingsRepository, SettingsService, Theme};
pub use storage::{MemoryStorage, StorageError};
