// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_cake;
mod sqlite_order;
mod sqlite_settings;

pub use sqlite_cake::{SqliteCakeReadRepository, SqliteCakeWriteRepository};
pub use sqlite_order::{SqliteOrderReadRepository, SqliteOrderWriteRepository};
pub use sqlite_settings::SqliteNotificationSettingsRepository;
