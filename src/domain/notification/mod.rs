pub mod entity;
pub mod repository;

pub use entity::{NotificationSettings, NotificationSettingsUpdate};
pub use repository::NotificationSettingsRepository;
