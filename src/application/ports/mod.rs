// src/application/ports/mod.rs
pub mod identity;
pub mod notification;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type IdentityContextPort = dyn identity::IdentityContext;
pub type NotificationSinkPort = dyn notification::NotificationSink;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
