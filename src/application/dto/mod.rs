pub mod cakes;
pub mod notification;
pub mod orders;

pub use cakes::CakeDto;
pub use notification::NotificationSettingsDto;
pub use orders::{OrderDto, OrderItemDto};
