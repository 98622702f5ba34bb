pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewOrder, NewOrderItem, Order, OrderItem, ResolvedOrder, ResolvedOrderItem};
pub use repository::{OrderReadRepository, OrderWriteRepository};
pub use value_objects::{OrderId, OrderStatus, Quantity, UserId};
