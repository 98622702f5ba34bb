pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Cake, CakeUpdate, NewCake};
pub use repository::{CakeReadRepository, CakeWriteRepository};
pub use value_objects::{CakeId, CakeName, CakeSlug};
