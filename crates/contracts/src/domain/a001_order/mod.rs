pub mod aggregate;
pub mod mock;

pub use aggregate::{Order, OrderField};
pub use mock::generate_orders;
