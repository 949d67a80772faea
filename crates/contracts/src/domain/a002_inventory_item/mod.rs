pub mod aggregate;
pub mod intake;

pub use aggregate::{receive, seed_items, InventoryItem, InventoryItemId, StockStatus};
pub use intake::{InventoryIntake, InventoryIntakeForm, MAX_INTAKE_QUANTITY};
