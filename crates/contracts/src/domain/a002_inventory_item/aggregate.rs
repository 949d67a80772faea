use super::intake::InventoryIntake;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID позиции склада
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryItemId(pub Uuid);

impl InventoryItemId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Состояние запаса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    Healthy,
    #[serde(rename = "Low Stock")]
    LowStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Healthy => "Healthy",
            StockStatus::LowStock => "Low Stock",
        }
    }

    /// Цвет бейджа
    pub fn badge_color(&self) -> &'static str {
        match self {
            StockStatus::Healthy => "success",
            StockStatus::LowStock => "warning",
        }
    }
}

/// Позиция сырья на складе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    pub batch: String,
    pub quantity: u32,
    pub supplier: String,
    pub status: StockStatus,
}

impl InventoryItem {
    /// Новая позиция из принятой приёмки, всегда `Healthy`
    pub fn from_intake(intake: &InventoryIntake) -> Self {
        Self {
            id: InventoryItemId::new_v4(),
            name: intake.item_name.clone(),
            batch: intake.batch_id.clone(),
            quantity: intake.quantity,
            supplier: intake.supplier.clone(),
            status: StockStatus::Healthy,
        }
    }
}

/// Начальное содержимое склада
pub fn seed_items() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: InventoryItemId::new_v4(),
            name: "Premium Cake Flour".to_string(),
            batch: "BATCH-0042".to_string(),
            quantity: 250,
            supplier: "Ontario Mills".to_string(),
            status: StockStatus::Healthy,
        },
        InventoryItem {
            id: InventoryItemId::new_v4(),
            name: "Madagascar Vanilla".to_string(),
            batch: "BATCH-0089".to_string(),
            quantity: 15,
            supplier: "Global Spice Co".to_string(),
            status: StockStatus::LowStock,
        },
    ]
}

/// Добавить принятую позицию в начало списка
pub fn receive(items: &mut Vec<InventoryItem>, intake: &InventoryIntake) -> InventoryItemId {
    let item = InventoryItem::from_intake(intake);
    let id = item.id;
    log::info!("Received {} x{} ({})", item.name, item.quantity, item.batch);
    items.insert(0, item);
    id
}
