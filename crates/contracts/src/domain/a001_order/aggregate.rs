use crate::enums::{OrderStatus, StoreLocation};
use crate::shared::grid::{FieldValue, GridRecord};
use crate::shared::number_format::format_money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Заказ клиента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// 8 символов, A-Z и 0-9
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub date: DateTime<Utc>,
    pub total: f64,
    pub status: OrderStatus,
    pub location: StoreLocation,
}

/// Колонки заказа, доступные гриду
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderField {
    Id,
    CustomerName,
    CustomerEmail,
    Date,
    Total,
    Status,
    Location,
}

impl OrderField {
    pub fn label(&self) -> &'static str {
        match self {
            OrderField::Id => "Order ID",
            OrderField::CustomerName => "Customer",
            OrderField::CustomerEmail => "Email",
            OrderField::Date => "Date",
            OrderField::Total => "Total",
            OrderField::Status => "Status",
            OrderField::Location => "Hub",
        }
    }
}

impl GridRecord for Order {
    type Field = OrderField;

    fn searchable_fields() -> &'static [OrderField] {
        &[
            OrderField::Id,
            OrderField::CustomerName,
            OrderField::CustomerEmail,
        ]
    }

    fn field_value(&self, field: OrderField) -> FieldValue<'_> {
        match field {
            OrderField::Id => FieldValue::Text(&self.id),
            OrderField::CustomerName => FieldValue::Text(&self.customer_name),
            OrderField::CustomerEmail => FieldValue::Text(&self.customer_email),
            OrderField::Date => FieldValue::Date(self.date),
            OrderField::Total => FieldValue::Number(self.total),
            // перечисления сортируются и фильтруются по коду
            OrderField::Status => FieldValue::Text(self.status.code()),
            OrderField::Location => FieldValue::Text(self.location.code()),
        }
    }
}

impl Order {
    /// Сумма для таблицы, например `$1,234.50`
    pub fn formatted_total(&self) -> String {
        format_money(self.total)
    }

    /// Дата для таблицы, например `Oct 19, 2026`
    pub fn formatted_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}
