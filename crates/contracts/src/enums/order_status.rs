use serde::{Deserialize, Serialize};

/// Статус заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Completed,
    Processing,
    Pending,
    Cancelled,
}

impl OrderStatus {
    /// Код статуса (он же отображаемое значение и значение фильтра)
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "Completed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Pending => "Pending",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Вариант бейджа для таблицы
    pub fn badge_variant(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "success",
            OrderStatus::Processing => "primary",
            OrderStatus::Pending => "warning",
            OrderStatus::Cancelled => "error",
        }
    }

    /// Вес при генерации тестовых данных
    pub fn mock_weight(&self) -> u32 {
        match self {
            OrderStatus::Completed => 10,
            OrderStatus::Processing => 5,
            OrderStatus::Pending => 3,
            OrderStatus::Cancelled => 1,
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Completed,
            OrderStatus::Processing,
            OrderStatus::Pending,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Completed" => Some(OrderStatus::Completed),
            "Processing" => Some(OrderStatus::Processing),
            "Pending" => Some(OrderStatus::Pending),
            "Cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
