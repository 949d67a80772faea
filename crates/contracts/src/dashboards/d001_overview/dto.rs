use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Данные главного дашборда
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub total_revenue: u64,
    pub total_orders: u64,
    pub active_stores: u32,
    /// Рост выручки к прошлому месяцу, %, один знак после точки
    pub revenue_growth: f64,
    /// По дням, от старых к новым
    pub sales_trend: Vec<SalesTrend>,
    pub category_data: Vec<CategoryDistribution>,
}

/// Точка тренда продаж за один день
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTrend {
    pub date: NaiveDate,
    pub revenue: u64,
    pub orders: u64,
}

impl SalesTrend {
    /// Подпись оси, например `Oct 19`
    pub fn label(&self) -> String {
        self.date.format("%b %-d").to_string()
    }
}

/// Доля категории продукции
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDistribution {
    pub name: String,
    pub value: u64,
    /// CSS цвет, `#RRGGBB`
    pub color: String,
}

impl CategoryDistribution {
    /// Доля категории в процентах от суммы всех категорий
    pub fn share_of(&self, all: &[CategoryDistribution]) -> f64 {
        let total: u64 = all.iter().map(|c| c.value).sum();
        if total == 0 {
            return 0.0;
        }
        self.value as f64 * 100.0 / total as f64
    }
}

impl DashboardData {
    pub fn trend_revenue(&self) -> u64 {
        self.sales_trend.iter().map(|p| p.revenue).sum()
    }

    pub fn trend_orders(&self) -> u64 {
        self.sales_trend.iter().map(|p| p.orders).sum()
    }
}
