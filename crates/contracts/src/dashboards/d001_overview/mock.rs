use super::dto::{CategoryDistribution, DashboardData, SalesTrend};
use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Категории продукции: название, цвет, диапазон значения
const CATEGORIES: &[(&str, &str, u64, u64)] = &[
    ("Signature Cakes", "#007CED", 400, 600),
    ("Custom Bespoke", "#8B5CF6", 200, 300),
    ("Pastries & Tarts", "#10B981", 150, 250),
    ("Beverages", "#F59E0B", 50, 100),
];

const ACTIVE_STORES: u32 = 3;

/// Сгенерировать данные дашборда; тренд заканчивается днём `today`.
pub fn generate_dashboard<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    trend_days: i64,
) -> DashboardData {
    let days = trend_days.max(0);
    let sales_trend = (0..days)
        .map(|i| SalesTrend {
            date: today - Duration::days(days - 1 - i),
            revenue: rng.gen_range(1200..=4500),
            orders: rng.gen_range(15..=60),
        })
        .collect();

    let category_data = CATEGORIES
        .iter()
        .map(|(name, color, min, max)| CategoryDistribution {
            name: name.to_string(),
            value: rng.gen_range(*min..=*max),
            color: color.to_string(),
        })
        .collect();

    let revenue_growth = (rng.gen_range(2.5..=12.5_f64) * 10.0).round() / 10.0;

    log::debug!("Generated overview dashboard with {} trend days", days);

    DashboardData {
        total_revenue: rng.gen_range(125_000..=150_000),
        total_orders: rng.gen_range(1_200..=1_800),
        active_stores: ACTIVE_STORES,
        revenue_growth,
        sales_trend,
        category_data,
    }
}
