use super::aggregate::Order;
use crate::enums::{OrderStatus, StoreLocation};
use chrono::{DateTime, Duration, Utc};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

const ID_LEN: usize = 8;
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const FIRST_NAMES: &[&str] = &[
    "Olivia", "Liam", "Emma", "Noah", "Ava", "Lucas", "Sophia", "Ethan", "Mia", "Mason",
    "Isla", "Logan", "Chloe", "Owen", "Grace", "Jack", "Amelia", "Leo", "Hannah", "Theo",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Tremblay", "Brown", "Wilson", "Martin", "Roy", "Campbell", "Taylor", "Clarke",
    "Gagnon", "Walker", "Patel", "Nguyen", "Evans", "Fraser", "Murphy", "Hughes", "Singh",
];

const EMAIL_DOMAINS: &[&str] = &["gmail.com", "outlook.com", "yahoo.ca", "icloud.com", "proton.me"];

const TOTAL_MIN: f64 = 25.0;
const TOTAL_MAX: f64 = 850.0;

fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Сгенерировать `count` заказов за последние `history_days` дней.
///
/// Результат отсортирован по дате, новые сверху.
pub fn generate_orders<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    now: DateTime<Utc>,
    history_days: i64,
) -> Vec<Order> {
    let statuses = OrderStatus::all();
    let locations = StoreLocation::all();
    let weights = statuses.iter().map(|s| s.mock_weight());
    // веса константные и ненулевые
    let status_dist = WeightedIndex::new(weights).ok();
    let window_secs = history_days.max(0) * 24 * 60 * 60;

    let mut seen = HashSet::with_capacity(count);
    let mut orders = Vec::with_capacity(count);

    while orders.len() < count {
        let id = random_id(rng);
        if !seen.insert(id.clone()) {
            continue;
        }

        let first = pick(rng, FIRST_NAMES);
        let last = pick(rng, LAST_NAMES);
        let customer_email = format!(
            "{}.{}{}@{}",
            first,
            last,
            rng.gen_range(1..100),
            pick(rng, EMAIL_DOMAINS)
        )
        .to_lowercase();

        let offset = if window_secs > 0 {
            rng.gen_range(0..window_secs)
        } else {
            0
        };
        let total = (rng.gen_range(TOTAL_MIN..=TOTAL_MAX) * 100.0).round() / 100.0;
        let status = match &status_dist {
            Some(dist) => statuses[dist.sample(rng)],
            None => OrderStatus::Completed,
        };
        let location = locations
            .choose(rng)
            .copied()
            .unwrap_or(StoreLocation::LondonHq);

        orders.push(Order {
            id,
            customer_name: format!("{} {}", first, last),
            customer_email,
            date: now - Duration::seconds(offset),
            total,
            status,
            location,
        });
    }

    orders.sort_by(|a, b| b.date.cmp(&a.date));
    log::debug!("Generated {} mock orders over {} days", orders.len(), history_days);
    orders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::OrderField;
    use crate::shared::grid::{compute, FilterValue, GridQuery};
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
    }

    fn sample(count: usize) -> Vec<Order> {
        let mut rng = StdRng::seed_from_u64(42);
        generate_orders(&mut rng, count, now(), 30)
    }

    #[test]
    fn test_shape_of_generated_orders() {
        let orders = sample(500);
        assert_eq!(orders.len(), 500);

        let ids: HashSet<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids.len(), 500);

        let oldest = now() - Duration::days(30);
        for o in &orders {
            assert_eq!(o.id.len(), 8);
            assert!(o.id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
            assert!(o.total >= 25.0 && o.total <= 850.0, "{}", o.total);
            assert_eq!((o.total * 100.0).round() / 100.0, o.total);
            assert!(o.date <= now() && o.date > oldest);
            assert_eq!(o.customer_email, o.customer_email.to_lowercase());
            assert!(o.customer_email.contains('@'));
        }
    }

    #[test]
    fn test_sorted_by_date_descending() {
        let orders = sample(200);
        assert!(orders.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_status_weights_favor_completed() {
        let orders = sample(500);
        let count = |s: OrderStatus| orders.iter().filter(|o| o.status == s).count();
        assert!(count(OrderStatus::Completed) > count(OrderStatus::Processing));
        assert!(count(OrderStatus::Processing) > count(OrderStatus::Cancelled));
        assert!(count(OrderStatus::Cancelled) > 0);
    }

    #[test]
    fn test_same_seed_same_data() {
        assert_eq!(sample(50), sample(50));
    }

    #[test]
    fn test_completed_toronto_first_page() {
        let orders = sample(500);
        let expected: Vec<&Order> = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed && o.location == StoreLocation::TorontoHub)
            .collect();

        let query = GridQuery::new()
            .with_filter(OrderField::Status, FilterValue::Equals("Completed".into()))
            .with_filter(OrderField::Location, FilterValue::Equals("Toronto Hub".into()))
            .with_page_size(15);
        let page = compute(&orders, &query);

        assert_eq!(page.total_matched, expected.len());
        assert_eq!(page.current_page, 1);
        assert_eq!(page.rows.len(), expected.len().min(15));
        assert_eq!(page.rows, expected[..page.rows.len()].to_vec());
        assert!(page.rows.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_zero_history_window() {
        let mut rng = StdRng::seed_from_u64(7);
        let orders = generate_orders(&mut rng, 5, now(), 0);
        assert!(orders.iter().all(|o| o.date == now()));
    }
}
