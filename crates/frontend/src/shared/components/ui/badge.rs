use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional)]
    variant: Option<&'static str>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant.unwrap_or("neutral"))>
            {children()}
        </span>
    }
}

/// Full class list for a badge variant; unknown variants render as neutral
pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_inventory_item::StockStatus;
    use contracts::enums::OrderStatus;

    #[test]
    fn test_every_order_status_has_a_color() {
        for status in OrderStatus::all() {
            assert_ne!(badge_class(status.badge_variant()), "badge badge--neutral");
        }
    }

    #[test]
    fn test_stock_status_colors() {
        assert_eq!(badge_class(StockStatus::Healthy.badge_color()), "badge badge--success");
        assert_eq!(badge_class(StockStatus::LowStock.badge_color()), "badge badge--warning");
        assert_eq!(badge_class("unknown"), "badge badge--neutral");
    }
}
