use crate::shared::icons::icon;
use leptos::prelude::*;

/// Growth label, e.g. `+7.4% from last month`
pub fn growth_label(pct: f64) -> String {
    let sign = if pct >= 0.0 { "+" } else { "-" };
    format!("{}{:.1}% from last month", sign, pct.abs())
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value (None = loading)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Change % relative to previous period
    #[prop(into, optional)]
    change_percent: Signal<Option<f64>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "\u{2014}".to_string());

    let change_view = move || {
        change_percent.get().map(|pct| {
            let cls = if pct >= 0.0 {
                "stat-card__change stat-card__change--up"
            } else {
                "stat-card__change stat-card__change--down"
            };
            view! {
                <div class=cls>
                    {icon("trending-up")}
                    <span>{growth_label(pct)}</span>
                </div>
            }
        })
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {change_view}
                {subtitle_view}
            </div>
        </div>
    }
}
