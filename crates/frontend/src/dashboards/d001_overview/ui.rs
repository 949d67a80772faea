use contracts::dashboards::d001_overview::{generate_dashboard, DashboardData};
use contracts::shared::number_format::{format_money, format_thousands};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

use crate::app::use_config;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::today_local;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Сколько последних дней тренда показывать в таблице
const RECENT_DAYS: usize = 7;

/// Overview dashboard: KPI, категории и последние дни тренда
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let config = use_config().overview;
    let (data, set_data) = signal(None::<DashboardData>);

    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(config.latency_ms).await;
            let mut rng = rand::thread_rng();
            let dashboard = generate_dashboard(&mut rng, today_local(), config.trend_days);
            log::info!(
                "Overview loaded: {} trend points, {} categories",
                dashboard.sales_trend.len(),
                dashboard.category_data.len()
            );
            set_data.set(Some(dashboard));
        });
    });

    let kpi = move |f: fn(&DashboardData) -> String| {
        Signal::derive(move || data.with(|d| d.as_ref().map(f)))
    };

    view! {
        <PageFrame page_id="d001_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Executive Overview"</h1>
                </div>
                <div class="page__header-right">
                    <span class="page__subtitle">
                        {format!("Last {} days across all hubs.", config.trend_days)}
                    </span>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Revenue"
                        icon_name="dollar-sign"
                        value=kpi(|d| format!("${}", format_thousands(d.total_revenue)))
                        change_percent=Signal::derive(move || data.with(|d| d.as_ref().map(|d| d.revenue_growth)))
                    />
                    <StatCard
                        label="Total Orders"
                        icon_name="shopping-bag"
                        value=kpi(|d| format_thousands(d.total_orders))
                    />
                    <StatCard
                        label="Active Hubs"
                        icon_name="store"
                        value=kpi(|d| d.active_stores.to_string())
                        subtitle=Signal::derive(|| Some("London, Toronto, Waterloo.".to_string()))
                    />
                </div>

                <Show
                    when=move || data.with(|d| d.is_some())
                    fallback=|| view! { <div class="page__loading">"Loading overview..."</div> }
                >
                    <div class="dashboard-columns">
                        <section class="dashboard-panel">
                            <h2 class="dashboard-panel__title">"Sales by Category"</h2>
                            <ul class="category-list">
                                {move || data.with(|d| {
                                    let Some(d) = d else { return Vec::new() };
                                    d.category_data.iter().map(|c| {
                                        let share = c.share_of(&d.category_data);
                                        let swatch = format!("background: {};", c.color);
                                        let name = c.name.clone();
                                        view! {
                                            <li class="category-list__item">
                                                <span class="category-list__swatch" style=swatch></span>
                                                <span class="category-list__name">{name}</span>
                                                <span class="category-list__value">{format!("{:.1}%", share)}</span>
                                            </li>
                                        }
                                    }).collect::<Vec<_>>()
                                })}
                            </ul>
                        </section>

                        <section class="dashboard-panel">
                            <h2 class="dashboard-panel__title">"Recent Days"</h2>
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Day"</TableHeaderCell>
                                        <TableHeaderCell>"Revenue"</TableHeaderCell>
                                        <TableHeaderCell>"Orders"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || data.with(|d| {
                                        let Some(d) = d else { return Vec::new() };
                                        d.sales_trend.iter().rev().take(RECENT_DAYS).map(|p| {
                                            let day = p.label();
                                            let revenue = format_money(p.revenue as f64);
                                            let orders = p.orders.to_string();
                                            view! {
                                                <TableRow>
                                                    <TableCell><TableCellLayout>{day}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{revenue}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{orders}</TableCellLayout></TableCell>
                                                </TableRow>
                                            }
                                        }).collect::<Vec<_>>()
                                    })}
                                </TableBody>
                            </Table>
                            <div class="dashboard-panel__footer">
                                {move || data.with(|d| d.as_ref().map(|d| format!(
                                    "{} orders, {} over {} days",
                                    format_thousands(d.trend_orders()),
                                    format_money(d.trend_revenue() as f64),
                                    d.sales_trend.len()
                                )))}
                            </div>
                        </section>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
