mod state;

use chrono::Utc;
use contracts::domain::a001_order::{generate_orders, Order, OrderField};
use contracts::enums::{OrderStatus, StoreLocation};
use contracts::shared::grid::{compute, FilterValue, GridPage, FILTER_ALL};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

use crate::app::use_config;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

const TABLE_ID: &str = "a001-order-table";

/// Выпадающий фильтр с вариантом "All"
#[component]
fn FilterSelect(
    label: &'static str,
    options: Vec<&'static str>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter-select">
            <span class="filter-select__label">{label}</span>
            <select
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
            >
                <option value=FILTER_ALL>{FILTER_ALL}</option>
                {options.into_iter().map(|code| {
                    view! { <option value=code>{code}</option> }
                }).collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn OrdersList() -> impl IntoView {
    let config = use_config().orders;
    let state = create_state(config.page_size);
    let all_orders: RwSignal<Vec<Order>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(true);

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            // имитация задержки источника данных
            TimeoutFuture::new(config.latency_ms).await;
            let mut rng = rand::thread_rng();
            let orders = generate_orders(
                &mut rng,
                config.record_count,
                Utc::now(),
                config.history_days,
            );
            log::info!("Loaded {} orders", orders.len());
            all_orders.set(orders);
            state.update(|s| s.is_loaded = true);
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    // Страница всегда пересчитывается целиком из (заказы, запрос)
    let page: Memo<GridPage<Order>> = Memo::new(move |_| {
        let query = state.with(|s| s.grid.query());
        all_orders.with(|orders| compute(orders, &query).cloned())
    });

    // Держим номер страницы в state равным фактически показанной
    Effect::new(move |_| {
        let shown = page.get();
        let stale = state.with_untracked(|s| s.grid.page != shown.current_page as i64);
        if stale {
            state.update(|s| s.grid.sync_page(&shown));
        }
    });

    let search_value = Signal::derive(move || state.with(|s| s.grid.search_text.clone()));
    let on_search = Callback::new(move |text: String| {
        state.update(|s| s.grid.set_search(text));
    });

    let filter_value = move |field: OrderField| {
        Signal::derive(move || state.with(|s| s.grid.filter(field).as_select().to_string()))
    };
    let on_filter = move |field: OrderField| {
        Callback::new(move |value: String| {
            state.update(|s| s.grid.set_filter(field, FilterValue::from_select(&value)));
        })
    };

    let sort_state = move |field: OrderField| {
        Signal::derive(move || state.with(|s| s.grid.sort_state_of(field)))
    };
    let on_sort = move |field: OrderField| {
        Callback::new(move |_: ()| state.update(|s| s.grid.toggle_sort(field)))
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.grid.set_page(page as i64));
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.grid.set_page_size(size as i64));
    };

    view! {
        <PageFrame page_id="a001_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Order Management"</h1>
                    <Badge variant="primary">
                        {move || page.get().total_matched.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <span class="page__subtitle">"Real-time transaction log across all hubs."</span>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Filters"</span>
                        </div>
                    </div>
                    <div class="filter-panel-content">
                        <SearchInput
                            value=search_value
                            on_change=on_search
                            placeholder="Search by ID, name or email..."
                        />
                        <FilterSelect
                            label="Status"
                            options=OrderStatus::all().iter().map(|s| s.code()).collect()
                            value=filter_value(OrderField::Status)
                            on_change=on_filter(OrderField::Status)
                        />
                        <FilterSelect
                            label="Hub"
                            options=StoreLocation::all().iter().map(|l| l.code()).collect()
                            value=filter_value(OrderField::Location)
                            on_change=on_filter(OrderField::Location)
                        />
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id=TABLE_ID attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell
                                    label=OrderField::Id.label()
                                    sort_state=sort_state(OrderField::Id)
                                    on_sort=on_sort(OrderField::Id)
                                    min_width=110.0
                                />
                                <TableHeaderCell min_width=200.0>{OrderField::CustomerName.label()}</TableHeaderCell>
                                <SortableHeaderCell
                                    label=OrderField::Location.label()
                                    sort_state=sort_state(OrderField::Location)
                                    on_sort=on_sort(OrderField::Location)
                                    min_width=130.0
                                />
                                <SortableHeaderCell
                                    label=OrderField::Date.label()
                                    sort_state=sort_state(OrderField::Date)
                                    on_sort=on_sort(OrderField::Date)
                                    min_width=120.0
                                />
                                <SortableHeaderCell
                                    label=OrderField::Total.label()
                                    sort_state=sort_state(OrderField::Total)
                                    on_sort=on_sort(OrderField::Total)
                                    min_width=100.0
                                    align="right"
                                />
                                <TableHeaderCell min_width=110.0>{OrderField::Status.label()}</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <Show
                                when=move || !loading.get()
                                fallback=|| view! {
                                    <TableRow>
                                        <TableCell attr:colspan="6">
                                            <TableCellLayout>"Loading orders..."</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            >
                                <Show
                                    when=move || !page.with(|p| p.is_empty())
                                    fallback=|| view! {
                                        <TableRow>
                                            <TableCell attr:colspan="6">
                                                <TableCellLayout>"No orders match the current filters."</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                >
                                    <For
                                        each=move || page.get().rows
                                        key=|o| o.id.clone()
                                        children=move |order| {
                                            let id = order.id.clone();
                                            let name = order.customer_name.clone();
                                            let email = order.customer_email.clone();
                                            let location = order.location.code();
                                            let date = order.formatted_date();
                                            let total = order.formatted_total();
                                            let status = order.status;
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class="table__mono">{id}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            <div class="table__primary">{name}</div>
                                                            <div class="table__secondary">{email}</div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{location}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{date}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class="table__money">{total}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <Badge variant=status.badge_variant()>
                                                                {status.code()}
                                                            </Badge>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }
                                    />
                                </Show>
                            </Show>
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || page.get().current_page)
                    total_pages=Signal::derive(move || page.get().display_total_pages())
                    total_count=Signal::derive(move || page.get().total_matched)
                    showing=Signal::derive(move || page.get().showing_range())
                    page_size=Signal::derive(move || page.get().page_size)
                    has_previous=Signal::derive(move || page.with(|p| p.has_previous()))
                    has_next=Signal::derive(move || page.with(|p| p.has_next()))
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                />
            </div>
        </PageFrame>
    }
}
