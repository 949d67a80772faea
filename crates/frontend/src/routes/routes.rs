use crate::dashboards::d001_overview::ui::OverviewDashboard;
use crate::domain::a001_order::ui::list::OrdersList;
use crate::domain::a002_inventory_item::ui::list::InventoryList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::guard::RequireRoles;
use contracts::system::navigation::AppRoute;
use leptos::prelude::*;

#[component]
fn NotFound() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="page__content not-found">
                {icon("alert-circle")}
                <h1 class="page__title">"Page not found"</h1>
                <p>{move || format!("Nothing is registered at {}", ctx.path.get())}</p>
                <button class="pagination-btn" on:click=move |_| ctx.navigate(AppRoute::default_landing().path())>
                    "Back to Overview"
                </button>
            </div>
        </PageFrame>
    }
}

/// Page for the current location, every registered route behind its guard
#[component]
fn RoutedPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let route = Memo::new(move |_| ctx.current_route());

    move || match route.get() {
        Some(AppRoute::Overview) => view! {
            <RequireRoles route=AppRoute::Overview>
                <OverviewDashboard />
            </RequireRoles>
        }
        .into_any(),
        Some(AppRoute::Orders) => view! {
            <RequireRoles route=AppRoute::Orders>
                <OrdersList />
            </RequireRoles>
        }
        .into_any(),
        Some(AppRoute::Inventory) => view! {
            <RequireRoles route=AppRoute::Inventory>
                <InventoryList />
            </RequireRoles>
        }
        .into_any(),
        // в меню есть, страницы пока нет
        Some(AppRoute::Customers) => view! {
            <RequireRoles route=AppRoute::Customers>
                <NotFound />
            </RequireRoles>
        }
        .into_any(),
        None => view! { <NotFound /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <RoutedPage /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
