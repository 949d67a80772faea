//! Sidebar with the navigation entries visible to the current role

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_role;
use contracts::system::navigation::visible_entries;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let role_ctx = use_role();

    view! {
        <div class="app-sidebar__content">
            <div class=move || format!("app-sidebar__brand {}", role_ctx.role.get().accent_class())>
                <span class="app-sidebar__brand-mark">"N"</span>
                <span>"NOVA HQ"</span>
            </div>
            // пункты меню пересчитываются при смене роли
            {move || {
                visible_entries(role_ctx.role.get())
                    .into_iter()
                    .map(|entry| {
                        let route = entry.route;
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || ctx.current_route() == Some(route)
                                style:padding-left="12px"
                                on:click=move |_| ctx.navigate(entry.path())
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(entry.icon)}
                                    <span>{entry.name}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
