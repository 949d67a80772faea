//! TopHeader component - application top bar.
//!
//! Contains the sidebar toggle, the current page title and the role switcher.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_role;
use contracts::system::auth::Role;
use contracts::system::navigation::NAVIGATION;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let role_ctx = use_role();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    let page_title = move || {
        ctx.current_route()
            .and_then(|route| NAVIGATION.iter().find(|entry| entry.route == route))
            .map(|entry| entry.name)
            .unwrap_or("Not Found")
    };

    let on_role_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match value.parse::<Role>() {
            Ok(role) => role_ctx.switch_role(role),
            Err(e) => log::warn!("{}", e),
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() { icon("x") } else { icon("menu") }}
                </button>
                <span class="top-header__title">{page_title}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("shield")}
                    <select
                        class="top-header__role-select"
                        on:change=on_role_change
                        prop:value=move || role_ctx.role.get().code()
                    >
                        {Role::all().into_iter().map(|role| {
                            view! {
                                <option value=role.code() selected=move || role_ctx.role.get() == role>
                                    {role.code()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>
        </div>
    }
}
