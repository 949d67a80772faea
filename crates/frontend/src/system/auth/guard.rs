use contracts::system::auth::{guard_route, GuardDecision};
use contracts::system::navigation::AppRoute;
use leptos::prelude::*;

use super::context::use_role;
use crate::layout::global_context::AppGlobalContext;

/// Renders `children` only while the current role may enter `route`.
///
/// The decision is re-evaluated whenever the role changes; a denied role is
/// sent to the default landing page with a history replace.
#[component]
pub fn RequireRoles(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let role_ctx = use_role();

    let decision = Memo::new(move |_| guard_route(role_ctx.role.get(), route));

    Effect::new(move |_| {
        if let GuardDecision::Redirect(target) = decision.get() {
            log::warn!(
                "{} may not enter {}, redirecting to {}",
                role_ctx.role.get_untracked(),
                route.path(),
                target.path()
            );
            ctx.redirect(target.path());
        }
    });

    view! {
        <Show when=move || decision.get().is_enter()>
            {children()}
        </Show>
    }
}
