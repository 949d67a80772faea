use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::RoleContext;
use contracts::shared::config::{load_config, DashboardConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("embedded configuration is invalid, using defaults: {}", e);
        DashboardConfig::default()
    });

    // Role is restored from localStorage before the first render
    provide_context(RoleContext::load(&config.auth.storage_key));
    provide_context(AppGlobalContext::new());
    provide_context(config);

    view! {
        <AppRoutes />
    }
}

/// Hook to access the loaded configuration
pub fn use_config() -> DashboardConfig {
    use_context::<DashboardConfig>().expect("DashboardConfig not found in component tree")
}
