use super::access::is_allowed;
use super::role::Role;
use crate::system::navigation::AppRoute;

/// Outcome of a navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision<T> {
    /// The requested target may be entered.
    Enter(T),
    /// Navigation is denied. The caller must go to the contained target and
    /// replace the denied history entry instead of pushing a new one.
    Redirect(T),
}

impl<T> GuardDecision<T> {
    pub fn is_enter(&self) -> bool {
        matches!(self, GuardDecision::Enter(_))
    }

    pub fn target(&self) -> &T {
        match self {
            GuardDecision::Enter(t) | GuardDecision::Redirect(t) => t,
        }
    }
}

/// Decide whether `requested` may be entered by `current_role`.
///
/// Evaluated on every navigation attempt and never cached.
pub fn guard<T>(
    current_role: Role,
    required_roles: &[Role],
    requested: T,
    default_target: T,
) -> GuardDecision<T> {
    if is_allowed(current_role, required_roles) {
        GuardDecision::Enter(requested)
    } else {
        GuardDecision::Redirect(default_target)
    }
}

/// Guard an application route against the navigation table.
pub fn guard_route(current_role: Role, requested: AppRoute) -> GuardDecision<AppRoute> {
    guard(
        current_role,
        requested.required_roles(),
        requested,
        AppRoute::default_landing(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_director_redirected_from_president_only_target() {
        let decision = guard(Role::Director, &[Role::President], "/orders", "/");
        assert_eq!(decision, GuardDecision::Redirect("/"));
    }

    #[test]
    fn test_president_enters_president_only_target() {
        let decision = guard(Role::President, &[Role::President], "/orders", "/");
        assert_eq!(decision, GuardDecision::Enter("/orders"));
        assert!(decision.is_enter());
    }

    #[test]
    fn test_empty_requirements_always_redirect() {
        for role in Role::all() {
            assert_eq!(guard(role, &[], 7, 0), GuardDecision::Redirect(0));
        }
    }

    #[test]
    fn test_guard_route_uses_navigation_table() {
        assert_eq!(
            guard_route(Role::Director, AppRoute::Orders),
            GuardDecision::Redirect(AppRoute::Overview)
        );
        assert_eq!(
            guard_route(Role::Director, AppRoute::Inventory),
            GuardDecision::Enter(AppRoute::Inventory)
        );
        assert_eq!(
            guard_route(Role::President, AppRoute::Customers),
            GuardDecision::Enter(AppRoute::Customers)
        );
    }

    #[test]
    fn test_director_redirected_from_customers() {
        // страницы нет, но доступ всё равно проверяется по таблице меню
        assert_eq!(
            guard_route(Role::Director, AppRoute::Customers),
            GuardDecision::Redirect(AppRoute::Overview)
        );
    }

    #[test]
    fn test_guard_is_repeatable() {
        let first = guard_route(Role::Director, AppRoute::Orders);
        let second = guard_route(Role::Director, AppRoute::Orders);
        assert_eq!(first, second);
        assert_eq!(*first.target(), AppRoute::Overview);
    }
}
