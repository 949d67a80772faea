use super::role::Role;

/// Returns true when `role` is listed in `required_roles`.
///
/// A resource with no listed roles is unreachable for everyone.
pub fn is_allowed(role: Role, required_roles: &[Role]) -> bool {
    required_roles.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_required_set_denies_everyone() {
        for role in Role::all() {
            assert!(!is_allowed(role, &[]));
        }
    }

    #[test]
    fn test_singleton_set_allows_its_role() {
        for role in Role::all() {
            assert!(is_allowed(role, &[role]));
        }
    }

    #[test]
    fn test_director_denied_president_only() {
        assert!(!is_allowed(Role::Director, &[Role::President]));
        assert!(is_allowed(Role::Director, &[Role::President, Role::Director]));
    }
}
