use contracts::system::auth::{Role, RoleStore};
use leptos::prelude::*;

use super::storage::LocalStorage;

/// Current role for the whole component tree.
///
/// `role` is the reactive view of the store; every switch goes through the
/// store first so localStorage and the UI never disagree.
#[derive(Clone, Copy)]
pub struct RoleContext {
    pub role: RwSignal<Role>,
    store: StoredValue<RoleStore<LocalStorage>>,
}

impl RoleContext {
    /// Restore the role persisted under `storage_key`
    pub fn load(storage_key: &str) -> Self {
        let store = RoleStore::load(LocalStorage, storage_key);
        let role = RwSignal::new(store.get());
        Self {
            role,
            store: StoredValue::new(store),
        }
    }

    pub fn switch_role(&self, role: Role) {
        self.store.with_value(|store| store.set(role));
        self.role.set(role);
    }
}

/// Hook to access the role context
pub fn use_role() -> RoleContext {
    use_context::<RoleContext>().expect("RoleContext not found in component tree")
}
