use super::role::Role;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Key under which the selected role is persisted
pub const ROLE_STORAGE_KEY: &str = "nova_hq_role";

/// Scalar key-value persistence (localStorage in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        lock(&self.values).insert(key.to_string(), value.to_string());
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

/// Holds the current role and writes every switch through to the backing store.
///
/// The cached role and the persisted value change under the same lock, so a
/// reader never sees a role that was not fully set.
#[derive(Debug)]
pub struct RoleStore<S> {
    store: S,
    key: String,
    current: Mutex<Role>,
}

impl<S: KeyValueStore> RoleStore<S> {
    /// Read the persisted role once; missing or unknown values become the default role.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = Role::from_stored(store.get(&key).as_deref());
        log::debug!("role store initialized: {}", current);
        Self {
            store,
            key,
            current: Mutex::new(current),
        }
    }

    pub fn get(&self) -> Role {
        *lock(&self.current)
    }

    pub fn set(&self, role: Role) {
        let mut current = lock(&self.current);
        self.store.set(&self.key, role.code());
        *current = role;
        log::info!("role switched to {}", role);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_defaults_to_president_when_missing() {
        let store = RoleStore::load(MemoryStore::new(), ROLE_STORAGE_KEY);
        assert_eq!(store.get(), Role::President);
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let backing = MemoryStore::with_value(ROLE_STORAGE_KEY, "Intern");
        let store = RoleStore::load(backing, ROLE_STORAGE_KEY);
        assert_eq!(store.get(), Role::President);
    }

    #[test]
    fn test_reads_persisted_role() {
        let backing = MemoryStore::with_value(ROLE_STORAGE_KEY, "Director");
        let store = RoleStore::load(backing, ROLE_STORAGE_KEY);
        assert_eq!(store.get(), Role::Director);
    }

    #[test]
    fn test_set_persists_and_survives_reload() {
        let backing = MemoryStore::new();
        {
            let store = RoleStore::load(&backing, ROLE_STORAGE_KEY);
            store.set(Role::Director);
            assert_eq!(store.get(), Role::Director);
        }
        assert_eq!(
            backing.get(ROLE_STORAGE_KEY).as_deref(),
            Some("Director")
        );
        let reloaded = RoleStore::load(&backing, ROLE_STORAGE_KEY);
        assert_eq!(reloaded.get(), Role::Director);
    }

    #[test]
    fn test_concurrent_readers_only_see_set_roles() {
        let store = Arc::new(RoleStore::load(MemoryStore::new(), ROLE_STORAGE_KEY));
        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..500 {
                    let role = if i % 2 == 0 { Role::Director } else { Role::President };
                    store.set(role);
                }
            })
        };
        for _ in 0..500 {
            let seen = store.get();
            let persisted = Role::from_stored(store.store.get(ROLE_STORAGE_KEY).as_deref());
            assert!(Role::all().contains(&seen));
            assert!(Role::all().contains(&persisted));
        }
        writer.join().unwrap();
        assert_eq!(store.get(), Role::President);
        assert_eq!(
            store.store.get(ROLE_STORAGE_KEY).as_deref(),
            Some("President")
        );
    }
}
