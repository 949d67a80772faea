//! Role-based access control: roles, the access policy, the route guard and
//! the persisted role store.

pub mod access;
pub mod guard;
pub mod role;
pub mod role_store;

pub use access::is_allowed;
pub use guard::{guard, guard_route, GuardDecision};
pub use role::{Role, RoleParseError};
pub use role_store::{KeyValueStore, MemoryStore, RoleStore, ROLE_STORAGE_KEY};
