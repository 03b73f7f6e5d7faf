pub mod hashmap_csrf_validator;
pub mod hashmap_user_store;
pub mod in_memory_session_store;

pub use hashmap_csrf_validator::HashMapCsrfValidator;
pub use hashmap_user_store::HashMapUserStore;
pub use in_memory_session_store::InMemorySessionStore;
