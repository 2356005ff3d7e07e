// Catalog: tool records, loading/validation, and the swappable in-memory snapshot.

pub mod handlers;
pub mod loader;
pub mod models;
pub mod store;
