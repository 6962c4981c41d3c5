//! Persistence layer: the user store contract and its implementations.

pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use memory::InMemoryUserStore;
pub use models::Credential;
pub use postgres::PgUserStore;
pub use store::{StoreError, UserStore};
