//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `sqlite` - SQLite persistence via sqlx
//! - `memory` - In-memory store for tests and embedding
//! - `seed` - Loading of the packaged or configured seed documents

pub mod memory;
pub mod seed;
pub mod sqlite;

pub use memory::InMemoryPreferenceStore;
pub use seed::{SeedData, SeedError};
pub use sqlite::{SqlitePreferenceReader, SqlitePreferenceRepository, SqlitePreferenceSchema};
