//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PreferenceReader` - Definitions, groups, and stored values (read side)
//! - `PreferenceRepository` - Scoped value upserts (write side)
//! - `PreferenceSchema` - Table creation and seed inserts for the bootstrapper

mod preference_reader;
mod preference_repository;
mod preference_schema;

pub use preference_reader::PreferenceReader;
pub use preference_repository::PreferenceRepository;
pub use preference_schema::PreferenceSchema;
