//! Domain layer.
//!
//! - `foundation` - identifiers, caller identity, error vocabulary
//! - `preference` - definitions, groups, scope precedence, group tree

pub mod foundation;
pub mod preference;
