//! Preference Store - hierarchical user and organization preferences
//!
//! Every preference has a default declared in seed data. Organizations may
//! override it for all their members and users may override it again for
//! themselves, when the preference's scope flags allow it. Bulk listings
//! arrange the effective values into the preference group tree.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
