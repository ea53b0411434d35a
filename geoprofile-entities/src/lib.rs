#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # geoprofile-entities
//!
//! Reusable, agnostic domain entities for geoprofile.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod email;
pub mod geo;
pub mod identity;
pub mod profile;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
