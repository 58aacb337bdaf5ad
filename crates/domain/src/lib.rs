//! Relstamp Domain - release identity types
//!
//! A release is identified by four byte-sized numbers
//! (`major.revision.modification.patch`) plus optional snapshot and site
//! labels. The tuple packs into a single `u32` whose integer order matches
//! the tuple's lexicographic order. All types here are pure Rust with no I/O.

pub mod component;
pub mod current;
pub mod error;
pub mod info;
pub mod packed;
pub mod report;
pub mod tuple;

pub use component::Component;
pub use current::CURRENT;
pub use error::{DomainError, DomainResult};
pub use info::VersionInfo;
pub use packed::{PackedVersion, pack};
pub use report::VersionReport;
pub use tuple::VersionTuple;
