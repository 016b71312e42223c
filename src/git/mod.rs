//! Git Repository Module
//!
//! Repository-level helpers shared by the workflows: detection of the
//! enclosing repository and resolution of its top-level path.

pub mod repository;

pub use repository::*;
