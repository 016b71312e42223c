//! Workflow Scripts
//!
//! Each workflow is one fixed sequence: inspect the repository state, show
//! it to the user, ask for confirmation, act, report. The first failure in
//! any phase ends the run; already-applied steps stay applied (no rollback).
//!
//! Nothing-to-do states and a declined confirmation are not failures - the
//! workflow prints a message and returns `Ok`, so the process exits 0.

pub mod clear_failed_actions;
pub mod fast_push;
pub mod hard_clear;
pub mod update_submodule;

pub use clear_failed_actions::clear_failed_actions;
pub use fast_push::fast_push;
pub use hard_clear::hard_clear;
pub use update_submodule::update_submodule;
