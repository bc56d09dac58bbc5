//! The imperative shell: registry operations over the workflow core.
//!
//! Everything here runs as request/response calls against the store seam;
//! concurrency comes only from simultaneous external callers, and the
//! store's transaction contract keeps them serialized.

pub mod filter;
pub mod service;

pub use filter::Worklist;
pub use service::Registry;
