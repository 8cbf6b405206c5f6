//! # Domain Models
//!
//! Pure types for the reviewer service graph: the [`registry::ComponentToken`] names, the static
//! [`registry::ServiceRegistry`] manifest and the [`config::ReviewerConfig`] sections.
//! No I/O lives here; loading and wiring happen in the kernel and facade crates.

pub mod config;
pub mod registry;
