//! Kernel utilities shared by the service crates and the composition root.
//! Keep this crate lightweight: config loading, the resolved [`container::ServiceContainer`],
//! and a re-export of the domain types so service crates need a single dependency.
//!
//! ## Container verification
//! ```rust
//! use reviewer_kernel::container::ServiceContainer;
//! use reviewer_kernel::domain::registry::ServiceRegistry;
//!
//! let container = ServiceContainer::builder().build();
//! assert!(container.is_empty());
//! assert!(container.verify(ServiceRegistry::list()).is_err());
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use reviewer_kernel::config::load_config;
//! use reviewer_kernel::domain::config::ReviewerConfig;
//!
//! let cfg: ReviewerConfig = load_config(Some("reviewer.toml"))?;
//! ```
pub mod config;
pub mod container;

pub use reviewer_domain as domain;
