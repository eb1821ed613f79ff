//! Resolution engine.
//!
//! Three read-only passes over a [`Catalog`](crate::catalog::Catalog), each
//! taking the platform key as a plain string:
//!
//! - [`availability`] - which listed package managers are installed
//! - [`tags`] - which tags a package manager can reach
//! - [`commands`] - which install commands a tag selection resolves to
//!
//! Any platform key other than `darwin`, `windows` or `linux` resolves to
//! empty results, as do unknown managers and empty tag selections.
//!
//! # Example
//!
//! ```
//! use yugo::catalog::parse_catalog;
//! use yugo::resolver::{commands_for, list_available_managers, tags_for_manager};
//! use std::path::Path;
//!
//! let catalog = parse_catalog(r#"
//! package_managers:
//!   linux:
//!     - name: apt
//!       check_cmd: "true"
//! programs:
//!   git:
//!     tags: [dev]
//!     installs:
//!       linux:
//!         apt: apt install git
//! "#, Path::new("config.yaml")).unwrap();
//!
//! let always_present = |_: &str| true;
//! assert_eq!(list_available_managers(&catalog, "linux", &always_present), vec!["apt"]);
//! assert_eq!(tags_for_manager(&catalog, "linux", "apt"), vec!["dev"]);
//! assert_eq!(commands_for(&catalog, "linux", "apt", &["dev"]), vec!["apt install git"]);
//! ```

pub mod availability;
pub mod commands;
pub mod order;
pub mod tags;

pub use availability::{
    available_names, list_available_managers, probe_managers, probe_managers_parallel,
    ManagerProbe, ProbeOutcome, ProbeStatus,
};
pub use commands::{commands_for, plan_installs, PlannedInstall};
pub use order::Order;
pub use tags::tags_for_manager;
