//! yugo - Batch install programs on a fresh machine.
//!
//! yugo reads a catalog of package managers and programs, detects which
//! package managers are installed, asks the user for a manager and a set of
//! tags, and runs the matching install commands.
//!
//! # Modules
//!
//! - [`catalog`] - Catalog schema, loading, and validation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`resolver`] - Available managers, reachable tags, install commands
//! - [`runner`] - Install command execution
//! - [`shell`] - Shell command execution and manager probes
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use yugo::catalog::parse_catalog;
//! use yugo::resolver::Order;
//! use std::path::Path;
//!
//! let catalog = parse_catalog(r#"
//! programs:
//!   ripgrep:
//!     tags: [cli]
//!     installs:
//!       darwin:
//!         brew: brew install ripgrep
//! "#, Path::new("config.yaml")).unwrap();
//!
//! let mut order = Order::new();
//! order.choose_manager("brew");
//! order.choose_tags(["cli"]);
//! let plan = order.plan(&catalog, "darwin");
//! assert_eq!(plan[0].command, "brew install ripgrep");
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod resolver;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{Result, YugoError};
