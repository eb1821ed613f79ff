//! Catalog model, loading, and validation.
//!
//! The catalog is the user's declarative list of package managers and
//! programs. It is loaded once at startup and never mutated.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and parsing in [`loader`]
//! - Consistency checks in [`validator`]
//!
//! # Example
//!
//! ```
//! use yugo::catalog::parse_catalog;
//! use std::path::Path;
//!
//! let yaml = r#"
//! package_managers:
//!   linux:
//!     - name: apt
//!       check_cmd: apt --version
//! programs:
//!   git:
//!     description: Version control
//!     tags: [dev]
//!     installs:
//!       linux:
//!         apt: sudo apt install -y git
//! "#;
//!
//! let catalog = parse_catalog(yaml, Path::new("config.yaml")).unwrap();
//! assert!(catalog.has_managers_for("linux"));
//! assert!(!catalog.has_managers_for("windows"));
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    default_catalog_dir, discover_catalog, load_catalog, load_catalog_file, parse_catalog,
    parse_catalog_json, resolve_catalog_path, CATALOG_FILE_NAMES,
};
pub use schema::{Catalog, PackageManager, Platform, Program};
pub use validator::{validate_catalog, ValidationIssue};
