//! Catalog schema definitions.
//!
//! These structs map to the catalog file format:
//!
//! ```yaml
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
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A supported operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Darwin,
    Windows,
    Linux,
}

impl Platform {
    /// All supported platforms.
    pub const ALL: [Platform; 3] = [Platform::Darwin, Platform::Windows, Platform::Linux];

    /// Parse a platform key. Anything other than `darwin`, `windows` or
    /// `linux` is unsupported.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "darwin" => Some(Self::Darwin),
            "windows" => Some(Self::Windows),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }

    /// The key used for this platform in the catalog.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Darwin => "darwin",
            Self::Windows => "windows",
            Self::Linux => "linux",
        }
    }

    /// Platform of the running binary, if supported.
    pub fn current() -> Option<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "macos" => Some(Self::Darwin),
            "windows" => Some(Self::Windows),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }

    /// Check whether a key names a supported platform.
    pub fn is_supported(key: &str) -> bool {
        Self::from_key(key).is_some()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A package manager that may be present on a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManager {
    /// Identifier used as the key in each program's install map.
    pub name: String,

    /// Shell snippet that exits 0 when the manager is installed.
    #[serde(default)]
    pub check_cmd: String,
}

/// An installable program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Program {
    /// Human-readable description.
    pub description: String,

    /// Free-form labels used for batch selection.
    pub tags: Vec<String>,

    /// platform key -> package manager name -> install command
    #[serde(deserialize_with = "unique_keys::deserialize_nested")]
    pub installs: HashMap<String, HashMap<String, String>>,
}

impl Program {
    /// Install command for a platform and manager, if mapped.
    pub fn install_command(&self, platform_key: &str, manager: &str) -> Option<&str> {
        self.installs
            .get(platform_key)
            .and_then(|by_manager| by_manager.get(manager))
            .map(String::as_str)
    }

    /// Managers that can install this program on a platform, sorted.
    pub fn managers_for(&self, platform_key: &str) -> Vec<&str> {
        let mut managers: Vec<&str> = self
            .installs
            .get(platform_key)
            .map(|by_manager| by_manager.keys().map(String::as_str).collect())
            .unwrap_or_default();
        managers.sort_unstable();
        managers
    }
}

/// The loaded catalog of package managers and programs.
///
/// Programs are keyed in a `BTreeMap`, so every iteration (and therefore
/// every resolver output) is in program-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// platform key -> managers in preference order
    #[serde(deserialize_with = "unique_keys::deserialize")]
    pub package_managers: BTreeMap<String, Vec<PackageManager>>,

    /// program name -> program
    #[serde(deserialize_with = "unique_keys::deserialize")]
    pub programs: BTreeMap<String, Program>,
}

impl Catalog {
    /// Managers listed for a platform. Empty for unsupported keys.
    pub fn managers_for(&self, platform_key: &str) -> &[PackageManager] {
        if !Platform::is_supported(platform_key) {
            return &[];
        }
        self.package_managers
            .get(platform_key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check whether the catalog lists any manager for a platform.
    pub fn has_managers_for(&self, platform_key: &str) -> bool {
        !self.managers_for(platform_key).is_empty()
    }
}

/// String-keyed maps that fail to deserialize when a key repeats.
///
/// serde's own map impls keep the last value for a repeated key.
mod unique_keys {
    use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
    use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
    use std::fmt;
    use std::marker::PhantomData;

    /// A map that refuses to overwrite an existing key.
    pub(super) trait InsertNew: Default {
        type Value;

        /// Insert a new entry. Returns the key back if it was already present.
        fn insert_new(&mut self, key: String, value: Self::Value) -> Result<(), String>;
    }

    impl<V> InsertNew for BTreeMap<String, V> {
        type Value = V;

        fn insert_new(&mut self, key: String, value: V) -> Result<(), String> {
            match self.entry(key) {
                btree_map::Entry::Occupied(entry) => Err(entry.key().clone()),
                btree_map::Entry::Vacant(entry) => {
                    entry.insert(value);
                    Ok(())
                }
            }
        }
    }

    impl<V> InsertNew for HashMap<String, V> {
        type Value = V;

        fn insert_new(&mut self, key: String, value: V) -> Result<(), String> {
            match self.entry(key) {
                hash_map::Entry::Occupied(entry) => Err(entry.key().clone()),
                hash_map::Entry::Vacant(entry) => {
                    entry.insert(value);
                    Ok(())
                }
            }
        }
    }

    /// Map wrapper whose `Deserialize` rejects repeated keys.
    struct Unique<M>(M);

    impl<'de, M> Deserialize<'de> for Unique<M>
    where
        M: InsertNew,
        M::Value: Deserialize<'de>,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer
                .deserialize_map(UniqueVisitor(PhantomData))
                .map(Unique)
        }
    }

    struct UniqueVisitor<M>(PhantomData<fn() -> M>);

    impl<'de, M> Visitor<'de> for UniqueVisitor<M>
    where
        M: InsertNew,
        M::Value: Deserialize<'de>,
    {
        type Value = M;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map with unique keys")
        }

        fn visit_map<A>(self, mut access: A) -> Result<M, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut map = M::default();
            while let Some(key) = access.next_key::<String>()? {
                let value = access.next_value::<M::Value>()?;
                map.insert_new(key, value).map_err(|key| {
                    de::Error::custom(format_args!("duplicate key `{}`", key))
                })?;
            }
            Ok(map)
        }
    }

    pub(super) fn deserialize<'de, D, M>(deserializer: D) -> Result<M, D::Error>
    where
        D: Deserializer<'de>,
        M: InsertNew,
        M::Value: Deserialize<'de>,
    {
        Unique::<M>::deserialize(deserializer).map(|unique| unique.0)
    }

    /// Two levels of unique keys, as in `installs`.
    pub(super) fn deserialize_nested<'de, D, V>(
        deserializer: D,
    ) -> Result<HashMap<String, HashMap<String, V>>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        let outer: HashMap<String, Unique<HashMap<String, V>>> = deserialize(deserializer)?;
        Ok(outer
            .into_iter()
            .map(|(key, Unique(inner))| (key, inner))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_round_trips_keys() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_key(platform.key()), Some(platform));
        }
    }

    #[test]
    fn platform_rejects_unknown_keys() {
        assert_eq!(Platform::from_key("freebsd"), None);
        assert_eq!(Platform::from_key("Linux"), None);
        assert_eq!(Platform::from_key(""), None);
    }

    #[test]
    fn platform_maps_macos_to_darwin() {
        assert_eq!(Platform::from_os("macos"), Some(Platform::Darwin));
        assert_eq!(Platform::from_os("linux"), Some(Platform::Linux));
        assert_eq!(Platform::from_os("openbsd"), None);
    }

    #[test]
    fn program_parses_sparse_yaml() {
        let program: Program = serde_yaml::from_str("description: bare").unwrap();
        assert_eq!(program.description, "bare");
        assert!(program.tags.is_empty());
        assert!(program.installs.is_empty());
    }

    #[test]
    fn program_install_command_lookup() {
        let yaml = r#"
tags: [dev]
installs:
  linux:
    apt: apt install git
"#;
        let program: Program = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            program.install_command("linux", "apt"),
            Some("apt install git")
        );
        assert_eq!(program.install_command("linux", "dnf"), None);
        assert_eq!(program.install_command("darwin", "apt"), None);
    }

    #[test]
    fn program_managers_for_is_sorted() {
        let yaml = r#"
installs:
  linux:
    snap: snap install code
    apt: apt install code
"#;
        let program: Program = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(program.managers_for("linux"), vec!["apt", "snap"]);
        assert!(program.managers_for("windows").is_empty());
    }

    #[test]
    fn catalog_managers_for_unsupported_platform_is_empty() {
        let yaml = r#"
package_managers:
  haiku:
    - name: pkgman
      check_cmd: "true"
"#;
        let catalog: Catalog = serde_yaml::from_str(yaml).unwrap();
        assert!(catalog.managers_for("haiku").is_empty());
        assert!(!catalog.has_managers_for("haiku"));
    }

    #[test]
    fn catalog_has_managers_for_listed_platform() {
        let yaml = r#"
package_managers:
  darwin:
    - name: brew
      check_cmd: brew --version
"#;
        let catalog: Catalog = serde_yaml::from_str(yaml).unwrap();
        assert!(catalog.has_managers_for("darwin"));
        assert!(!catalog.has_managers_for("linux"));
    }

    #[test]
    fn repeated_program_is_rejected() {
        let yaml = r#"
programs:
  vim:
    tags: [dev]
  vim:
    tags: [x]
"#;
        let err = serde_yaml::from_str::<Catalog>(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate key `vim`"));
    }

    #[test]
    fn repeated_install_manager_is_rejected() {
        let yaml = r#"
installs:
  linux:
    apt: apt install vim
    apt: echo other
"#;
        let err = serde_yaml::from_str::<Program>(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate key `apt`"));
    }

    #[test]
    fn repeated_install_platform_is_rejected() {
        let json = r#"{"installs": {"linux": {"apt": "a"}, "linux": {"snap": "b"}}}"#;
        let err = serde_json::from_str::<Program>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate key `linux`"));
    }

    #[test]
    fn same_manager_on_two_platforms_is_allowed() {
        let yaml = r#"
installs:
  linux:
    snap: snap install code
  windows:
    snap: snap install code
"#;
        let program: Program = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(program.installs.len(), 2);
    }

    #[test]
    fn empty_catalog_parses() {
        let catalog: Catalog = serde_yaml::from_str("{}").unwrap();
        assert!(catalog.programs.is_empty());
        assert!(catalog.package_managers.is_empty());
    }
}
