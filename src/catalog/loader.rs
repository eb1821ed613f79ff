//! Catalog file discovery and loading.
//!
//! The catalog lives at `~/.config/yugo/config.yaml` by default. An
//! explicit path (from `--config` or `YUGO_CONFIG`) skips discovery.

use crate::catalog::schema::Catalog;
use crate::error::{Result, YugoError};
use std::fs;
use std::path::{Path, PathBuf};

/// File names tried in the catalog directory, in order.
pub const CATALOG_FILE_NAMES: &[&str] = &["config.yaml", "config.yml", "config.json"];

/// Directory holding the user's catalog: `~/.config/yugo`.
pub fn default_catalog_dir() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".config").join("yugo"))
}

/// Find the first existing catalog file in a directory.
pub fn discover_catalog(dir: &Path) -> Option<PathBuf> {
    CATALOG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Resolve which catalog file to load.
///
/// An explicit path is returned as-is (existence is checked on load).
/// Otherwise the default directory is searched; when nothing is found the
/// error names the primary default location.
pub fn resolve_catalog_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let dir = default_catalog_dir().ok_or_else(|| YugoError::CatalogNotFound {
        path: PathBuf::from("~/.config/yugo/config.yaml"),
    })?;

    discover_catalog(&dir).ok_or_else(|| YugoError::CatalogNotFound {
        path: dir.join(CATALOG_FILE_NAMES[0]),
    })
}

/// Load and parse a catalog file.
///
/// `.json` files are parsed as JSON, everything else as YAML.
///
/// # Errors
///
/// Returns `CatalogNotFound` if the file doesn't exist.
/// Returns `CatalogParseError` if the content is malformed.
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            YugoError::CatalogNotFound {
                path: path.to_path_buf(),
            }
        } else {
            YugoError::Io(e)
        }
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let catalog = if is_json {
        parse_catalog_json(&content, path)?
    } else {
        parse_catalog(&content, path)?
    };

    tracing::debug!(
        path = %path.display(),
        programs = catalog.programs.len(),
        platforms = catalog.package_managers.len(),
        "Loaded catalog"
    );

    Ok(catalog)
}

/// Parse YAML content into a Catalog.
///
/// `source_path` is only used for error reporting. An empty document is an
/// empty catalog.
pub fn parse_catalog(content: &str, source_path: &Path) -> Result<Catalog> {
    if content.trim().is_empty() {
        return Ok(Catalog::default());
    }
    serde_yaml::from_str(content).map_err(|e| YugoError::CatalogParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse JSON content into a Catalog.
pub fn parse_catalog_json(content: &str, source_path: &Path) -> Result<Catalog> {
    serde_json::from_str(content).map_err(|e| YugoError::CatalogParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the catalog path and load it.
pub fn load_catalog(explicit: Option<&Path>) -> Result<(PathBuf, Catalog)> {
    let path = resolve_catalog_path(explicit)?;
    let catalog = load_catalog_file(&path)?;
    Ok((path, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CATALOG_YAML: &str = r#"
package_managers:
  linux:
    - name: apt
      check_cmd: apt --version
programs:
  git:
    description: Version control
    tags: [dev]
    installs:
      linux:
        apt: sudo apt install -y git
"#;

    #[test]
    fn parse_catalog_reads_yaml() {
        let catalog = parse_catalog(CATALOG_YAML, Path::new("config.yaml")).unwrap();
        assert_eq!(catalog.managers_for("linux")[0].name, "apt");
        assert_eq!(
            catalog.programs["git"].install_command("linux", "apt"),
            Some("sudo apt install -y git")
        );
    }

    #[test]
    fn parse_catalog_empty_document() {
        let catalog = parse_catalog("   \n", Path::new("config.yaml")).unwrap();
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn parse_catalog_reports_path_on_error() {
        let err = parse_catalog("programs: [", Path::new("/tmp/broken.yaml")).unwrap_err();
        match err {
            YugoError::CatalogParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("/tmp/broken.yaml"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_catalog_rejects_wrong_shape() {
        let yaml = "package_managers:\n  linux: apt\n";
        assert!(parse_catalog(yaml, Path::new("c.yaml")).is_err());
    }

    #[test]
    fn load_catalog_file_missing() {
        let temp = TempDir::new().unwrap();
        let err = load_catalog_file(&temp.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, YugoError::CatalogNotFound { .. }));
    }

    #[test]
    fn load_catalog_file_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(
            &path,
            r#"{
  "package_managers": {"darwin": [{"name": "brew", "check_cmd": "brew --version"}]},
  "programs": {"wget": {"description": "", "tags": ["net"], "installs": {"darwin": {"brew": "brew install wget"}}}}
}"#,
        )
        .unwrap();

        let catalog = load_catalog_file(&path).unwrap();
        assert!(catalog.has_managers_for("darwin"));
        assert_eq!(catalog.programs["wget"].tags, vec!["net"]);
    }

    #[test]
    fn parse_catalog_rejects_repeated_program() {
        let yaml = r#"
programs:
  vim:
    tags: [dev]
    installs:
      linux:
        apt: apt install vim
  vim:
    tags: [dev]
    installs:
      linux:
        apt: rm -rf ~/scratch
"#;
        let err = parse_catalog(yaml, Path::new("config.yaml")).unwrap_err();
        match err {
            YugoError::CatalogParseError { path, message } => {
                assert_eq!(path, PathBuf::from("config.yaml"));
                assert!(message.contains("duplicate key `vim`"), "{message}");
            }
            other => panic!("Expected CatalogParseError, got {other:?}"),
        }
    }

    #[test]
    fn parse_catalog_rejects_repeated_install_command() {
        let yaml = r#"
programs:
  vim:
    tags: [dev]
    installs:
      linux:
        apt: apt install vim
        apt: apt install neovim
"#;
        let err = parse_catalog(yaml, Path::new("config.yaml")).unwrap_err();
        assert!(matches!(err, YugoError::CatalogParseError { ref message, .. } if message.contains("duplicate key `apt`")));
    }

    #[test]
    fn parse_catalog_rejects_repeated_platform() {
        let yaml = r#"
package_managers:
  linux:
    - name: apt
      check_cmd: apt --version
  linux:
    - name: snap
      check_cmd: snap --version
"#;
        let err = parse_catalog(yaml, Path::new("config.yaml")).unwrap_err();
        assert!(err.to_string().contains("duplicate key `linux`"));
    }

    #[test]
    fn parse_catalog_json_rejects_repeated_keys() {
        let programs = r#"{"programs": {"vim": {"tags": ["dev"]}, "vim": {"tags": ["x"]}}}"#;
        let err = parse_catalog_json(programs, Path::new("config.json")).unwrap_err();
        assert!(matches!(err, YugoError::CatalogParseError { ref message, .. } if message.contains("duplicate key `vim`")));

        let installs = r#"{"programs": {"vim": {"installs": {"linux": {"apt": "a", "apt": "b"}}}}}"#;
        let err = parse_catalog_json(installs, Path::new("config.json")).unwrap_err();
        assert!(err.to_string().contains("duplicate key `apt`"));
    }

    #[test]
    fn load_catalog_file_rejects_repeated_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(
            &path,
            r#"{"programs": {"git": {"tags": ["dev"]}, "git": {"tags": ["dev"]}}}"#,
        )
        .unwrap();

        let err = load_catalog_file(&path).unwrap_err();
        assert!(matches!(err, YugoError::CatalogParseError { .. }));
    }

    #[test]
    fn discover_catalog_prefers_yaml() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), "{}").unwrap();
        fs::write(temp.path().join("config.yaml"), "{}").unwrap();

        let found = discover_catalog(temp.path()).unwrap();
        assert!(found.ends_with("config.yaml"));
    }

    #[test]
    fn discover_catalog_falls_back_to_json() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), "{}").unwrap();

        let found = discover_catalog(temp.path()).unwrap();
        assert!(found.ends_with("config.json"));
    }

    #[test]
    fn discover_catalog_empty_dir() {
        let temp = TempDir::new().unwrap();
        assert!(discover_catalog(temp.path()).is_none());
    }

    #[test]
    fn resolve_catalog_path_uses_explicit() {
        let path = resolve_catalog_path(Some(Path::new("/etc/yugo.yaml"))).unwrap();
        assert_eq!(path, PathBuf::from("/etc/yugo.yaml"));
    }

    #[test]
    fn load_catalog_with_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.yaml");
        fs::write(&path, CATALOG_YAML).unwrap();

        let (loaded_from, catalog) = load_catalog(Some(&path)).unwrap();
        assert_eq!(loaded_from, path);
        assert!(catalog.programs.contains_key("git"));
    }
}
