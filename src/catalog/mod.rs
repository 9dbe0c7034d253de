//! Destination catalog.
//!
//! The catalog is a static table loaded once at startup, either from the
//! table bundled with the crate or from a JSON file named in the
//! configuration. Records are never mutated after loading.

mod destination;

use std::collections::HashSet;
use std::path::Path;

pub use destination::{Category, Destination, TransportHint, UnknownCategory};

use crate::config::catalog::CatalogConfig;
use crate::error::YatraResult;

/// The bundled destination table.
const BUILTIN_TABLE: &str = include_str!("../../data/destinations.json");

/// Parses the bundled destination table.
pub fn builtin() -> YatraResult<Vec<Destination>> {
    parse(BUILTIN_TABLE)
}

/// Parses a destination table from JSON text.
pub fn parse(json: &str) -> YatraResult<Vec<Destination>> {
    let destinations: Vec<Destination> = serde_json::from_str(json)?;
    warn_on_duplicates(&destinations);
    Ok(destinations)
}

/// Reads a destination table from a JSON file.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> YatraResult<Vec<Destination>> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse(&text)
}

/// Loads the catalog named by the configuration, falling back to the
/// bundled table when no path is set.
pub fn load(config: &CatalogConfig) -> YatraResult<Vec<Destination>> {
    match &config.path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading destination catalog from file");
            load_from_path(path)
        }
        None => builtin(),
    }
}

/// Duplicate names are legal: the keyed indexes keep the last record while
/// list traversals keep both. Flag them so the overwrite is not silent.
fn warn_on_duplicates(destinations: &[Destination]) {
    let mut seen = HashSet::with_capacity(destinations.len());
    for destination in destinations {
        if !seen.insert(destination.key()) {
            tracing::warn!(name = %destination.name, "Duplicate destination name, later record wins");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_table_loads() {
        let destinations = builtin().unwrap();
        assert!(destinations.len() >= 50);

        let names: HashSet<String> = destinations.iter().map(Destination::key).collect();
        assert_eq!(names.len(), destinations.len());
        assert!(names.contains("goa"));
        assert!(names.contains("agra"));

        for destination in &destinations {
            assert!(!destination.name.is_empty());
            assert!((-90.0..=90.0).contains(&destination.location.lat));
            assert!((-180.0..=180.0).contains(&destination.location.lon));
        }
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"Tawang","state":"Arunachal Pradesh","category":"HillStation",
                "duration":"3 days","best_time":"March to October",
                "location":{{"lat":27.586,"lon":91.8594}},"popularity":75,"cost":15000}}]"#
        )
        .unwrap();

        let config = CatalogConfig {
            path: Some(file.path().to_path_buf()),
        };
        let destinations = load(&config).unwrap();
        assert_eq!(destinations.len(), 1);
        assert_eq!(destinations[0].category, Category::HillStation);
    }

    #[test]
    fn test_parse_rejects_malformed_table() {
        assert!(parse("[{\"name\": \"Goa\"}]").is_err());
        assert!(load_from_path("/nonexistent/catalog.json").is_err());
    }
}
