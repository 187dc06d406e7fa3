use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::Serialize;
use sgp4::{Constants, Elements};

use crate::catalog::category::Category;
use crate::catalog::error::CatalogError;

/// Catalog metadata for one satellite.
#[derive(Debug, Clone, Serialize)]
pub struct SatelliteInfo {
    pub name: String,
    pub norad_id: u32,
    pub category: Option<Category>,
    pub tle_source: String,
}

/// One satellite loaded from the TLE folder, with its parsed elements
/// and precomputed propagation constants.
pub struct TleEntry {
    pub info: SatelliteInfo,
    pub elements: Elements,
    pub constants: Constants,
}

/// File-backed satellite catalog with an age-based freshness policy:
/// the folder is rescanned when the last load is older than `max_age`.
pub struct TleStore {
    tle_dir: PathBuf,
    max_age: Duration,
    loaded_at: Option<Instant>,
    satellites: HashMap<u32, TleEntry>,
}

impl TleStore {
    pub fn new(tle_dir: PathBuf, max_age: Duration) -> Self {
        Self {
            tle_dir,
            max_age,
            loaded_at: None,
            satellites: HashMap::new(),
        }
    }

    /// Reload from disk when the catalog has never been loaded or the
    /// last scan is older than the configured maximum age.
    pub fn ensure_fresh(&mut self) -> Result<(), CatalogError> {
        let stale = match self.loaded_at {
            Some(at) => at.elapsed() > self.max_age,
            None => true,
        };
        if stale {
            self.load_all()?;
        }
        Ok(())
    }

    /// Scan the TLE folder and replace the loaded set. Files that fail
    /// to parse are logged and skipped, the rest of the scan continues.
    pub fn load_all(&mut self) -> Result<(), CatalogError> {
        if !self.tle_dir.exists() {
            return Err(CatalogError::DirectoryNotFound(
                self.tle_dir.display().to_string(),
            ));
        }

        self.satellites.clear();

        for entry in fs::read_dir(&self.tle_dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            match path.extension().and_then(|e| e.to_str()) {
                Some("tle") | Some("txt") => {}
                _ => continue,
            }

            match parse_tle_file(&path) {
                Ok(parsed) => {
                    for tle_entry in parsed {
                        self.satellites.insert(tle_entry.info.norad_id, tle_entry);
                    }
                }
                Err(e) => {
                    log::warn!("Failed to parse TLE file {}: {}", path.display(), e);
                }
            }
        }

        log::info!("Loaded {} satellites from {}", self.satellites.len(), self.tle_dir.display());
        self.loaded_at = Some(Instant::now());
        Ok(())
    }

    /// Look up a satellite by NORAD id.
    pub fn get(&self, norad_id: u32) -> Option<&TleEntry> {
        self.satellites.get(&norad_id)
    }

    /// All loaded satellites, ordered by NORAD id.
    pub fn satellites(&self) -> Vec<&TleEntry> {
        let mut all: Vec<&TleEntry> = self.satellites.values().collect();
        all.sort_by_key(|e| e.info.norad_id);
        all
    }
}

/// Parse a single TLE file, which may contain multiple satellites.
fn parse_tle_file(path: &Path) -> Result<Vec<TleEntry>, CatalogError> {
    let content = fs::read_to_string(path)?;
    let filename = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let category = path
        .file_stem()
        .and_then(|s| s.to_str())
        .and_then(Category::from_stem);

    let mut entries = Vec::new();
    for (name, line1, line2) in split_tle_groups(&content) {
        let elements = Elements::from_tle(name, line1.as_bytes(), line2.as_bytes()).map_err(
            |e| CatalogError::InvalidTle {
                file: filename.clone(),
                message: e.to_string(),
            },
        )?;
        let constants =
            Constants::from_elements(&elements).map_err(|e| CatalogError::InvalidTle {
                file: filename.clone(),
                message: e.to_string(),
            })?;

        let name = elements
            .object_name
            .clone()
            .unwrap_or_else(|| format!("NORAD {}", elements.norad_id));

        entries.push(TleEntry {
            info: SatelliteInfo {
                name,
                norad_id: elements.norad_id as u32,
                category,
                tle_source: filename.clone(),
            },
            elements,
            constants,
        });
    }

    Ok(entries)
}

/// Split TLE text into `(name, line1, line2)` groups. Accepts both the
/// 2-line and the named 3-line form; anything else is skipped.
fn split_tle_groups(content: &str) -> Vec<(Option<String>, String, String)> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut groups = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let second_is_line1 = lines.get(i + 1).is_some_and(|l| l.starts_with("1 "));
        let second_is_line2 = lines.get(i + 1).is_some_and(|l| l.starts_with("2 "));
        let third_is_line2 = lines.get(i + 2).is_some_and(|l| l.starts_with("2 "));

        if lines[i].starts_with("1 ") && second_is_line2 {
            groups.push((None, lines[i].to_string(), lines[i + 1].to_string()));
            i += 2;
        } else if second_is_line1 && third_is_line2 {
            groups.push((
                Some(lines[i].to_string()),
                lines[i + 1].to_string(),
                lines[i + 2].to_string(),
            ));
            i += 3;
        } else {
            i += 1;
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE1: &str =
        "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    const LINE2: &str =
        "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    #[test]
    fn splits_named_three_line_groups() {
        let content = format!("ISS (ZARYA)\n{}\n{}\n", LINE1, LINE2);
        let groups = split_tle_groups(&content);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0.as_deref(), Some("ISS (ZARYA)"));
        assert_eq!(groups[0].1, LINE1);
        assert_eq!(groups[0].2, LINE2);
    }

    #[test]
    fn splits_bare_two_line_groups() {
        let content = format!("{}\n{}\n", LINE1, LINE2);
        let groups = split_tle_groups(&content);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].0.is_none());
    }

    #[test]
    fn skips_junk_between_groups() {
        let content = format!("# comment\n\nISS (ZARYA)\n{}\n{}\ntrailing noise\n", LINE1, LINE2);
        let groups = split_tle_groups(&content);
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(split_tle_groups("").is_empty());
        assert!(split_tle_groups("just some text\n").is_empty());
    }
}
