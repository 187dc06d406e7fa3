use serde::Serialize;
use strum_macros::Display;

/// Catalog group a TLE file belongs to, taken from the file stem. The
/// names follow the upstream CelesTrak group files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Active,
    Stations,
    Visual,
    Amateur,
    Weather,
    Gps,
    Starlink,
}

impl Category {
    pub fn from_stem(stem: &str) -> Option<Self> {
        match stem.to_ascii_lowercase().as_str() {
            "active" => Some(Category::Active),
            "stations" => Some(Category::Stations),
            "visual" => Some(Category::Visual),
            "amateur" => Some(Category::Amateur),
            "weather" => Some(Category::Weather),
            "gps" | "gps-ops" => Some(Category::Gps),
            "starlink" => Some(Category::Starlink),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_stems() {
        assert_eq!(Category::from_stem("weather"), Some(Category::Weather));
        assert_eq!(Category::from_stem("GPS-OPS"), Some(Category::Gps));
        assert_eq!(Category::from_stem("mystery"), None);
    }

    #[test]
    fn displays_lowercase() {
        assert_eq!(Category::Starlink.to_string(), "starlink");
    }
}
