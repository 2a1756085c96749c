use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// The three cities with a backing dataset. The city-to-file mapping is
/// fixed; arbitrary cities are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYork, City::Washington];

    /// CSV file name inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYork => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYork => "New York",
            City::Washington => "Washington",
        }
    }

    pub fn data_path(self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }

    /// Parses user input, case-insensitively. Returns `None` for anything
    /// outside the three known cities.
    pub fn parse(input: &str) -> Option<City> {
        match input.trim().to_lowercase().as_str() {
            "chicago" => Some(City::Chicago),
            "new york" => Some(City::NewYork),
            "washington" => Some(City::Washington),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_cities() {
        assert_eq!(City::parse("chicago"), Some(City::Chicago));
        assert_eq!(City::parse("  New York "), Some(City::NewYork));
        assert_eq!(City::parse("WASHINGTON"), Some(City::Washington));
    }

    #[test]
    fn test_parse_unknown_city() {
        assert_eq!(City::parse("boston"), None);
        assert_eq!(City::parse(""), None);
    }

    #[test]
    fn test_data_path_joins_file_name() {
        let path = City::NewYork.data_path(Path::new("data"));
        assert_eq!(path, PathBuf::from("data/new_york_city.csv"));
    }
}
