use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::app::DummylogError;

/// Output format of an emitted message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = DummylogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(DummylogError::UnknownFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_formats() {
        assert_eq!("text".parse::<Format>().unwrap(), Format::Text);
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = "xml".parse::<Format>().unwrap_err();
        assert!(matches!(err, DummylogError::UnknownFormat(ref f) if f == "xml"));
        assert_eq!(err.to_string(), "unknown format: xml");

        // Matching is exact, like the command line flag
        assert!("JSON".parse::<Format>().is_err());
        assert!("".parse::<Format>().is_err());
    }

    #[test]
    fn test_display_round_trips_names() {
        assert_eq!(Format::Text.to_string(), "text");
        assert_eq!(Format::Json.to_string(), "json");
        assert_eq!(Format::default(), Format::Text);
    }
}
