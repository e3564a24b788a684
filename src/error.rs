use std::fmt;

/// All fallible operations in restyle funnel through this type.
#[derive(Debug)]
pub enum RestyleError {
    Io(std::io::Error),
    Json(serde_json::Error),
    TomlDeserialize(toml::de::Error),
    TomlSerialize(toml::ser::Error),
    NoConfigDir,
    UnknownPreset(String),
    Usage(String),
}

impl fmt::Display for RestyleError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(formatter, "IO error: {error}"),
            Self::Json(error) => write!(formatter, "theme document error: {error}"),
            Self::TomlDeserialize(error) => write!(formatter, "TOML parse error: {error}"),
            Self::TomlSerialize(error) => write!(formatter, "TOML serialize error: {error}"),
            Self::NoConfigDir => write!(formatter, "could not determine config directory"),
            Self::UnknownPreset(name) => write!(formatter, "unknown theme preset: {name}"),
            Self::Usage(message) => write!(formatter, "{message}"),
        }
    }
}

impl std::error::Error for RestyleError {}

impl From<std::io::Error> for RestyleError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for RestyleError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<toml::de::Error> for RestyleError {
    fn from(error: toml::de::Error) -> Self {
        Self::TomlDeserialize(error)
    }
}

impl From<toml::ser::Error> for RestyleError {
    fn from(error: toml::ser::Error) -> Self {
        Self::TomlSerialize(error)
    }
}
