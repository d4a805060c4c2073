// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Configuration formats and read/write support

#[cfg(feature = "serde")]
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;
use thiserror::Error;

/// Configuration read/write/format errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[cfg(feature = "json")]
    #[error("config (de)serialisation to JSON failed")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("config deserialisation from TOML failed")]
    TomlDe(#[from] toml::de::Error),

    #[cfg(feature = "toml")]
    #[error("config serialisation to TOML failed")]
    TomlSer(#[from] toml::ser::Error),

    #[error("error reading / writing config file")]
    IoError(#[from] std::io::Error),

    #[error("format not supported: {0}")]
    UnsupportedFormat(Format),
}

/// Configuration serialisation formats
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Error)]
pub enum Format {
    /// Not specified: guess from the path
    #[default]
    #[error("no format")]
    None,

    /// JavaScript Object Notation
    #[error("JSON")]
    Json,

    /// Tom's Obvious Minimal Language
    #[error("TOML")]
    Toml,

    /// Error: unable to guess format
    #[error("(unknown format)")]
    Unknown,
}

impl Format {
    /// Guess format from the path name
    ///
    /// This does not open the file.
    ///
    /// Potentially fallible: on error, returns [`Format::Unknown`].
    pub fn guess_from_path(path: &Path) -> Format {
        // use == since there is no OsStr literal
        match path.extension() {
            Some(ext) if ext == "json" => Format::Json,
            Some(ext) if ext == "toml" => Format::Toml,
            _ => Format::Unknown,
        }
    }

    /// Parse from a string
    #[cfg(feature = "serde")]
    pub fn read_str<T: DeserializeOwned>(self, text: &str) -> Result<T, FormatError> {
        match self {
            #[cfg(feature = "json")]
            Format::Json => Ok(serde_json::from_str(text)?),
            #[cfg(feature = "toml")]
            Format::Toml => Ok(toml::from_str(text)?),
            _ => {
                let _ = text; // squelch unused warning
                Err(FormatError::UnsupportedFormat(self))
            }
        }
    }

    /// Serialise to a string
    #[cfg(feature = "serde")]
    pub fn write_string<T: Serialize>(self, value: &T) -> Result<String, FormatError> {
        match self {
            #[cfg(feature = "json")]
            Format::Json => Ok(serde_json::to_string_pretty(value)?),
            #[cfg(feature = "toml")]
            Format::Toml => Ok(toml::to_string(value)?),
            _ => {
                let _ = value; // squelch unused warning
                Err(FormatError::UnsupportedFormat(self))
            }
        }
    }

    /// Read from a path
    #[cfg(feature = "serde")]
    pub fn read_path<T: DeserializeOwned>(self, path: &Path) -> Result<T, FormatError> {
        log::info!("read_path: path={}, format={:?}", path.display(), self);
        let contents = std::fs::read_to_string(path)?;
        self.read_str(&contents)
    }

    /// Write to a path
    #[cfg(feature = "serde")]
    pub fn write_path<T: Serialize>(self, path: &Path, value: &T) -> Result<(), FormatError> {
        log::info!("write_path: path={}, format={:?}", path.display(), self);
        // Serialise fully before touching the file, so that failure does not
        // leave an incomplete document behind.
        let text = self.write_string(value)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Guess format and load from a path
    #[cfg(feature = "serde")]
    #[inline]
    pub fn guess_and_read_path<T: DeserializeOwned>(path: &Path) -> Result<T, FormatError> {
        let format = Self::guess_from_path(path);
        format.read_path(path)
    }

    /// Guess format and write to a path
    #[cfg(feature = "serde")]
    #[inline]
    pub fn guess_and_write_path<T: Serialize>(path: &Path, value: &T) -> Result<(), FormatError> {
        let format = Self::guess_from_path(path);
        format.write_path(path, value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn guess() {
        assert_eq!(Format::guess_from_path(Path::new("a/b.json")), Format::Json);
        assert_eq!(Format::guess_from_path(Path::new("layout.toml")), Format::Toml);
        assert_eq!(Format::guess_from_path(Path::new("layout.yaml")), Format::Unknown);
        assert_eq!(Format::guess_from_path(Path::new("layout")), Format::Unknown);
    }
}
