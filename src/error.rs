// SPDX-License-Identifier: MPL-2.0
//! Error taxonomy for the launcher and the settings layer. The samples
//! themselves have no recoverable failures.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Reading or writing the settings file failed.
    Io(String),
    /// The settings file exists but could not be serialized or parsed.
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(message) => write!(f, "settings I/O failed: {message}"),
            Error::Config(message) => write!(f, "settings are invalid: {message}"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
