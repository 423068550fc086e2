// SPDX-License-Identifier: MPL-2.0
//! Errors of the settings file layer.
//!
//! The notification core never fails: stale ids and unknown names are
//! tolerated as no-ops, so this type only travels through [`crate::config`].

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The settings file or its directory could not be read or written.
    Io(std::io::Error),
    /// The settings file is not valid TOML or has fields of the wrong type.
    Parse(toml::de::Error),
    /// The settings could not be encoded as TOML.
    Encode(toml::ser::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "settings file not accessible: {err}"),
            Error::Parse(err) => write!(f, "settings file is malformed: {err}"),
            Error::Encode(err) => write!(f, "settings could not be encoded: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Encode(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Encode(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
