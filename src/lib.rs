//! This crate contains the cost model used to break paragraphs into lines.
//!
//! Given the geometry of a candidate line, it computes the adjustment
//! ratio, the badness, the demerits and the fitness class that an optimal
//! line breaking search needs to pick the best set of breakpoints.

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod config;
pub mod linebreak;
pub mod timings;


use std::{error, fmt, io, result};

use crate::config::SettingsError;

macro_rules! impl_from_error {
    ($type: ty, $variant: path, $from: ty) => {
        impl From<$from> for $type {
            fn from(e: $from) -> $type {
                $variant(e)
            }
        }
    };
}

/// The error type of the library.
#[derive(Debug)]
pub enum Error {
    /// Cannot read current directory.
    CannotReadCurrentDir,

    /// No linecost.toml was found.
    NoConfigFile,

    /// The settings file could not be parsed.
    TomlDeError(toml::de::Error),

    /// The settings could not be written as toml.
    TomlSerError(toml::ser::Error),

    /// The settings are not consistent.
    InvalidSettings(SettingsError),

    /// A command line argument could not be understood.
    InvalidArgument {
        /// The name of the argument.
        name: String,

        /// The value that was given.
        value: String,
    },

    /// Another io error occured.
    IoError(io::Error),
}

impl_from_error!(Error, Error::TomlDeError, toml::de::Error);
impl_from_error!(Error, Error::TomlSerError, toml::ser::Error);
impl_from_error!(Error, Error::InvalidSettings, SettingsError);
impl_from_error!(Error, Error::IoError, io::Error);

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::CannotReadCurrentDir => write!(fmt, "cannot read current directory"),
            Error::NoConfigFile => write!(fmt, "no linecost.toml was found"),
            Error::TomlDeError(e) => write!(fmt, "cannot parse settings: {}", e),
            Error::TomlSerError(e) => write!(fmt, "cannot write settings: {}", e),
            Error::InvalidSettings(e) => write!(fmt, "invalid settings: {}", e),
            Error::InvalidArgument { name, value } => {
                write!(fmt, "invalid value \"{}\" for argument --{}", value, name)
            }
            Error::IoError(e) => write!(fmt, "an io error occured: {}", e),
        }
    }
}

impl error::Error for Error {}

/// The result type of the library.
pub type Result<T> = result::Result<T, Error>;
