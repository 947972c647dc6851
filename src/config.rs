//! This module defines the settings that drive the cost model. The settings
//! are parsed from a TOML file, usually named `linecost.toml` and located at
//! the root of the project, or built from the defaults provided by
//! `linebreak::constants`.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fmt, result};

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::linebreak::constants::{
    ADJACENT_LOOSE_TIGHT_PENALTY, DEMERIT_OFFSET, FITNESS_CLASSES, FLAG_PENALTY, HYPHEN_PENALTY,
    HYPHEN_PENALTY_RAGGED, MAX_ADJUSTMENT_RATIO, MIN_ADJUSTMENT_RATIO, SETTINGS_FILE_NAME,
};
use crate::{Error, Result as CResult};

/// Serializes an adjustment ratio.
// This is required to use in macro `serialize_with`.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize_ratio<S: Serializer>(ratio: &f64, serializer: S) -> result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(*ratio)
}

/// Deserializes an adjustment ratio, which can be an integer, a float, or a
/// string such as `"inf"` or `"-inf"`.
pub fn deserialize_ratio<'a, D: Deserializer<'a>>(deserializer: D) -> Result<f64, D::Error> {
    deserializer.deserialize_any(RatioVisitor)
}

/// Serializes a sequence of adjustment ratios.
pub fn serialize_ratios<S: Serializer>(
    ratios: &[f64],
    serializer: S,
) -> result::Result<S::Ok, S::Error> {
    serializer.collect_seq(ratios.iter().map(|ratio| RatioValue(*ratio)))
}

/// Deserializes a sequence of adjustment ratios.
pub fn deserialize_ratios<'a, D: Deserializer<'a>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
    let values = Vec::<RatioValue>::deserialize(deserializer)?;
    Ok(values.into_iter().map(|value| value.0).collect())
}

/// Wraps a ratio so that sequences can reuse the ratio visitor.
struct RatioValue(f64);

impl Serialize for RatioValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> result::Result<S::Ok, S::Error> {
        serialize_ratio(&self.0, serializer)
    }
}

impl<'a> Deserialize<'a> for RatioValue {
    fn deserialize<D: Deserializer<'a>>(deserializer: D) -> Result<RatioValue, D::Error> {
        deserialize_ratio(deserializer).map(RatioValue)
    }
}

macro_rules! visit_from {
    ($visit: ident, $ty: ty) => {
        fn $visit<E>(self, value: $ty) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(f64::from(value))
        }
    };
}

macro_rules! visit_as {
    ($visit: ident, $ty: ty) => {
        fn $visit<E>(self, value: $ty) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }
    };
}

/// Visitor for adjustment ratios.
pub struct RatioVisitor;

impl<'a> Visitor<'a> for RatioVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, \"inf\" or \"-inf\"")
    }

    visit_from!(visit_u8, u8);
    visit_from!(visit_u16, u16);
    visit_from!(visit_u32, u32);
    visit_as!(visit_u64, u64);
    visit_from!(visit_i8, i8);
    visit_from!(visit_i16, i16);
    visit_from!(visit_i32, i32);
    visit_as!(visit_i64, i64);
    visit_from!(visit_f32, f32);
    visit_from!(visit_f64, f64);

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}

/// The alignment of the paragraph being broken into lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Both edges of the lines are aligned.
    Justify,

    /// Lines are aligned on the left edge.
    Left,

    /// Lines are aligned on the right edge.
    Right,

    /// Lines are centered.
    Center,
}

impl Alignment {
    /// Returns whether the lines are stretched to both edges.
    pub fn is_justified(self) -> bool {
        self == Alignment::Justify
    }
}

impl Default for Alignment {
    fn default() -> Alignment {
        Alignment::Justify
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Alignment::Justify => write!(fmt, "justify"),
            Alignment::Left => write!(fmt, "left"),
            Alignment::Right => write!(fmt, "right"),
            Alignment::Center => write!(fmt, "center"),
        }
    }
}

/// The reasons why settings can be rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// No fitness class was given.
    EmptyFitnessClasses,

    /// The fitness class at this index is not strictly greater than the
    /// previous one.
    UnorderedFitnessClasses(usize),

    /// This field is not a number.
    NotANumber(&'static str),

    /// The minimal adjustment ratio is greater than the maximal one.
    InvertedRatioBounds {
        /// The minimal adjustment ratio.
        min: f64,

        /// The maximal adjustment ratio.
        max: f64,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SettingsError::EmptyFitnessClasses => write!(fmt, "at least one fitness class is required"),
            SettingsError::UnorderedFitnessClasses(index) => write!(
                fmt,
                "fitness class #{} must be greater than the previous one",
                index
            ),
            SettingsError::NotANumber(field) => write!(fmt, "{} is not a number", field),
            SettingsError::InvertedRatioBounds { min, max } => write!(
                fmt,
                "min_ratio ({}) is greater than max_ratio ({})",
                min, max
            ),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Holds the tunable constants of the cost model, along with the alignment
/// of the paragraph. Settings are never modified while scoring breakpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// The lowest adjustment ratio of a feasible line.
    #[serde(serialize_with = "serialize_ratio")]
    #[serde(deserialize_with = "deserialize_ratio")]
    pub min_ratio: f64,

    /// The highest adjustment ratio of a feasible line, before looseness.
    #[serde(serialize_with = "serialize_ratio")]
    #[serde(deserialize_with = "deserialize_ratio")]
    pub max_ratio: f64,

    /// The constant added to the badness before it gets squared.
    pub demerit_offset: f64,

    /// The demerits added to a flagged breakpoint.
    pub flag_penalty: f64,

    /// The penalty of a hyphen in a justified paragraph.
    pub hyphen_penalty: f64,

    /// The penalty of a hyphen in a ragged paragraph.
    pub hyphen_penalty_ragged: f64,

    /// The demerits added when adjacent lines are more than one fitness
    /// class apart.
    pub fitness_class_demerit: f64,

    /// The upper bounds of the fitness classes, in ascending order.
    #[serde(serialize_with = "serialize_ratios")]
    #[serde(deserialize_with = "deserialize_ratios")]
    pub fitness_classes: Vec<f64>,

    /// The alignment of the paragraph.
    pub alignment: Alignment,

    /// The default slack added to the maximal adjustment ratio.
    #[serde(default)]
    pub looseness: f64,

    /// Whether timings and debug messages are recorded.
    #[serde(default)]
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            min_ratio: MIN_ADJUSTMENT_RATIO,
            max_ratio: MAX_ADJUSTMENT_RATIO,
            demerit_offset: DEMERIT_OFFSET,
            flag_penalty: FLAG_PENALTY,
            hyphen_penalty: HYPHEN_PENALTY,
            hyphen_penalty_ragged: HYPHEN_PENALTY_RAGGED,
            fitness_class_demerit: ADJACENT_LOOSE_TIGHT_PENALTY,
            fitness_classes: FITNESS_CLASSES.to_vec(),
            alignment: Alignment::Justify,
            looseness: 0.0,
            debug: false,
        }
    }
}

impl Settings {
    /// Creates the default settings for a given alignment.
    pub fn with_alignment(alignment: Alignment) -> Settings {
        Settings {
            alignment,
            ..Settings::default()
        }
    }

    /// Returns the penalty of a hyphenated breakpoint under the current
    /// alignment.
    pub fn hyphen_penalty_for_alignment(&self) -> f64 {
        if self.alignment.is_justified() {
            self.hyphen_penalty
        } else {
            self.hyphen_penalty_ragged
        }
    }

    /// Checks that the settings are consistent.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let scalars = [
            ("min_ratio", self.min_ratio),
            ("max_ratio", self.max_ratio),
            ("demerit_offset", self.demerit_offset),
            ("flag_penalty", self.flag_penalty),
            ("hyphen_penalty", self.hyphen_penalty),
            ("hyphen_penalty_ragged", self.hyphen_penalty_ragged),
            ("fitness_class_demerit", self.fitness_class_demerit),
            ("looseness", self.looseness),
        ];

        for (field, value) in scalars.iter() {
            if value.is_nan() {
                return Err(SettingsError::NotANumber(*field));
            }
        }

        if self.min_ratio > self.max_ratio {
            return Err(SettingsError::InvertedRatioBounds {
                min: self.min_ratio,
                max: self.max_ratio,
            });
        }

        if self.fitness_classes.is_empty() {
            return Err(SettingsError::EmptyFitnessClasses);
        }

        if self.fitness_classes.iter().any(|class| class.is_nan()) {
            return Err(SettingsError::NotANumber("fitness_classes"));
        }

        for (index, pair) in self.fitness_classes.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(SettingsError::UnorderedFitnessClasses(index + 1));
            }
        }

        Ok(())
    }

    /// Parses and validates settings from a TOML string.
    pub fn from_toml(content: &str) -> CResult<Settings> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serializes the settings into a TOML string.
    pub fn to_toml(&self) -> CResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Reads the settings from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> CResult<Settings> {
        let mut file = File::open(path.as_ref())?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;

        let settings = Settings::from_toml(&content)?;
        debug!("loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Looks for a `linecost.toml` file in `start` or any of its parents.
    pub fn find<P: AsRef<Path>>(start: P) -> CResult<PathBuf> {
        let mut current_dir = start.as_ref().to_path_buf();

        loop {
            current_dir.push(SETTINGS_FILE_NAME);

            if current_dir.is_file() {
                return Ok(current_dir);
            }

            // Remove linecost.toml
            current_dir.pop();

            // Go to the parent directory
            if !current_dir.pop() {
                return Err(Error::NoConfigFile);
            }
        }
    }
}
