//! Default values of the tunables used for scoring breakpoints.

/// Minimum adjustment ratio to consider a breakpoint is legal.
pub const MIN_ADJUSTMENT_RATIO: f64 = -1.0;

/// Maximal adjustment ratio to consider a breakpoint is legal.
pub const MAX_ADJUSTMENT_RATIO: f64 = 2.0;

/// The constant added to the badness before squaring it into demerits.
pub const DEMERIT_OFFSET: f64 = 1.0;

/// The additional demerits of a flagged breakpoint.
pub const FLAG_PENALTY: f64 = 3000.0;

/// The penalty of a hyphenated breakpoint in a justified paragraph.
pub const HYPHEN_PENALTY: f64 = 50.0;

/// The penalty of a hyphenated breakpoint in a ragged paragraph.
pub const HYPHEN_PENALTY_RAGGED: f64 = 500.0;

/// The additional cost that should be added when the engine picks two
/// adjacent lines whose fitness classes are more than one tier apart.
pub const ADJACENT_LOOSE_TIGHT_PENALTY: f64 = 3000.0;

/// Upper bounds of the tight, decent, loose and very loose fitness classes.
pub const FITNESS_CLASSES: [f64; 4] = [-0.5, 0.5, 1.0, f64::INFINITY];

/// The coefficient of the cubed adjustment ratio in the badness.
pub const BADNESS_SCALE: f64 = 100.0;

/// The badness of a line that needs no adjustment at all.
pub const BADNESS_FLOOR: f64 = 0.5;

/// The name of the settings file looked up by the command line tool.
pub const SETTINGS_FILE_NAME: &str = "linecost.toml";
