//! This module contains a scoped timer used to profile the line breaking, and
//! a few helpers that only forward messages to the logger in debug mode.
//!
//! Nothing in here has any influence on the values computed by the cost
//! model.

use std::collections::HashMap;
use std::fmt::Display;
use std::time::Instant;

use crate::config::Settings;

/// The start and end instants recorded for a key.
#[derive(Debug, Default)]
struct Entry {
    starts: Vec<Instant>,
    ends: Vec<Instant>,
}

/// Accumulates timings per key.
#[derive(Debug, Default)]
pub struct Timings {
    debug: bool,
    entries: HashMap<String, Entry>,
}

impl Timings {
    /// Creates a new timer. When `debug` is false, nothing is ever recorded
    /// or logged, except for errors.
    pub fn new(debug: bool) -> Timings {
        Timings {
            debug,
            entries: HashMap::new(),
        }
    }

    /// Creates a timer that follows the debug toggle of the settings.
    pub fn from_settings(settings: &Settings) -> Timings {
        Timings::new(settings.debug)
    }

    /// Returns whether the timer records anything.
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Starts measuring a call for a key.
    pub fn start(&mut self, key: &str) {
        if !self.debug {
            return;
        }

        self.entries
            .entry(key.to_owned())
            .or_default()
            .starts
            .push(Instant::now());
    }

    /// Stops measuring a call for a key.
    pub fn end(&mut self, key: &str) {
        if !self.debug {
            return;
        }

        self.entries
            .entry(key.to_owned())
            .or_default()
            .ends
            .push(Instant::now());
    }

    /// Returns the number of calls started for a key.
    pub fn calls(&self, key: &str) -> usize {
        self.entries.get(key).map_or(0, |entry| entry.starts.len())
    }

    /// Returns the total time spent between the starts and ends of a key,
    /// in milliseconds. Starts without a matching end are ignored.
    pub fn elapsed_ms(&self, key: &str) -> f64 {
        match self.entries.get(key) {
            Some(entry) => entry
                .starts
                .iter()
                .zip(entry.ends.iter())
                .map(|(start, end)| end.saturating_duration_since(*start).as_secs_f64() * 1000.0)
                .sum(),
            None => 0.0,
        }
    }

    /// Formats the total time and number of calls of a key, e.g.
    /// `1.25ms --- (calls: 3)`.
    pub fn diff(&self, key: &str) -> String {
        format!("{:.2}ms --- (calls: {})", self.elapsed_ms(key), self.calls(key))
    }

    /// Logs a message in debug mode.
    pub fn log<T: Display>(&self, message: T) {
        if self.debug {
            info!("linecost: {}", message);
        }
    }

    /// Logs a warning in debug mode.
    pub fn warn<T: Display>(&self, message: T) {
        if self.debug {
            warn!("linecost: {}", message);
        }
    }

    /// Logs an error, whether in debug mode or not.
    pub fn error<T: Display>(&self, message: T) {
        error!("linecost: {}", message);
    }
}

#[cfg(test)]
mod tests {

    use std::sync::Mutex;

    use log::{Level, LevelFilter, Log, Metadata, Record};

    use crate::config::Settings;
    use crate::timings::Timings;

    /// A logger that keeps every record in memory.
    struct Capture;

    static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
    static CAPTURE: Capture = Capture;

    impl Log for Capture {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    /// Returns the captured records mentioning `tag`.
    fn records(tag: &str) -> Vec<(Level, String)> {
        RECORDS
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, message)| message.contains(tag))
            .cloned()
            .collect()
    }

    fn install() {
        // Another test may already have installed it.
        log::set_logger(&CAPTURE).ok();
        log::set_max_level(LevelFilter::Trace);
    }

    #[test]
    fn test_messages_without_debug() {
        install();
        let timings = Timings::new(false);

        timings.log("quiet-info");
        timings.warn("quiet-warn");
        timings.error("quiet-error");

        assert!(records("quiet-info").is_empty());
        assert!(records("quiet-warn").is_empty());
        assert_eq!(
            records("quiet-error"),
            vec![(Level::Error, "linecost: quiet-error".to_owned())]
        );
    }

    #[test]
    fn test_messages_with_debug() {
        install();
        let timings = Timings::new(true);

        timings.log("loud-info");
        timings.warn("loud-warn");
        timings.error("loud-error");

        assert_eq!(
            records("loud-info"),
            vec![(Level::Info, "linecost: loud-info".to_owned())]
        );
        assert_eq!(
            records("loud-warn"),
            vec![(Level::Warn, "linecost: loud-warn".to_owned())]
        );
        assert_eq!(
            records("loud-error"),
            vec![(Level::Error, "linecost: loud-error".to_owned())]
        );
    }

    #[test]
    fn test_unknown_key() {
        let timings = Timings::new(true);
        assert_eq!(timings.diff("nothing"), "0.00ms --- (calls: 0)");
    }

    #[test]
    fn test_disabled_timer_records_nothing() {
        let mut timings = Timings::from_settings(&Settings::default());
        assert!(!timings.is_debug());

        timings.start("ratio");
        timings.end("ratio");
        assert_eq!(timings.calls("ratio"), 0);
        assert_eq!(timings.diff("ratio"), "0.00ms --- (calls: 0)");
    }

    #[test]
    fn test_calls_are_counted() {
        let mut timings = Timings::new(true);

        for _ in 0..3 {
            timings.start("ratio");
            timings.end("ratio");
        }
        timings.start("badness");

        assert_eq!(timings.calls("ratio"), 3);
        assert_eq!(timings.calls("badness"), 1);
        assert_eq!(timings.elapsed_ms("badness"), 0.0);
        assert!(timings.elapsed_ms("ratio") >= 0.0);
        assert!(timings.diff("ratio").ends_with("ms --- (calls: 3)"));
    }
}
