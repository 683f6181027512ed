//! Time format constants for tweet timestamps.

/// Pattern of the raw `created_at` value, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
pub const PARSE_TIME_FORMAT: &str = "%a %b %d %H:%M:%S +0000 %Y";

/// [`PARSE_TIME_FORMAT`] after the leading weekday name.
pub const PARSE_TIME_FORMAT_WITHOUT_WEEKDAY: &str = "%b %d %H:%M:%S +0000 %Y";

/// Preset used by [`Tweet::created_at_default`](crate::Tweet::created_at_default).
pub const DEFAULT_OUTPUT_FORMAT: &str = "YMD";

/// Named output presets: name -> strftime pattern
pub static OUTPUT_TIME_FORMATS: &[(&str, &str)] = &[
    ("Y", "%Y"),
    ("YM", "%Y%m"),
    ("Y-M", "%Y-%m"),
    ("YMD", "%Y%m%d"),
    ("Y-M-D", "%Y-%m-%d"),
];

/// Look up a named output preset.
pub fn output_time_format(name: &str) -> Option<&'static str> {
    OUTPUT_TIME_FORMATS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, pattern)| *pattern)
}
