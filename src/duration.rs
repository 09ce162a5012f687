use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;

use crate::error::ExportError;

// Anchored subset of ISO-8601 durations as Recipe Keeper emits them. The `T`
// is mandatory even when no time components follow ("P1DT" is legal). Year
// and month groups are matched so such strings still parse, but their values
// are not counted.
static ISO_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+)D)?T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+(?:.\d+)?)S)?$")
        .unwrap()
});

/// Parse an ISO-8601 duration string into a time span.
///
/// Days, hours, minutes and seconds are summed into seconds; the seconds
/// component may carry a fractional part. Anything that does not match the
/// grammar exactly (including a missing leading `P` or missing `T`) is an
/// [`ExportError::InvalidDuration`].
pub fn parse_iso_duration(input: &str) -> Result<Duration, ExportError> {
    let caps = ISO_DURATION
        .captures(input)
        .ok_or_else(|| ExportError::InvalidDuration(input.to_string()))?;

    let mut seconds = 0.0;

    // groups 1 and 2 (years, months) are deliberately skipped
    for (group, scale) in [(3, 86_400.0), (4, 3_600.0), (5, 60.0), (6, 1.0)] {
        if let Some(m) = caps.get(group) {
            let value: f64 = m
                .as_str()
                .parse()
                .map_err(|_| ExportError::InvalidDuration(input.to_string()))?;
            seconds += value * scale;
        }
    }

    Duration::try_from_secs_f64(seconds)
        .map_err(|_| ExportError::InvalidDuration(input.to_string()))
}
