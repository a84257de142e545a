//! Human-readable rendering of timing deltas.

use chrono::Duration;

const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;

/// Renders a delta as `{d}d {h}h {m}m`, dropping zero-valued leading units.
///
/// Sub-minute remainders are truncated and the sign is ignored, so both
/// `+2h30m15s` and `-2h30m` render as `"2h 30m"`. Units after the first
/// non-zero one are always shown (`"1d 0h 5m"`).
pub fn format_duration(delta: Duration) -> String {
    let total_minutes = delta.num_minutes().unsigned_abs();
    let days = total_minutes / MINUTES_PER_DAY;
    let hours = (total_minutes % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
    let minutes = total_minutes % MINUTES_PER_HOUR;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
