//! Shared rendering helpers.

use crate::events::{Tab, Worker};
use chrono::{DateTime, NaiveDateTime};
use ratatui::layout::Rect;
use ratatui::style::Color;

/// Format a backend timestamp for table cells. Accepts RFC 3339 and the
/// backend's naive ISO form; anything else is shown as received.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "N/A".to_string();
    };
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

/// Extract MM-DD HH:MM from a full "YYYY-MM-DD HH:MM:SS" event timestamp.
pub fn format_compact_timestamp(timestamp: &str) -> String {
    if timestamp.len() >= 16 {
        format!("{} {}", &timestamp[5..10], &timestamp[11..16])
    } else {
        timestamp.to_string()
    }
}

/// Fixed-size rectangle centered in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Spinner frame for the given animation tick.
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// Accent color for a worker's entries in the activity log.
pub fn worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::HealthProbe => Color::Magenta,
        Worker::StatsFetcher => Color::Cyan,
        Worker::ListFetcher(Tab::Users) => Color::Blue,
        Worker::ListFetcher(Tab::Courses) => Color::LightBlue,
        Worker::FormLoader => Color::Yellow,
        Worker::Mutator => Color::Green,
    }
}
