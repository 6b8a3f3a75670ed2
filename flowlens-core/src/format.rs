//! Display helpers shared by the text renderers.

use chrono::{DateTime, Utc};

/// `"123ms"` below one second, `"1.23s"` from there on.
pub fn format_time(ms: f64) -> String {
    if ms < 1000.0 {
        format!("{}ms", ms.round() as i64)
    } else {
        format!("{:.2}s", ms / 1000.0)
    }
}

pub fn format_percentage(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Integer with `,` thousands separators.
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Wall-clock time of day (UTC) for a millisecond timestamp.
///
/// Missing and zero timestamps render as `"-"`.
pub fn format_timestamp(ms: Option<f64>) -> String {
    let Some(ms) = ms.filter(|ms| *ms != 0.0) else {
        return "-".to_string();
    };

    match DateTime::<Utc>::from_timestamp_millis(ms as i64) {
        Some(t) => t.format("%H:%M:%S%.3f").to_string(),
        None => "-".to_string(),
    }
}
