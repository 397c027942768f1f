pub fn format_score(points: i64, comments: i64) -> String {
    format!("{} pts · {} comments", points, comments)
}

/// Age of `unix_ts` relative to `now`, e.g. "5m ago". Empty for missing timestamps.
pub fn format_age(unix_ts: i64, now: i64) -> String {
    if unix_ts <= 0 {
        return String::new();
    }
    let elapsed_secs = now - unix_ts;
    if elapsed_secs < 60 {
        return "just now".to_string();
    }
    let mins = elapsed_secs / 60;
    let hours = mins / 60;
    let days = hours / 24;
    match () {
        _ if days > 0 => format!("{}d ago", days),
        _ if hours > 0 => format!("{}h ago", hours),
        _ => format!("{}m ago", mins),
    }
}

pub fn format_relative_time(unix_ts: i64) -> String {
    format_age(unix_ts, chrono::Utc::now().timestamp())
}
