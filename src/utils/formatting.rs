//! Formatting utilities used for CLI and report output.

/// `01h 45m`
pub fn mins2readable(mins: i64) -> String {
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}

/// `105 min (01h 45m)`
pub fn minutes_summary(mins: i64) -> String {
    format!("{} min ({})", mins, mins2readable(mins))
}

pub fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}
