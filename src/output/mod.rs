//! Output formatting for CLI display
//!
//! Plain formatting in quiet mode (one identifier-first line per item, easy
//! to pipe), colored multi-column output otherwise.

use crate::models::{DetailRecord, RatedEntry, SearchResult};
use crate::store::WatchedSummary;
use colored::Colorize;

/// Format one search hit
#[must_use]
pub fn search_hit(hit: &SearchResult, quiet: bool) -> String {
    if quiet {
        format!("{}\t{}\t{}", hit.id, hit.title, hit.year)
    } else {
        format!("  {} {} ({})", hit.id.dimmed(), hit.title.bold(), hit.year)
    }
}

/// Format a rated entry
#[must_use]
pub fn rated_entry(entry: &RatedEntry, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}\t{}", entry.id, entry.user_rating, entry.title);
    }
    format!(
        "  {} {} ({})  {} {}  {} {}  {} min",
        entry.id.dimmed(),
        entry.title.bold(),
        entry.year,
        "you".cyan(),
        colorize_rating(f64::from(entry.user_rating)),
        "imdb".cyan(),
        colorize_rating(entry.imdb_rating),
        entry.runtime,
    )
}

/// Format the full detail record, optionally with the stored user rating
#[must_use]
pub fn detail_record(record: &DetailRecord, user_rating: Option<u8>) -> String {
    let mut lines = vec![
        format!("{} ({})", record.title.bold(), record.year),
        format!("{} {}", "Released:".cyan(), record.released),
        format!("{} {}", "Runtime:".cyan(), record.runtime),
        format!("{} {}", "Genre:".cyan(), record.genre),
        format!("{} {}", "IMDb rating:".cyan(), record.imdb_rating),
        format!("{} {}", "Director:".cyan(), record.director),
        format!("{} {}", "Starring:".cyan(), record.actors),
    ];
    if let Some(rating) = user_rating {
        lines.push(format!(
            "{} {}",
            "Your rating:".cyan(),
            colorize_rating(f64::from(rating))
        ));
    }
    lines.push(String::new());
    lines.push(record.plot.italic().to_string());
    lines.join("\n")
}

/// Format the collection summary
#[must_use]
pub fn summary(summary: &WatchedSummary, quiet: bool) -> String {
    if quiet {
        return format!(
            "{}\t{:.2}\t{:.2}\t{:.0}",
            summary.count, summary.mean_imdb_rating, summary.mean_user_rating, summary.mean_runtime
        );
    }
    format!(
        "{} movie(s) watched\n  {} {:.2}\n  {} {:.2}\n  {} {:.0} min",
        summary.count.to_string().bold(),
        "Mean IMDb rating:".cyan(),
        summary.mean_imdb_rating,
        "Mean user rating:".cyan(),
        summary.mean_user_rating,
        "Mean runtime:".cyan(),
        summary.mean_runtime,
    )
}

/// Color a 0-10 score (green high, yellow middling, red low)
#[must_use]
pub fn colorize_rating(rating: f64) -> String {
    let text = format!("{rating:.1}");
    if rating >= 7.5 {
        text.green().to_string()
    } else if rating >= 5.0 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{hit, rated, record};

    #[test]
    fn test_quiet_search_hit_is_tab_separated() {
        let line = search_hit(&hit("tt1375666", "Inception"), true);
        assert_eq!(line, "tt1375666\tInception\t2010");
    }

    #[test]
    fn test_quiet_rated_entry() {
        let line = rated_entry(&rated("tt1", 9), true);
        assert_eq!(line, "tt1\t9\tTitle tt1");
    }

    #[test]
    fn test_quiet_summary() {
        let entries = vec![rated("tt1", 9), rated("tt2", 7)];
        let line = summary(&WatchedSummary::from_entries(&entries), true);
        assert_eq!(line, "2\t8.00\t8.00\t120");
    }

    #[test]
    fn test_detail_record_mentions_user_rating_only_when_rated() {
        colored::control::set_override(false);
        let inception = record("tt1375666", "Inception");
        assert!(!detail_record(&inception, None).contains("Your rating"));
        assert!(detail_record(&inception, Some(9)).contains("Your rating: 9.0"));
    }

    #[test]
    fn test_colorize_rating_plain() {
        colored::control::set_override(false);
        assert_eq!(colorize_rating(8.24), "8.2");
    }
}
