//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Result, error::Error, high_scores::HighScores, simulation::SimulationReport};

/// Create a progress bar for a batch of simulated games
pub fn create_simulation_progress(total_games: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .map_err(|e| Error::ProgressBarTemplate {
            message: e.to_string(),
        })?
        .progress_chars("=>-");
    pb.set_style(style);
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Plain-text rendering of the high-score table
pub fn format_high_scores(table: &HighScores) -> String {
    if table.is_empty() {
        return "No high scores yet. Play a game to set one!\n".to_string();
    }

    let mut out = format!(
        "{:>4}  {:>10}  {:>8}  {}\n",
        "Rank", "Score", "Tile", "Date"
    );
    for (i, entry) in table.entries().iter().enumerate() {
        let tile = if entry.highest_tile == 0 {
            "-".to_string()
        } else {
            entry.highest_tile.to_string()
        };
        out.push_str(&format!(
            "{:>4}  {:>10}  {:>8}  {}\n",
            i + 1,
            format_number(entry.score),
            tile,
            entry.date
        ));
    }
    out
}

/// Print the summary of a simulation batch
pub fn print_simulation_report(report: &SimulationReport) {
    print_section("Simulation Summary");
    print_kv("Games", &report.games.to_string());
    print_kv(
        "Wins",
        &format!("{} ({:.1}%)", report.wins, report.win_rate() * 100.0),
    );
    print_kv("Mean score", &format!("{:.1}", report.mean_score));
    print_kv("Max score", &format_number(report.max_score));
    print_kv("Highest tile", &report.highest_tile.to_string());
    print_kv("Total moves", &format_number(report.total_moves));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::high_scores::HighScoreEntry;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_empty_table() {
        assert!(format_high_scores(&HighScores::new()).starts_with("No high scores"));
    }

    #[test]
    fn test_table_rows() {
        let table = HighScores::from_entries(vec![
            HighScoreEntry::new(1200, 128, "2024-05-01 10:00:00"),
            HighScoreEntry::new(40_000, 2048, "2024-05-02 10:00:00"),
        ]);
        let text = format_high_scores(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("40,000"));
        assert!(lines[1].contains("2048"));
        assert!(lines[2].contains("1,200"));
    }

    #[test]
    fn test_progress_template_is_valid() {
        assert!(create_simulation_progress(10).is_ok());
    }
}
