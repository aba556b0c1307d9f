//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        (((value / max) * width as f64).max(0.0) as usize).min(width)
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a word's score relative to the best score
#[must_use]
pub fn score_bar(score: f64, best: f64, width: usize) -> String {
    create_progress_bar(score, best, width)
}

/// Plural-aware "N guess(es)"
#[must_use]
pub fn guesses(count: usize) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn score_bar_caps_at_width() {
        assert_eq!(score_bar(2.0, 1.0, 3), "███");
    }

    #[test]
    fn guesses_pluralizes() {
        assert_eq!(guesses(1), "1 guess");
        assert_eq!(guesses(3), "3 guesses");
    }
}
