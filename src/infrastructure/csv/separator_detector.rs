// ============================================================
// SEPARATOR DETECTOR
// ============================================================
// Pick the field separator from the first few lines of a file

use super::LineTokenizer;
use crate::domain::csv::Separator;

/// Number of non-blank lines sampled
const SAMPLE_LINES: usize = 3;

/// Bonus per sampled line whose field count matches the first line's
const CONSISTENCY_BONUS: usize = 10;

pub struct SeparatorDetector;

impl SeparatorDetector {
    /// Detect the separator of `content`.
    ///
    /// Score per candidate = total field count over the sampled lines, plus a
    /// consistency bonus for each line matching the first line's count (only
    /// when that count is above one). Highest score wins; ties go to the
    /// earlier candidate in `, ; \t |` order.
    pub fn detect(content: &str) -> Separator {
        let lines: Vec<&str> = content
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .take(SAMPLE_LINES)
            .collect();

        if lines.is_empty() {
            return Separator::default();
        }

        let mut best = Separator::default();
        let mut best_score = 0usize;

        for separator in Separator::CANDIDATES {
            let score = Self::score(&lines, separator);
            if score > best_score {
                best_score = score;
                best = separator;
            }
        }

        best
    }

    fn score(lines: &[&str], separator: Separator) -> usize {
        let tokenizer = LineTokenizer::new(separator);
        let counts: Vec<usize> = lines.iter().map(|line| tokenizer.count_fields(line)).collect();
        let first = counts[0];

        let total: usize = counts.iter().sum();
        let consistency = if first > 1 {
            counts.iter().filter(|&&count| count == first).count() * CONSISTENCY_BONUS
        } else {
            0
        };

        total + consistency
    }
}
