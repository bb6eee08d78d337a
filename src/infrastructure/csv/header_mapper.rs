// ============================================================
// HEADER MAPPER
// ============================================================
// Fuzzy matching of arbitrary CSV headers to canonical fields

use std::collections::HashSet;

use tracing::debug;

use crate::domain::csv::{ColumnPatternTable, SmartColumnMapping};

/// Number of patterns offered as alternatives for a mapping
const ALTERNATIVES_SHOWN: usize = 3;

/// Score given when one normalized string contains the other
const CONTAINMENT_SCORE: f64 = 0.8;

/// Maps headers against a pattern table
pub struct HeaderMapper<'a> {
    table: &'a ColumnPatternTable,
}

impl Default for HeaderMapper<'static> {
    fn default() -> Self {
        Self::new(ColumnPatternTable::builtin())
    }
}

impl<'a> HeaderMapper<'a> {
    pub fn new(table: &'a ColumnPatternTable) -> Self {
        Self { table }
    }

    /// Map every header, in order, to its best unclaimed field.
    ///
    /// Assignment is greedy: a field claimed by an earlier header (confidence
    /// above the threshold) is no longer offered to later headers. Headers
    /// that do not reach the threshold fall back to `notes`.
    pub fn map_headers<S: AsRef<str>>(&self, headers: &[S]) -> Vec<SmartColumnMapping> {
        let mut claimed = HashSet::new();
        let mut mappings = Vec::with_capacity(headers.len());

        for header in headers {
            let header = header.as_ref();
            let mut best = SmartColumnMapping::unmatched(header);

            for entry in self.table.entries() {
                if claimed.contains(&entry.field) {
                    continue;
                }

                for pattern in &entry.patterns {
                    let score = similarity(header, pattern);
                    if score > best.confidence {
                        best = SmartColumnMapping {
                            detected: header.to_string(),
                            mapped: entry.field,
                            confidence: score,
                            alternatives: entry
                                .patterns
                                .iter()
                                .take(ALTERNATIVES_SHOWN)
                                .cloned()
                                .collect(),
                        };
                    }
                }
            }

            if best.is_confident() {
                claimed.insert(best.mapped);
            } else {
                debug!(
                    header = header,
                    confidence = best.confidence,
                    "Header below mapping threshold, treating as notes"
                );
                best.mapped = crate::domain::csv::CanonicalField::Notes;
            }

            mappings.push(best);
        }

        mappings
    }
}

/// Similarity between a header and a pattern, 0.0 - 1.0.
///
/// Both sides are lowercased and stripped to `[a-z0-9]` first. Equal strings
/// score 1.0, containment in either direction 0.8, anything else
/// `1 - levenshtein / max_len`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    if a == b {
        return 1.0;
    }
    if a.contains(b.as_str()) || b.contains(a.as_str()) {
        return CONTAINMENT_SCORE;
    }

    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }

    1.0 - levenshtein(&a, &b) as f64 / max_len as f64
}

fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Edit distance with unit insert/delete/substitute costs
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::csv::CanonicalField;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("same", "same"), 0);
    }

    #[test]
    fn test_similarity_tiers() {
        assert_eq!(similarity("Text_A", "text_a"), 1.0);
        assert_eq!(similarity("Source Text", "source"), 0.8);
        // "kontekst" vs "kontext": one substitution + one deletion over 8
        let score = similarity("kontekst", "kontext");
        assert!((score - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_accents_are_dropped_by_normalization() {
        assert_eq!(similarity("Descripción", "descripción"), 1.0);
        assert_eq!(similarity("Notas_Extra", "notas"), 0.8);
        assert_eq!(similarity("Révisé", "rvis"), 1.0);
    }

    #[test]
    fn test_spanish_headers() {
        let mapper = HeaderMapper::default();
        let mapping = mapper.map_headers(&["Texto_A", "Texto_B", "Contexto"]);

        assert_eq!(mapping[0].mapped, CanonicalField::TextA);
        assert_eq!(mapping[1].mapped, CanonicalField::TextB);
        assert_eq!(mapping[2].mapped, CanonicalField::Context);
        assert!(mapping.iter().all(|m| m.confidence >= 0.6));
    }

    #[test]
    fn test_fields_are_claimed_first_come_first_served() {
        let mapper = HeaderMapper::default();
        let mapping = mapper.map_headers(&["Text_A", "text_a"]);

        assert_eq!(mapping[0].mapped, CanonicalField::TextA);
        assert_eq!(mapping[0].confidence, 1.0);
        assert_ne!(mapping[1].mapped, CanonicalField::TextA);
    }

    #[test]
    fn test_low_confidence_falls_back_to_notes() {
        let table = ColumnPatternTable::new()
            .with_field(CanonicalField::TextA, ["left"])
            .with_field(CanonicalField::TextB, ["right"]);
        let mapper = HeaderMapper::new(&table);

        let mapping = mapper.map_headers(&["left", "zzzzzz"]);
        assert_eq!(mapping[0].mapped, CanonicalField::TextA);
        assert_eq!(mapping[0].alternatives, vec!["left".to_string()]);
        assert_eq!(mapping[1].mapped, CanonicalField::Notes);
        assert!(!mapping[1].is_confident());
    }

    #[test]
    fn test_exhausted_fields_leave_unmatched_mapping() {
        let table = ColumnPatternTable::new().with_field(CanonicalField::TextA, ["a"]);
        let mapper = HeaderMapper::new(&table);

        let mapping = mapper.map_headers(&["a", "a"]);
        assert_eq!(mapping[1], SmartColumnMapping::unmatched("a"));
    }
}
