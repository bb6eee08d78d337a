// ============================================================
// DIFF SERVICE USE CASE
// ============================================================
// Myers diff at character, word, line or sentence granularity

use similar::{Algorithm, ChangeTag, TextDiff};

use crate::domain::diff::{DiffMode, DiffOutcome, DiffPart, DiffStats};

use super::text_analysis::char_length;

const SHORT_TEXT_LENGTH: usize = 200;
const LONG_TEXT_LENGTH: usize = 500;
const MANY_LINES: usize = 20;
const MANY_WORDS: usize = 50;

/// Diff two texts at the given granularity. `Auto` resolves through
/// [`select_auto_mode`]. Total: never fails, empty inputs give no parts.
pub fn diff(original: &str, modified: &str, mode: DiffMode) -> Vec<DiffPart> {
    let config = {
        let mut config = TextDiff::configure();
        config.algorithm(Algorithm::Myers);
        config
    };

    match resolve_mode(original, modified, mode) {
        DiffMode::Word => collect_parts(&config.diff_words(original, modified)),
        DiffMode::Line => collect_parts(&config.diff_lines(original, modified)),
        DiffMode::Sentence => {
            let old = sentence_tokens(original);
            let new = sentence_tokens(modified);
            collect_parts(&config.diff_slices(&old, &new))
        }
        DiffMode::Character | DiffMode::Auto => {
            collect_parts(&config.diff_chars(original, modified))
        }
    }
}

/// Diff plus the mode actually used and per-kind statistics
pub fn compute(original: &str, modified: &str, mode: DiffMode) -> DiffOutcome {
    let resolved = resolve_mode(original, modified, mode);
    let parts = diff(original, modified, resolved);
    let stats = DiffStats::from_parts(&parts);

    DiffOutcome {
        requested_mode: mode,
        mode: resolved,
        parts,
        stats,
    }
}

/// Pick a granularity from the combined size of both texts
pub fn select_auto_mode(original: &str, modified: &str) -> DiffMode {
    let total_length = char_length(original) + char_length(modified);
    let total_lines = original.split('\n').count() + modified.split('\n').count();
    let total_words = original.split_whitespace().count() + modified.split_whitespace().count();

    if total_length < SHORT_TEXT_LENGTH {
        DiffMode::Character
    } else if total_lines > MANY_LINES {
        DiffMode::Line
    } else if total_words > MANY_WORDS {
        DiffMode::Word
    } else if total_length > LONG_TEXT_LENGTH {
        DiffMode::Sentence
    } else {
        DiffMode::Character
    }
}

fn resolve_mode(original: &str, modified: &str, mode: DiffMode) -> DiffMode {
    match mode {
        DiffMode::Auto => select_auto_mode(original, modified),
        explicit => explicit,
    }
}

/// Fold single-token changes into runs of equal kind
fn collect_parts<'a, 'bufs>(diff: &TextDiff<'a, 'a, 'bufs, str>) -> Vec<DiffPart> {
    let mut parts: Vec<DiffPart> = Vec::new();

    for change in diff.iter_all_changes() {
        let tag = change.tag();
        let value = change.value();

        match parts.last_mut() {
            Some(last) if tag_of(last) == tag => last.value.push_str(value),
            _ => parts.push(match tag {
                ChangeTag::Equal => DiffPart::unchanged(value),
                ChangeTag::Insert => DiffPart::added(value),
                ChangeTag::Delete => DiffPart::removed(value),
            }),
        }
    }

    parts
}

fn tag_of(part: &DiffPart) -> ChangeTag {
    if part.added {
        ChangeTag::Insert
    } else if part.removed {
        ChangeTag::Delete
    } else {
        ChangeTag::Equal
    }
}

/// Split into sentences ending at `.`, `!` or `?` followed by whitespace or
/// end of text. Whitespace between sentences becomes its own token so that
/// reflowing spaces does not mark the neighbouring sentences as changed.
fn sentence_tokens(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];

        if pos == start && c.is_whitespace() {
            let mut j = i;
            while j < chars.len() && chars[j].1.is_whitespace() {
                j += 1;
            }
            let end = chars.get(j).map(|(p, _)| *p).unwrap_or(text.len());
            tokens.push(&text[pos..end]);
            start = end;
            i = j;
            continue;
        }

        if matches!(c, '.' | '!' | '?') {
            let at_boundary = chars
                .get(i + 1)
                .map_or(true, |(_, next)| next.is_whitespace());
            if at_boundary {
                let end = pos + c.len_utf8();
                tokens.push(&text[start..end]);
                start = end;
            }
        }

        i += 1;
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }

    tokens
}
