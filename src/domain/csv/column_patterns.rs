// ============================================================
// COLUMN PATTERN TABLE
// ============================================================
// Header synonyms per canonical field, across many languages.
// Matching logic lives in infrastructure::csv::HeaderMapper and takes a
// table as a parameter, so new languages only touch this data.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::CanonicalField;

/// Synonym list for one canonical field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPatterns {
    pub field: CanonicalField,
    pub patterns: Vec<String>,
}

/// Ordered field -> patterns table. Field order is significant: on equal
/// scores the earlier field wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPatternTable {
    fields: Vec<FieldPatterns>,
}

impl ColumnPatternTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append patterns for a field (merged into the existing entry if present)
    pub fn with_field<I, S>(mut self, field: CanonicalField, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = patterns.into_iter().map(Into::into);
        match self.fields.iter_mut().find(|entry| entry.field == field) {
            Some(entry) => entry.patterns.extend(patterns),
            None => self.fields.push(FieldPatterns {
                field,
                patterns: patterns.collect(),
            }),
        }
        self
    }

    pub fn entries(&self) -> &[FieldPatterns] {
        &self.fields
    }

    pub fn patterns_for(&self, field: CanonicalField) -> &[String] {
        self.fields
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.patterns.as_slice())
            .unwrap_or(&[])
    }

    /// Built-in multi-language table
    pub fn builtin() -> &'static ColumnPatternTable {
        &BUILTIN_PATTERNS
    }
}

static BUILTIN_PATTERNS: Lazy<ColumnPatternTable> = Lazy::new(|| {
    ColumnPatternTable::new()
        .with_field(CanonicalField::ReferenceText, REFERENCE_TEXT_PATTERNS.iter().copied())
        .with_field(CanonicalField::Context, CONTEXT_PATTERNS.iter().copied())
        .with_field(CanonicalField::TextA, TEXT_A_PATTERNS.iter().copied())
        .with_field(CanonicalField::TextB, TEXT_B_PATTERNS.iter().copied())
        .with_field(CanonicalField::Notes, NOTES_PATTERNS.iter().copied())
});

const REFERENCE_TEXT_PATTERNS: &[&str] = &[
    // English
    "reference", "source", "original", "base", "master", "reference_text", "source_text",
    // Spanish
    "referencia", "fuente", "texto_referencia", "original",
    // Portuguese (Brazilian)
    "referência", "fonte", "texto_referência", "original",
    // French
    "référence", "source", "original", "texte_source",
    // German
    "referenz", "quelle", "original", "basis",
    // Japanese romanized
    "moto", "genpon", "kihon",
    // Korean romanized
    "wonseo", "giwon",
    // Arabic romanized
    "marji", "asl", "masdar",
    // Russian romanized
    "istochnik", "original",
    // Abbreviations
    "ref", "src", "orig",
];

const CONTEXT_PATTERNS: &[&str] = &[
    // English
    "context", "usage", "description", "notes", "comments", "purpose", "use_case",
    // Spanish
    "contexto", "uso", "descripción", "propósito",
    // Portuguese (Brazilian)
    "contexto", "uso", "descrição", "propósito",
    // French
    "contexte", "utilisation", "description", "objectif",
    // German
    "kontext", "verwendung", "beschreibung", "zweck",
    // Japanese romanized
    "bunmyaku", "riyou", "setsumei",
    // Korean romanized
    "munmaek", "sayong", "seolmyeong",
    // Arabic romanized
    "siyaq", "istikhdam", "wasf",
    // Russian romanized
    "kontekst", "ispolzovanie", "opisanie",
    // Abbreviations
    "desc", "info",
];

const TEXT_A_PATTERNS: &[&str] = &[
    // English
    "text_a", "version_a", "candidate_1", "original", "current", "old", "before",
    "translation_1", "option_1", "variant_1",
    // Spanish
    "texto_a", "version_a", "candidato_1", "original", "actual",
    // Portuguese (Brazilian)
    "texto_a", "versão_a", "candidato_1", "original", "atual",
    // French
    "texte_a", "version_a", "candidat_1", "original", "actuel",
    // German
    "text_a", "version_a", "kandidat_1", "original", "aktuell",
    // Japanese romanized
    "tekisuto_a", "ban_a", "koho_1", "genpon",
    // Korean romanized
    "teksteu_a", "beojeon_a", "hugbo_1", "wonbon",
    // Arabic romanized
    "nas_a", "nuskha_a", "murashaha_1", "asliyya",
    // Russian romanized
    "tekst_a", "versiya_a", "variant_1", "originalnyi",
    // Single tokens
    "a", "1", "first", "uno", "eins", "un", "yi", "hana",
];

const TEXT_B_PATTERNS: &[&str] = &[
    // English
    "text_b", "version_b", "candidate_2", "revised", "new", "after", "updated",
    "translation_2", "option_2", "variant_2",
    // Spanish
    "texto_b", "version_b", "candidato_2", "revisado", "nuevo",
    // Portuguese (Brazilian)
    "texto_b", "versão_b", "candidato_2", "revisado", "novo",
    // French
    "texte_b", "version_b", "candidat_2", "révisé", "nouveau",
    // German
    "text_b", "version_b", "kandidat_2", "überarbeitet", "neu",
    // Japanese romanized
    "tekisuto_b", "ban_b", "koho_2", "kaizen",
    // Korean romanized
    "teksteu_b", "beojeon_b", "hugbo_2", "sujeonggwan",
    // Arabic romanized
    "nas_b", "nuskha_b", "murashaha_2", "munaqqaha",
    // Russian romanized
    "tekst_b", "versiya_b", "variant_2", "novyi",
    // Single tokens
    "b", "2", "second", "dos", "zwei", "deux", "er", "dul",
];

const NOTES_PATTERNS: &[&str] = &[
    // English
    "notes", "comments", "remarks", "observations", "feedback",
    // Spanish
    "notas", "comentarios", "observaciones", "retroalimentación",
    // Portuguese (Brazilian)
    "notas", "comentários", "observações", "feedback",
    // French
    "notes", "commentaires", "remarques", "observations",
    // German
    "notizen", "kommentare", "bemerkungen", "feedback",
    // Japanese romanized
    "memo", "komento", "bikou", "kansou",
    // Korean romanized
    "memo", "daegul", "gwallyeon", "uigyeon",
    // Arabic romanized
    "mulahazat", "taeliqat", "tajawubu", "aara",
    // Russian romanized
    "zametki", "kommentarii", "zamechaniya", "otziv",
    // Abbreviations
    "note", "comment",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_field_in_order() {
        let fields: Vec<_> = ColumnPatternTable::builtin()
            .entries()
            .iter()
            .map(|entry| entry.field)
            .collect();
        assert_eq!(fields, CanonicalField::ALL.to_vec());

        for entry in ColumnPatternTable::builtin().entries() {
            assert!(entry.patterns.len() > 20, "{} has too few patterns", entry.field);
        }
    }

    #[test]
    fn test_with_field_merges_existing_entry() {
        let table = ColumnPatternTable::new()
            .with_field(CanonicalField::TextA, ["left"])
            .with_field(CanonicalField::TextA, ["izquierda"]);

        assert_eq!(table.entries().len(), 1);
        assert_eq!(table.patterns_for(CanonicalField::TextA), ["left", "izquierda"]);
        assert!(table.patterns_for(CanonicalField::Notes).is_empty());
    }
}
