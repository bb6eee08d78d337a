// ============================================================
// LOCALIZED EXPORT HEADERS
// ============================================================
// Column titles written by the exporter, per UI language

/// Header row in fixed order: reference, context, text A, text B, notes, timestamp
pub type HeaderRow = [&'static str; 6];

const EN: HeaderRow = ["Reference_Text", "Context", "Text_A", "Text_B", "Notes", "Timestamp"];

const TABLE: &[(&str, HeaderRow)] = &[
    ("en", EN),
    ("es", ["Texto_Referencia", "Contexto", "Texto_A", "Texto_B", "Notas", "Marca_Tiempo"]),
    ("pt", ["Texto_Referência", "Contexto", "Texto_A", "Texto_B", "Notas", "Marca_Tempo"]),
    ("pt-BR", ["Texto_Referência", "Contexto", "Texto_A", "Texto_B", "Notas", "Data_Hora"]),
    ("fr", ["Texte_Référence", "Contexte", "Texte_A", "Texte_B", "Notes", "Horodatage"]),
    ("de", ["Referenz_Text", "Kontext", "Text_A", "Text_B", "Notizen", "Zeitstempel"]),
    ("ja", ["参照テキスト", "コンテキスト", "テキストA", "テキストB", "メモ", "タイムスタンプ"]),
    ("ko", ["참조텍스트", "컨텍스트", "텍스트A", "텍스트B", "메모", "타임스탬프"]),
    ("ar", ["النص_المرجعي", "السياق", "النص_أ", "النص_ب", "ملاحظات", "الطابع_الزمني"]),
    ("ru", ["Исходный_Текст", "Контекст", "Текст_А", "Текст_Б", "Заметки", "Время"]),
    ("hi", ["संदर्भ_पाठ", "संदर्भ", "पाठ_A", "पाठ_B", "टिप्पणियां", "समयचिह्न"]),
    ("zh", ["参考文本", "上下文", "文本A", "文本B", "备注", "时间戳"]),
    ("zh-CN", ["参考文本", "上下文", "文本A", "文本B", "备注", "时间戳"]),
    ("zh-TW", ["參考文本", "上下文", "文本A", "文本B", "備註", "時間戳"]),
];

/// Headers for a language code; unknown codes fall back to English
pub fn localized_headers(language: &str) -> HeaderRow {
    TABLE
        .iter()
        .find(|(code, _)| *code == language)
        .map(|(_, headers)| *headers)
        .unwrap_or(EN)
}

pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|(code, _)| *code)
}
