/// Sentence punctuation stripped from the ends of a capture slot.
///
/// Book-title brackets are left alone: `《西游记》` is a surface form in its own
/// right and must survive trimming.
const SLOT_PUNCTUATION: &[char] = &[
    '，', '。', '、', '；', '：', '！', '？', '“', '”', '‘', '’', '…', '·', '—', '（', '）',
    ',', '.', ';', ':', '!', '?', '"', '\'', '(', ')',
];

/// Trim surrounding whitespace and punctuation from a captured subject/object.
pub fn normalize_slot(slot: &str) -> &str {
    slot.trim_matches(|c: char| c.is_whitespace() || SLOT_PUNCTUATION.contains(&c))
}
