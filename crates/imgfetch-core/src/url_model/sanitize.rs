//! Filename sanitization.

/// Longest name we produce; leaves room for a `_N` collision suffix under
/// the usual 255-byte NAME_MAX.
const NAME_BUDGET: usize = 240;

/// Keeps only alphanumeric characters and `.`, `-`, `_`; everything else is
/// dropped. Over-long names are shortened from the stem so the extension
/// survives.
pub fn sanitize_filename(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    if kept.len() <= NAME_BUDGET {
        return kept;
    }

    let (stem, ext) = match kept.rfind('.') {
        Some(i) if i > 0 && kept.len() - i <= 16 => kept.split_at(i),
        _ => (kept.as_str(), ""),
    };
    let mut take = NAME_BUDGET.saturating_sub(ext.len());
    while take > 0 && !stem.is_char_boundary(take) {
        take -= 1;
    }
    format!("{}{}", &stem[..take], ext)
}
