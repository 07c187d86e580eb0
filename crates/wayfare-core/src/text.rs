// crates/wayfare-core/src/text.rs

/// Lower-case a string for comparison.
///
/// This is plain Unicode code-point lowercasing (`str::to_lowercase`); there
/// is no transliteration or diacritic stripping, so `"Sensō-ji"` folds to
/// `"sensō-ji"` and does **not** match `"senso"`.
///
/// # Examples
///
/// ```rust
/// use wayfare_core::text::fold_case;
///
/// assert_eq!(fold_case("Tokyo Sky Tree"), "tokyo sky tree");
/// assert_eq!(fold_case("SENSŌ-JI"), "sensō-ji");
/// ```
#[inline]
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Normalize a free-text query into the needle used by the matcher.
///
/// Returns `None` when the query is blank, i.e. it contains no alphanumeric
/// character. Whitespace-only and punctuation-only queries are therefore both
/// "empty": the caller shows no results rather than all of them.
///
/// Otherwise the needle is the whole query lower-cased, surrounding spaces
/// included, so every hit really contains what was typed.
///
/// # Examples
///
/// ```rust
/// use wayfare_core::text::normalize_query;
///
/// assert_eq!(normalize_query("Tokyo"), Some("tokyo".to_string()));
/// assert_eq!(normalize_query("tokyo "), Some("tokyo ".to_string()));
/// assert_eq!(normalize_query("   "), None);
/// assert_eq!(normalize_query("?!-"), None);
/// ```
pub fn normalize_query(query: &str) -> Option<String> {
    if !query.chars().any(char::is_alphanumeric) {
        return None;
    }
    Some(fold_case(query))
}

/// Whether `haystack` contains an already-folded `needle`, ignoring case.
#[inline]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(needle)
}

/// Render whole dollars the way the budget card does: `$2,500`, `-$45`.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}")
}
