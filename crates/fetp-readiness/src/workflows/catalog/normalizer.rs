/// Canonical header form: invisible marks removed, whitespace collapsed to `_`, lowercase.
pub(crate) fn normalize_header(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
    collapsed.to_ascii_lowercase()
}

/// Trimmed cell text, or `None` for empty cells.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Accepts `1999` as well as float-formatted years like `1999.0` from spreadsheet exports.
pub(crate) fn parse_year(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|year| year.is_finite() && year.fract() == 0.0)
        .filter(|year| *year >= f64::from(i32::MIN) && *year <= f64::from(i32::MAX))
        .map(|year| year as i32)
}

#[cfg(test)]
pub(crate) fn normalize_header_for_tests(value: &str) -> String {
    normalize_header(value)
}

#[cfg(test)]
pub(crate) fn parse_year_for_tests(value: &str) -> Option<i32> {
    parse_year(value)
}
