use regex::Regex;
use std::sync::LazyLock;

/// A plausible label value: up to four integer digits, optionally a comma
/// or dot and up to two decimals, standing free of surrounding word
/// characters. The boundary requirement keeps the "2" in "Ca2+" or the
/// "3" in "HCO3" from being read as a measurement.
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{1,4}(?:[.,][0-9]{1,2})?\b").expect("valid number pattern")
});

/// First number at or after byte offset `from`, decimal comma accepted.
pub fn extract_number(line: &str, from: usize) -> Option<f64> {
    let rest = line.get(from..)?;
    let m = NUMBER.find(rest)?;
    let value: f64 = m.as_str().replace(',', ".").parse().ok()?;
    value.is_finite().then_some(value)
}
