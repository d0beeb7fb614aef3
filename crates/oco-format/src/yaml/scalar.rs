//! Scalar recognition and formatting.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDateTime};
use regex::Regex;

use super::value::{Mapping, Scalar, Yaml, DATE_FORMAT};
use crate::error::{DumpError, YamlError};

const INT_PATTERN: &str = r"^[-+]?\d+\.?$";
const FLOAT_PATTERN: &str = r"^[-+]?(?:\d*\.\d+(?:[eE][-+]?\d+)?|\d+\.\d*[eE][-+]?\d+|\d+[eE][-+]?\d+)$";
const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$";

static INT_REGEX: OnceLock<Regex> = OnceLock::new();
static FLOAT_REGEX: OnceLock<Regex> = OnceLock::new();
static DATE_REGEX: OnceLock<Regex> = OnceLock::new();

fn int_regex() -> &'static Regex {
    INT_REGEX.get_or_init(|| Regex::new(INT_PATTERN).expect("invalid regex pattern"))
}

fn float_regex() -> &'static Regex {
    FLOAT_REGEX.get_or_init(|| Regex::new(FLOAT_PATTERN).expect("invalid regex pattern"))
}

fn date_regex() -> &'static Regex {
    DATE_REGEX.get_or_init(|| Regex::new(DATE_PATTERN).expect("invalid regex pattern"))
}

const NAN: &str = ".nan";
const INFINITY: &str = ".inf";
const NEG_INFINITY: &str = "-.inf";

/// Converts the raw text of a value into a node.
///
/// `line` is the 1-based line number used in errors.
pub(crate) fn parse_scalar(raw: &str, line: usize) -> Result<Yaml, YamlError> {
    let text = raw.trim();

    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        return serde_json::from_str::<String>(text)
            .map(|s| Yaml::Scalar(Scalar::String(s)))
            .map_err(|e| YamlError::QuotedString {
                line,
                message: e.to_string(),
            });
    }
    if text.len() >= 2 && text.starts_with('\'') && text.ends_with('\'') {
        return Ok(Yaml::Scalar(Scalar::String(text[1..text.len() - 1].to_owned())));
    }

    match text {
        "{}" => return Ok(Yaml::Mapping(Mapping::new())),
        "[]" => return Ok(Yaml::Sequence(Vec::new())),
        NAN => return Ok(Yaml::Scalar(Scalar::Float(f64::NAN))),
        INFINITY => return Ok(Yaml::Scalar(Scalar::Float(f64::INFINITY))),
        NEG_INFINITY => return Ok(Yaml::Scalar(Scalar::Float(f64::NEG_INFINITY))),
        _ => {}
    }

    Ok(Yaml::Scalar(plain_scalar(text)))
}

/// Types an unquoted value.
fn plain_scalar(text: &str) -> Scalar {
    if text.eq_ignore_ascii_case("true") {
        return Scalar::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Scalar::Bool(false);
    }
    if int_regex().is_match(text) {
        let digits = text.trim_end_matches('.');
        return match digits.parse::<i64>() {
            Ok(i) => Scalar::Int(i),
            // Out of i64 range
            Err(_) => digits
                .parse::<f64>()
                .map(Scalar::Float)
                .unwrap_or_else(|_| Scalar::String(text.to_owned())),
        };
    }
    if float_regex().is_match(text) {
        if let Ok(f) = text.parse::<f64>() {
            return Scalar::Float(f);
        }
    }
    if date_regex().is_match(text) {
        if let Ok(date) = NaiveDateTime::parse_from_str(text, DATE_FORMAT) {
            return Scalar::Date(date);
        }
    }
    Scalar::String(text.to_owned())
}

/// Writes a scalar so that it loads back as the same scalar.
///
/// Dates need a four-digit year to be recognized again, so other years are
/// refused.
pub(crate) fn format_scalar(scalar: &Scalar) -> Result<String, DumpError> {
    if let Scalar::Date(d) = scalar {
        if !(0..=9999).contains(&d.year()) {
            return Err(DumpError::DateOutOfRange(*d));
        }
    }
    let text = match scalar {
        Scalar::Bool(b) => b.to_string(),
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) if f.is_nan() => NAN.to_owned(),
        Scalar::Float(f) if f.is_infinite() => {
            if *f > 0.0 {
                INFINITY.to_owned()
            } else {
                NEG_INFINITY.to_owned()
            }
        }
        // Debug formatting always keeps a decimal point or an exponent.
        Scalar::Float(f) => format!("{:?}", f),
        Scalar::Date(d) => d.format(DATE_FORMAT).to_string(),
        Scalar::String(s) if needs_quotes(s) => quote(s),
        Scalar::String(s) => s.clone(),
    };
    Ok(text)
}

/// Returns true when a plain string would not load back unchanged.
pub(crate) fn needs_quotes(s: &str) -> bool {
    if s.is_empty() || s != s.trim() {
        return true;
    }
    if s.starts_with(['"', '\'', '#', ':']) || s.starts_with("- ") || s == "-" {
        return true;
    }
    if s.contains(": ") || s.ends_with(':') || s.contains(" #") || s.contains('\t') {
        return true;
    }
    if s.chars().any(char::is_control) {
        return true;
    }
    if matches!(s, "{}" | "[]" | "---" | "..." | NAN | INFINITY | NEG_INFINITY) {
        return true;
    }
    !matches!(plain_scalar(s), Scalar::String(_))
}

/// JSON-escapes and double-quotes a string.
pub(crate) fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}
