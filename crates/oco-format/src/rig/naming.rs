//! Unique naming for generated bones.

use std::sync::OnceLock;

use regex::Regex;

/// Matches a trailing number: optional spaces, digits, optional decimals.
const NUMBER_SUFFIX_PATTERN: &str = r"( *)(\d+)([.,]?\d*)$";

static NUMBER_SUFFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn number_suffix_regex() -> &'static Regex {
    NUMBER_SUFFIX_REGEX.get_or_init(|| Regex::new(NUMBER_SUFFIX_PATTERN).expect("invalid regex pattern"))
}

/// Returns `candidate`, numbered if needed so it isn't in `existing`.
///
/// Numbering continues after the greatest number already used with the same
/// base name, keeping its spacing and zero padding. The first duplicate gets
/// ` 2`.
///
/// # Example
/// ```
/// use oco_format::rig::unique_name;
///
/// assert_eq!(unique_name("Arm", &["Leg"]), "Arm");
/// assert_eq!(unique_name("Arm", &["Arm"]), "Arm 2");
/// assert_eq!(unique_name("Arm", &["Arm", "Arm 2"]), "Arm 3");
/// assert_eq!(unique_name("Layer", &["Layer", "Layer_007"]), "Layer 2");
/// assert_eq!(unique_name("Arm", &["Arm", "Arm 007"]), "Arm 008");
/// ```
pub fn unique_name<S: AsRef<str>>(candidate: &str, existing: &[S]) -> String {
    let regex = number_suffix_regex();
    let base = regex.replace(candidate, "").into_owned();

    // Wider than the parsed suffixes so the next number always fits.
    let mut greatest: u128 = 0;
    let mut digits = 0;
    let mut spacing = String::new();

    for name in existing.iter().map(AsRef::as_ref) {
        if name == base {
            if greatest == 0 {
                greatest = 1;
            }
            continue;
        }
        let Some(rest) = name.strip_prefix(base.as_str()) else {
            continue;
        };
        let Some(caps) = regex.captures(rest) else {
            continue;
        };
        // The suffix must be the whole remainder.
        if caps.get(0).map_or(true, |m| m.start() != 0) {
            continue;
        }
        let number_text = &caps[2];
        let Ok(number) = number_text.parse::<u64>() else {
            continue;
        };
        let number = u128::from(number);
        if number >= greatest {
            greatest = number + 1;
            spacing = caps[1].to_owned();
        }
        if number_text.len() > number.to_string().len() {
            digits = digits.max(number_text.len());
        }
    }

    match greatest {
        0 => candidate.to_owned(),
        1 => format!("{} 2", base),
        n => format!("{}{}{:0width$}", base, spacing, n, width = digits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_no_collision_keeps_candidate() {
        assert_eq!(unique_name("Feather", &NONE), "Feather");
        assert_eq!(unique_name("Feather 5", &["Wing"]), "Feather 5");
    }

    #[test]
    fn test_sequence_of_names() {
        let mut names: Vec<String> = Vec::new();
        for _ in 0..4 {
            let name = unique_name("Fishbone", &names);
            names.push(name);
        }
        assert_eq!(names, vec!["Fishbone", "Fishbone 2", "Fishbone 3", "Fishbone 4"]);
    }

    #[test]
    fn test_keeps_spacing_of_existing_numbers() {
        assert_eq!(unique_name("Bone", &["Bone1"]), "Bone2");
    }

    #[test]
    fn test_numbered_candidate_uses_base() {
        assert_eq!(unique_name("Arm 2", &["Arm", "Arm 2"]), "Arm 3");
    }

    #[test]
    fn test_largest_suffix_still_gets_a_next_number() {
        let existing = ["Arm", "Arm 18446744073709551615"];
        let name = unique_name("Arm", &existing);
        assert_eq!(name, "Arm 18446744073709551616");
        assert!(!existing.contains(&name.as_str()));
    }
}
