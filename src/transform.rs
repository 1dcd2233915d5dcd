//! Pure string transforms used by derived questions, and the yes/no
//! canonicalization applied to overrides of yes/no questions.

/// Signature shared by every derivation.
pub type Transform = fn(&str) -> String;

/// Inputs accepted as an affirmative answer (compared case-insensitively).
pub const YES_VALUES: [&str; 7] = ["y", "yes", "1", "true", "confirm", "i do", "i am"];

pub const YES: &str = "yes";
pub const NO: &str = "no";

/// Maps any input to `"yes"` or `"no"`. Unknown input is a `"no"`, never an error.
pub fn canonicalize_yes_no(value: &str) -> &'static str {
    let lowered = value.to_lowercase();
    if YES_VALUES.contains(&lowered.as_str()) {
        YES
    } else {
        NO
    }
}

fn keep_chars(source: &str, extra: [char; 2]) -> String {
    source.chars().filter(|c| c.is_ascii_alphanumeric() || extra.contains(c)).collect()
}

/// Splits on runs of spaces and underscores. Leading and trailing
/// separators still produce an empty first or last word.
fn split_words(source: &str) -> Vec<&str> {
    let pieces: Vec<&str> = source.split([' ', '_']).collect();
    let last = pieces.len() - 1;
    pieces
        .into_iter()
        .enumerate()
        .filter(|(index, piece)| !piece.is_empty() || *index == 0 || *index == last)
        .map(|(_, piece)| piece)
        .collect()
}

/// `"My Cool Plugin!"` -> `"my-cool-plugin"`. Also used for the composer vendor.
pub fn package_name(source: &str) -> String {
    keep_chars(source, [' ', '-']).to_lowercase().replace(' ', "-")
}

/// `"My Cool Plugin!"` -> `"MyCoolPlugin"`.
pub fn namespace(source: &str) -> String {
    let lowered = keep_chars(source, [' ', '_']).to_lowercase();
    split_words(&lowered)
        .into_iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// `"My Cool Plugin!"` -> `"MY_COOL_PLUGIN"`.
pub fn constant_prefix(source: &str) -> String {
    let kept = keep_chars(source, [' ', '_']);
    split_words(&kept).join("_").to_uppercase()
}

/// `"MY_COOL_PLUGIN"` -> `"my_cool_plugin"`.
pub fn lower_case(source: &str) -> String {
    source.to_lowercase()
}
