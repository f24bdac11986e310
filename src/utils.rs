//! Common utility functions shared across the codebase.

/// Title-cases text: the first alphabetic character of every word is
/// uppercased and the rest lowercased, with any non-alphabetic character
/// acting as a word boundary.
///
/// # Examples
///
/// ```
/// use ploc::utils::title_case;
///
/// assert_eq!(title_case("title"), "Title");
/// assert_eq!(title_case("api key"), "Api Key");
/// assert_eq!(title_case("userName"), "Username");
/// assert_eq!(title_case("v2 beta"), "V2 Beta");
/// assert_eq!(title_case(""), "");
/// ```
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }

    result
}

/// Derives a human-readable label from the final segment of a dot-path key,
/// turning underscores into spaces before title-casing.
///
/// # Examples
///
/// ```
/// use ploc::utils::display_label;
///
/// assert_eq!(display_label("home.title"), "Title");
/// assert_eq!(display_label("settings.api_key"), "Api Key");
/// assert_eq!(display_label("save"), "Save");
/// ```
pub fn display_label(key: &str) -> String {
    let segment = key.rsplit('.').next().unwrap_or(key);
    title_case(&segment.replace('_', " "))
}
