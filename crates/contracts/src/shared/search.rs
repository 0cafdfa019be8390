//! Client-side search over bilingual reference lists.

use super::localized::LocalizedName;

/// Normalizes user input and record text before comparison.
///
/// Lowercases, collapses whitespace, drops Arabic harakat (U+064B..=U+0652)
/// and tatweel (U+0640), so vocalized Arabic matches its plain form.
pub fn normalize_search(input: &str) -> String {
    input
        .chars()
        .filter(|c| !is_arabic_mark(*c))
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_arabic_mark(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}' | '\u{0640}')
}

/// True when `query` is blank or found in either name or in `code`
pub fn matches_reference(query: &str, names: &LocalizedName, code: Option<&str>) -> bool {
    let needle = normalize_search(query);
    if needle.is_empty() {
        return true;
    }
    [names.en.as_str(), names.ar.as_str(), code.unwrap_or_default()]
        .iter()
        .any(|hay| normalize_search(hay).contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace_and_case() {
        assert_eq!(normalize_search("  Human   Resources "), "human resources");
        assert_eq!(normalize_search(""), "");
    }

    #[test]
    fn test_normalize_arabic_marks() {
        // "طَعَام" with fatha marks and a tatweel
        assert_eq!(normalize_search("طَعَـام"), "طعام");
    }

    #[test]
    fn test_matches_reference() {
        let names = LocalizedName::new("Human Resources", "الموارد البشرية");
        assert!(matches_reference("human", &names, None));
        assert!(matches_reference("المَوارد", &names, None));
        assert!(matches_reference("0111", &names, Some("A0111")));
        assert!(matches_reference("   ", &names, None));
        assert!(!matches_reference("finance", &names, Some("HR")));
    }
}
