/// Supported language codes and the Portuguese names used inside prompts.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("pt", "português"),
    ("en", "inglês"),
    ("es", "espanhol"),
];

/// Resolve a language code to its display name.
/// Matching is exact and case-sensitive; unknown codes yield `None`.
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(supported, _)| *supported == code)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_supported_codes() {
        assert_eq!(language_name("pt"), Some("português"));
        assert_eq!(language_name("en"), Some("inglês"));
        assert_eq!(language_name("es"), Some("espanhol"));
    }

    #[test]
    fn unknown_codes_are_not_resolved() {
        assert_eq!(language_name("fr"), None);
        assert_eq!(language_name(""), None);
        assert_eq!(language_name("PT"), None);
        assert_eq!(language_name("pt "), None);
    }

    #[test]
    fn display_names_are_not_codes() {
        // a name must never validate as its own code
        assert_eq!(language_name("português"), None);
        assert_eq!(language_name("inglês"), None);
    }
}
