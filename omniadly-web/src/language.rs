use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
        (
            "vi",
            LanguageInfo {
                code: "vi",
                flag: "🇻🇳",
                translation: include_str!("../translations/vi.json"),
                native_name: "Tiếng Việt",
            },
        ),
    ])
}

/// Supported languages ordered by native name.
pub fn sorted_languages() -> Vec<LanguageInfo> {
    let mut languages: Vec<_> = supported_languages().into_values().collect();
    languages.sort_by(|a, b| a.native_name.cmp(b.native_name));
    languages
}
