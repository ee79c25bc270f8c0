//! Locale resolution.
//!
//! Callers hand us whatever the platform reports ("en-US", "fr", "de_DE.UTF-8").
//! chrono only knows full glibc-style names such as `fr_FR`, so tags are
//! normalized and, when only a language is given, paired with a default region.

use chrono::Locale;
use tracing::warn;

/// Locale used when a tag cannot be resolved. Renders English names.
pub const DEFAULT_LOCALE: Locale = Locale::POSIX;

/// Regions to use for bare language tags where `<lang>_<LANG>` is not a real locale.
const DEFAULT_REGIONS: &[(&str, &str)] = &[
    ("ar", "SA"),
    ("ca", "ES"),
    ("cs", "CZ"),
    ("da", "DK"),
    ("el", "GR"),
    ("en", "US"),
    ("et", "EE"),
    ("fa", "IR"),
    ("ga", "IE"),
    ("he", "IL"),
    ("hi", "IN"),
    ("ja", "JP"),
    ("ko", "KR"),
    ("ms", "MY"),
    ("nb", "NO"),
    ("sl", "SI"),
    ("sr", "RS"),
    ("sv", "SE"),
    ("uk", "UA"),
    ("vi", "VN"),
    ("zh", "CN"),
];

/// Macrolanguage tags with no glibc locale of their own.
const LANGUAGE_ALIASES: &[(&str, &str)] = &[("no", "nb")];

/// Resolve a locale tag, falling back to [`DEFAULT_LOCALE`] when it is not supported.
pub fn resolve_locale(tag: &str) -> Locale {
    match try_resolve_locale(tag) {
        Some(locale) => locale,
        None => {
            warn!(locale = tag, "Unsupported locale, using default");
            DEFAULT_LOCALE
        }
    }
}

/// Resolve a locale tag, or `None` if no supported locale matches.
pub fn try_resolve_locale(tag: &str) -> Option<Locale> {
    // Drop encoding and modifier suffixes: "de_DE.UTF-8", "ca_ES@valencia"
    let base = tag.trim().split(['.', '@']).next().unwrap_or_default();

    let mut subtags = base.split(['-', '_']).filter(|s| !s.is_empty());
    let mut language = subtags.next()?.to_ascii_lowercase();
    if let Some((_, alias)) = LANGUAGE_ALIASES.iter().find(|(tag, _)| *tag == language) {
        language = (*alias).to_string();
    }

    if language == "c" || language == "posix" {
        return Some(Locale::POSIX);
    }

    // Script subtags ("Hant") are skipped, the region is the last one that looks like a region.
    let region = subtags
        .filter(|s| is_region_subtag(s))
        .last()
        .map(|s| s.to_ascii_uppercase());

    if let Some(region) = region {
        if let Some(locale) = lookup(&format!("{language}_{region}")) {
            return Some(locale);
        }
    }

    let region = DEFAULT_REGIONS
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, region)| (*region).to_string())
        .unwrap_or_else(|| language.to_ascii_uppercase());

    lookup(&language).or_else(|| lookup(&format!("{language}_{region}")))
}

fn lookup(name: &str) -> Option<Locale> {
    Locale::try_from(name).ok()
}

fn is_region_subtag(s: &str) -> bool {
    (s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
        || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_bcp47_tags() {
        assert_eq!(try_resolve_locale("en-US"), Some(Locale::en_US));
        assert_eq!(try_resolve_locale("fr-CA"), Some(Locale::fr_CA));
        assert_eq!(try_resolve_locale("pt-br"), Some(Locale::pt_BR));
    }

    #[test]
    fn resolves_bare_languages() {
        assert_eq!(try_resolve_locale("fr"), Some(Locale::fr_FR));
        assert_eq!(try_resolve_locale("de"), Some(Locale::de_DE));
        assert_eq!(try_resolve_locale("en"), Some(Locale::en_US));
        assert_eq!(try_resolve_locale("ja"), Some(Locale::ja_JP));
    }

    #[test]
    fn norwegian_resolves_to_bokmal() {
        assert_eq!(try_resolve_locale("no"), Some(Locale::nb_NO));
        assert_eq!(try_resolve_locale("no-NO"), Some(Locale::nb_NO));
        assert_eq!(try_resolve_locale("nb"), Some(Locale::nb_NO));
    }

    #[test]
    fn strips_encoding_and_modifiers() {
        assert_eq!(try_resolve_locale("de_DE.UTF-8"), Some(Locale::de_DE));
        assert_eq!(try_resolve_locale("C.UTF-8"), Some(Locale::POSIX));
    }

    #[test]
    fn skips_script_subtags() {
        assert_eq!(try_resolve_locale("zh-Hant-TW"), Some(Locale::zh_TW));
    }

    #[test]
    fn unknown_region_falls_back_to_language_default() {
        assert_eq!(try_resolve_locale("fr-XX"), Some(Locale::fr_FR));
    }

    #[test]
    fn unsupported_tags_use_default() {
        assert_eq!(try_resolve_locale("xx-YY"), None);
        assert_eq!(try_resolve_locale(""), None);
        assert_eq!(resolve_locale("klingon"), DEFAULT_LOCALE);
    }
}
