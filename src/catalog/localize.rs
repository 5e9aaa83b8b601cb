//! Localized dish text
//!
//! A dish carries a base field plus optional French and Cantonese variants.
//! The same resolution is used for rendering cards and for building the
//! search haystack, so what the user sees is exactly what they can search.

use super::model::MenuItem;
use crate::i18n::Language;
use std::borrow::Cow;

/// Suffix appended to the dish name when no explicit image prompt is given
pub const DEFAULT_PROMPT_SUFFIX: &str = "Parisian bistro plating, appetizing.";

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Pick the text to display for `lang`.
///
/// - English: always `base`
/// - French: `fr`, else `base`
/// - Cantonese: `zh`, else `fr`, else `base`
///
/// Empty variants count as missing.
pub fn resolve<'a>(
    lang: Language,
    base: &'a str,
    fr: Option<&'a str>,
    zh: Option<&'a str>,
) -> &'a str {
    match lang {
        Language::English => base,
        Language::French => present(fr).unwrap_or(base),
        Language::Cantonese => present(zh).or_else(|| present(fr)).unwrap_or(base),
    }
}

impl MenuItem {
    /// Name to display for `lang`; never empty
    pub fn display_name(&self, lang: Language) -> &str {
        resolve(
            lang,
            self.base_name(),
            self.name_fr.as_deref(),
            self.name_zh.as_deref(),
        )
    }

    /// Description to display for `lang`; empty when the dish has none
    pub fn display_description(&self, lang: Language) -> &str {
        resolve(
            lang,
            self.description.as_deref().unwrap_or(""),
            self.description_fr.as_deref(),
            self.description_zh.as_deref(),
        )
    }

    /// Image-generation prompt, derived from the base name when absent
    pub fn prompt(&self) -> Cow<'_, str> {
        match present(self.image_prompt.as_deref()) {
            Some(prompt) => Cow::Borrowed(prompt),
            None => Cow::Owned(format!("{}. {}", self.base_name(), DEFAULT_PROMPT_SUFFIX)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soupe() -> MenuItem {
        MenuItem {
            name: "Soupe".to_string(),
            name_zh: Some("湯".to_string()),
            ..MenuItem::default()
        }
    }

    #[test]
    fn test_french_falls_back_to_base() {
        assert_eq!(soupe().display_name(Language::French), "Soupe");
    }

    #[test]
    fn test_cantonese_prefers_its_own_field() {
        assert_eq!(soupe().display_name(Language::Cantonese), "湯");
    }

    #[test]
    fn test_cantonese_falls_back_to_french_then_base() {
        let mut item = MenuItem::named("Pissaladière");
        item.name_fr = Some("Pissaladière niçoise".to_string());
        item.name_zh = Some(String::new());
        assert_eq!(item.display_name(Language::Cantonese), "Pissaladière niçoise");

        item.name_fr = None;
        assert_eq!(item.display_name(Language::Cantonese), "Pissaladière");
    }

    #[test]
    fn test_english_ignores_variants() {
        let mut item = soupe();
        item.name_fr = Some("Soupe au pistou".to_string());
        assert_eq!(item.display_name(Language::English), "Soupe");
    }

    #[test]
    fn test_display_name_never_empty() {
        let mut item = MenuItem::default();
        item.name_fr = Some(String::new());
        for lang in Language::ALL {
            assert!(!item.display_name(lang).is_empty());
        }
    }

    #[test]
    fn test_description_may_be_empty() {
        let item = MenuItem::named("Socca");
        assert_eq!(item.display_description(Language::French), "");

        let mut item = item;
        item.description = Some("Chickpea pancake".to_string());
        item.description_fr = Some("Galette de pois chiches".to_string());
        assert_eq!(
            item.display_description(Language::Cantonese),
            "Galette de pois chiches"
        );
    }

    #[test]
    fn test_default_prompt_derivation() {
        let item = MenuItem::named("Tarte Tatin");
        assert_eq!(
            item.prompt(),
            "Tarte Tatin. Parisian bistro plating, appetizing."
        );
    }

    #[test]
    fn test_explicit_prompt_wins() {
        let mut item = MenuItem::named("Tarte Tatin");
        item.image_prompt = Some("Caramelized apples, overhead shot".to_string());
        assert_eq!(item.prompt(), "Caramelized apples, overhead shot");
    }
}
