//! Internationalization (i18n) module for Bistro Menu
//!
//! The menu offers three display languages. Dish text comes from the menu
//! document itself (see `catalog::localize`); the chrome strings around it
//! (search placeholder, button labels, toast text) live in the table below.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display language selected with the header toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// Base language; dish `name`/`description` fields are shown as-is
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "zh-hk")]
    Cantonese,
}

impl Language {
    /// All languages in toggle order
    pub const ALL: [Language; 3] = [Language::English, Language::French, Language::Cantonese];

    /// Language code used on the command line and in the config file
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Cantonese => "zh-hk",
        }
    }

    /// Label shown on the toggle button, in the language itself
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "Français",
            Language::Cantonese => "粵語",
        }
    }

    /// Parse a language code, ignoring case and `_`/`-` differences
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase().replace('_', "-");
        match code.as_str() {
            "en" => Some(Language::English),
            "fr" => Some(Language::French),
            "zh-hk" => Some(Language::Cantonese),
            _ => None,
        }
    }

    /// Next language in toggle order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Language::English => Language::French,
            Language::French => Language::Cantonese,
            Language::Cantonese => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Chrome strings that change with the active language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiText {
    SearchPlaceholder,
    GenerateImage,
    CopyPrompt,
    PromptCopied,
    NoMatches,
    EmptyMenu,
}

/// Look up a chrome string for the given language
pub fn tr(lang: Language, key: UiText) -> &'static str {
    use Language::*;
    use UiText::*;

    match (key, lang) {
        (SearchPlaceholder, English) => "Search a dish…",
        (SearchPlaceholder, French) => "Rechercher un plat…",
        (SearchPlaceholder, Cantonese) => "搜尋菜式…",

        (GenerateImage, English) => "Generate image",
        (GenerateImage, French) => "Générer l’image",
        (GenerateImage, Cantonese) => "生成圖片",

        (CopyPrompt, English) => "Copy prompt",
        (CopyPrompt, French) => "Copier le prompt",
        (CopyPrompt, Cantonese) => "複製提示詞",

        (PromptCopied, English) => "Prompt copied",
        (PromptCopied, French) => "Prompt copié",
        (PromptCopied, Cantonese) => "已複製提示詞",

        (NoMatches, English) => "No dishes match your search",
        (NoMatches, French) => "Aucun plat ne correspond à votre recherche",
        (NoMatches, Cantonese) => "冇符合搜尋嘅菜式",

        (EmptyMenu, English) => "The menu is empty",
        (EmptyMenu, French) => "La carte est vide",
        (EmptyMenu, Cantonese) => "菜單暫時冇嘢",
    }
}

/// Initialize localization with the configured default language
pub fn init(lang: Language) {
    log::debug!("i18n initialized, default language {}", lang);
}
