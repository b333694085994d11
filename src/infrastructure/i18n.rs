//! Bundled message catalogs

use crate::error::DetagError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

const EN: &[(&str, &str)] = &[
    ("title", "Clear Tags"),
    ("cleanTag", "Clean tags"),
    ("clearTagsSuccess", "Tags cleared successfully"),
    ("clearTagsError", "Failed to clear tags"),
];

const ZH: &[(&str, &str)] = &[
    ("title", "清除标签"),
    ("cleanTag", "清理标签"),
    ("clearTagsSuccess", "标签清除成功"),
    ("clearTagsError", "清除标签失败"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    fn catalog(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => EN,
            Locale::Zh => ZH,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Accepts bare language codes and region-qualified tags (`zh-CN`, `en_US`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Zh => f.write_str("zh"),
        }
    }
}

/// Parse a locale, reporting failures as configuration errors
pub fn parse_locale(s: &str) -> crate::error::Result<Locale> {
    Locale::from_str(s).map_err(DetagError::Config)
}

/// Message lookup for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Messages { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up `key`, falling back to English and then to the key itself
    pub fn get<'a>(&self, key: &'a str) -> &'a str {
        lookup(self.locale.catalog(), key)
            .or_else(|| lookup(EN, key))
            .unwrap_or(key)
    }
}

fn lookup<'a>(catalog: &'a [(&'a str, &'a str)], key: &str) -> Option<&'a str> {
    catalog
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, message)| *message)
}
