//! Locale data lookup.
//!
//! Only the handful of values the formatters need are carried here: decimal
//! and group separators plus the currency symbol and fraction length used by
//! [`format_currency`](crate::format_currency). Unknown locale tags fall back
//! to `en-US`.

/// Separators and currency data for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub id: &'static str,
    pub decimal_separator: char,
    pub group_separator: char,
    pub currency_symbol: &'static str,
    /// Number of fractional digits of the locale's currency (2 for USD, 0 for JPY).
    pub currency_fraction_length: u32,
}

pub static EN_US: NumberLocale = NumberLocale {
    id: "en-US",
    decimal_separator: '.',
    group_separator: ',',
    currency_symbol: "$",
    currency_fraction_length: 2,
};

pub static EN_GB: NumberLocale = NumberLocale {
    id: "en-GB",
    decimal_separator: '.',
    group_separator: ',',
    currency_symbol: "£",
    currency_fraction_length: 2,
};

pub static DE_DE: NumberLocale = NumberLocale {
    id: "de-DE",
    decimal_separator: ',',
    group_separator: '.',
    currency_symbol: "€",
    currency_fraction_length: 2,
};

/// French (France) groups with U+00A0 NO-BREAK SPACE.
pub static FR_FR: NumberLocale = NumberLocale {
    id: "fr-FR",
    decimal_separator: ',',
    group_separator: '\u{00A0}',
    currency_symbol: "€",
    currency_fraction_length: 2,
};

pub static ES_ES: NumberLocale = NumberLocale {
    id: "es-ES",
    decimal_separator: ',',
    group_separator: '.',
    currency_symbol: "€",
    currency_fraction_length: 2,
};

pub static IT_IT: NumberLocale = NumberLocale {
    id: "it-IT",
    decimal_separator: ',',
    group_separator: '.',
    currency_symbol: "€",
    currency_fraction_length: 2,
};

pub static JA_JP: NumberLocale = NumberLocale {
    id: "ja-JP",
    decimal_separator: '.',
    group_separator: ',',
    currency_symbol: "¥",
    currency_fraction_length: 0,
};

/// Swiss German (`'` grouping, `.` decimal).
pub static DE_CH: NumberLocale = NumberLocale {
    id: "de-CH",
    decimal_separator: '.',
    group_separator: '\'',
    currency_symbol: "CHF",
    currency_fraction_length: 2,
};

static REGISTRY: &[&NumberLocale] = &[
    &EN_US, &EN_GB, &DE_DE, &FR_FR, &ES_ES, &IT_IT, &JA_JP, &DE_CH,
];

/// Language-only tags resolve to a default region.
static LANGUAGE_DEFAULTS: &[(&str, &NumberLocale)] = &[
    ("en", &EN_US),
    ("de", &DE_DE),
    ("fr", &FR_FR),
    ("es", &ES_ES),
    ("it", &IT_IT),
    ("ja", &JA_JP),
];

fn normalize_locale_id(id: &str) -> Option<String> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return None;
    }

    // `-` and `_` are equivalent and matching is case-insensitive.
    let mut key: String = trimmed
        .chars()
        .map(|ch| match ch {
            '_' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect();

    // POSIX suffixes (`en_US.UTF-8`, `de_DE@euro`) and BCP-47 extensions.
    for marker in [".", "@", "-u-", "-x-"] {
        if let Some(idx) = key.find(marker) {
            key.truncate(idx);
        }
    }

    Some(key)
}

/// Look up a locale tag in the registry without falling back.
pub fn lookup_locale(id: &str) -> Option<&'static NumberLocale> {
    let key = normalize_locale_id(id)?;

    if let Some(found) = REGISTRY
        .iter()
        .copied()
        .find(|loc| loc.id.eq_ignore_ascii_case(&key))
    {
        return Some(found);
    }

    let language = key.split('-').next().unwrap_or_default();
    LANGUAGE_DEFAULTS
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, loc)| *loc)
}

/// Look up a locale tag, falling back to `en-US` for unknown tags.
pub fn get_locale(id: &str) -> &'static NumberLocale {
    match lookup_locale(id) {
        Some(loc) => loc,
        None => {
            log::debug!(target: "numerics.format", "unknown locale {id:?}, using en-US");
            &EN_US
        }
    }
}

/// One locale tag or an ordered list of tags; the first entry wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locales(Vec<String>);

impl Locales {
    pub fn new(tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(tags.into_iter().map(Into::into).collect())
    }

    /// The tag that drives formatting.
    pub fn primary(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or(EN_US.id)
    }

    pub fn number_locale(&self) -> &'static NumberLocale {
        get_locale(self.primary())
    }

    pub fn is_en_us(&self) -> bool {
        self.number_locale().id == EN_US.id
    }
}

impl Default for Locales {
    fn default() -> Self {
        Self(vec![EN_US.id.to_string()])
    }
}

impl From<&str> for Locales {
    fn from(tag: &str) -> Self {
        Self(vec![tag.to_string()])
    }
}

impl From<String> for Locales {
    fn from(tag: String) -> Self {
        Self(vec![tag])
    }
}

impl From<Vec<&str>> for Locales {
    fn from(tags: Vec<&str>) -> Self {
        Self::new(tags)
    }
}

impl From<&[&str]> for Locales {
    fn from(tags: &[&str]) -> Self {
        Self::new(tags.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_and_separator_insensitive() {
        assert_eq!(lookup_locale("de_de"), Some(&DE_DE));
        assert_eq!(lookup_locale("EN-us"), Some(&EN_US));
        assert_eq!(lookup_locale("fr_FR.UTF-8"), Some(&FR_FR));
        assert_eq!(lookup_locale("de-DE-u-nu-latn"), Some(&DE_DE));
    }

    #[test]
    fn language_only_tags_use_default_region() {
        assert_eq!(lookup_locale("de"), Some(&DE_DE));
        assert_eq!(lookup_locale("en-AU"), Some(&EN_US));
    }

    #[test]
    fn unknown_tags_fall_back_to_en_us() {
        assert_eq!(lookup_locale("zz-ZZ"), None);
        assert_eq!(get_locale("zz-ZZ"), &EN_US);
        assert_eq!(get_locale(""), &EN_US);
    }

    #[test]
    fn first_locale_wins() {
        let locales = Locales::from(vec!["de-DE", "en-US"]);
        assert_eq!(locales.primary(), "de-DE");
        assert_eq!(locales.number_locale().decimal_separator, ',');
        assert!(Locales::default().is_en_us());
        assert_eq!(Locales::new(Vec::<String>::new()).primary(), "en-US");
    }
}
