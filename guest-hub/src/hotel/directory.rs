//! Hotel slug → table URLs
//!
//! The default hotel reads the unprefixed variables (`SHEET_CONFIG_URL`, or
//! the older `GOOGLE_CONFIG_CSV` names). Further hotels are listed in
//! `HOTELS` and read `<SLUG>_SHEET_CONFIG_URL` and friends.

use std::collections::BTreeMap;

use serde::Serialize;

/// Published table URLs of one hotel; empty means not configured
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSources {
    pub settings_url: String,
    pub strings_url: String,
    pub menus_url: String,
}

impl HotelSources {
    pub fn new(
        settings_url: impl Into<String>,
        strings_url: impl Into<String>,
        menus_url: impl Into<String>,
    ) -> Self {
        Self {
            settings_url: settings_url.into(),
            strings_url: strings_url.into(),
            menus_url: menus_url.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HotelDirectory {
    default_slug: String,
    hotels: BTreeMap<String, HotelSources>,
}

const SETTINGS_VARS: &[&str] = &["SHEET_CONFIG_URL", "GOOGLE_CONFIG_CSV"];
const STRINGS_VARS: &[&str] = &["SHEET_I18N_URL", "GOOGLE_I18N_CSV"];
const MENUS_VARS: &[&str] = &["SHEET_MENUS_URL", "GOOGLE_MENU_CSV"];

/// Normalized form of a slug as used for lookups
pub fn normalize_slug(slug: &str) -> String {
    slug.trim().to_ascii_lowercase()
}

/// Prefix of a hotel's per-slug variables: `grand-hotel` → `GRAND_HOTEL_`
pub fn env_prefix(slug: &str) -> String {
    let mut prefix: String = slug
        .trim()
        .chars()
        .map(|c| if c == '-' { '_' } else { c.to_ascii_uppercase() })
        .collect();
    prefix.push('_');
    prefix
}

impl HotelDirectory {
    pub fn new(default_slug: impl AsRef<str>) -> Self {
        Self {
            default_slug: normalize_slug(default_slug.as_ref()),
            hotels: BTreeMap::new(),
        }
    }

    /// Read the directory from process environment
    pub fn from_env(default_slug: &str) -> Self {
        Self::from_lookup(default_slug, |name| std::env::var(name).ok())
    }

    /// Read the directory through an arbitrary variable lookup
    pub fn from_lookup(default_slug: &str, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let first = |names: &[&str]| -> String {
            names
                .iter()
                .filter_map(|name| lookup(*name))
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty())
                .unwrap_or_default()
        };
        let prefixed = |slug: &str, names: &[&str]| -> String {
            let prefix = env_prefix(slug);
            let names: Vec<String> = names.iter().map(|n| format!("{prefix}{n}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            first(&refs)
        };

        let mut directory = Self::new(default_slug);

        let default_slug = directory.default_slug.clone();
        let mut default_sources = HotelSources::new(
            first(SETTINGS_VARS),
            first(STRINGS_VARS),
            first(MENUS_VARS),
        );
        // Unprefixed variables win; the prefixed spelling fills the gaps
        for (field, names) in [
            (&mut default_sources.settings_url, &SETTINGS_VARS[..1]),
            (&mut default_sources.strings_url, &STRINGS_VARS[..1]),
            (&mut default_sources.menus_url, &MENUS_VARS[..1]),
        ] {
            if field.is_empty() {
                *field = prefixed(&default_slug, names);
            }
        }
        directory.insert(&default_slug, default_sources);

        let extra = lookup("HOTELS").unwrap_or_default();
        for slug in extra.split(',').map(normalize_slug).filter(|s| !s.is_empty()) {
            if slug == default_slug {
                continue;
            }
            let sources = HotelSources::new(
                prefixed(&slug, &SETTINGS_VARS[..1]),
                prefixed(&slug, &STRINGS_VARS[..1]),
                prefixed(&slug, &MENUS_VARS[..1]),
            );
            directory.insert(&slug, sources);
        }

        directory
    }

    pub fn insert(&mut self, slug: &str, sources: HotelSources) {
        self.hotels.insert(normalize_slug(slug), sources);
    }

    pub fn with_hotel(mut self, slug: &str, sources: HotelSources) -> Self {
        self.insert(slug, sources);
        self
    }

    pub fn get(&self, slug: &str) -> Option<&HotelSources> {
        self.hotels.get(&normalize_slug(slug))
    }

    pub fn default_slug(&self) -> &str {
        &self.default_slug
    }

    pub fn default_sources(&self) -> Option<&HotelSources> {
        self.hotels.get(&self.default_slug)
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.hotels.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_env_prefix() {
        assert_eq!(env_prefix("grand-hotel"), "GRAND_HOTEL_");
        assert_eq!(env_prefix("demo"), "DEMO_");
    }

    #[test]
    fn test_default_hotel_from_unprefixed_and_legacy_names() {
        let directory = HotelDirectory::from_lookup(
            "demo",
            lookup(&[
                ("SHEET_CONFIG_URL", "https://sheets.example/config"),
                ("GOOGLE_I18N_CSV", "https://sheets.example/i18n"),
                ("SHEET_MENUS_URL", "  "),
            ]),
        );

        let sources = directory.get("demo").unwrap();
        assert_eq!(sources.settings_url, "https://sheets.example/config");
        assert_eq!(sources.strings_url, "https://sheets.example/i18n");
        assert_eq!(sources.menus_url, "");
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_extra_hotels_with_prefixed_vars() {
        let directory = HotelDirectory::from_lookup(
            "demo",
            lookup(&[
                ("HOTELS", "grand-hotel, Demo ,,"),
                ("GRAND_HOTEL_SHEET_CONFIG_URL", "https://sheets.example/grand/config"),
                ("GRAND_HOTEL_SHEET_I18N_URL", "https://sheets.example/grand/i18n"),
            ]),
        );

        assert_eq!(directory.len(), 2);
        let grand = directory.get("Grand-Hotel").unwrap();
        assert_eq!(grand.settings_url, "https://sheets.example/grand/config");
        assert_eq!(grand.menus_url, "");
        assert!(directory.get("unknown").is_none());
    }

    #[test]
    fn test_default_hotel_prefixed_fallback() {
        let directory = HotelDirectory::from_lookup(
            "seaside",
            lookup(&[("SEASIDE_SHEET_CONFIG_URL", "https://sheets.example/s")]),
        );
        assert_eq!(directory.default_slug(), "seaside");
        assert_eq!(
            directory.default_sources().unwrap().settings_url,
            "https://sheets.example/s"
        );
    }
}
