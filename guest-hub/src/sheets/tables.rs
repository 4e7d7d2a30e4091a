//! Typed views over parsed rows
//!
//! - [`SettingsTable`] - key/value settings with fallback-key lookup
//! - [`localized_strings`] - wide or long localization table

use std::collections::HashMap;

use shared::hotel::{LocalizedStringTable, RawRow};

/// Value of the first column whose name matches one of `names`, ignoring case
fn column<'a>(row: &'a RawRow, names: &[&str]) -> Option<&'a str> {
    row.iter()
        .find(|(name, _)| names.iter().any(|n| name.eq_ignore_ascii_case(n)))
        .map(|(_, value)| value.as_str())
}

fn has_column(row: &RawRow, names: &[&str]) -> bool {
    column(row, names).is_some()
}

const KEY_COLUMN: &[&str] = &["key"];
const VALUE_COLUMN: &[&str] = &["value"];
const LANG_COLUMN: &[&str] = &["lang", "language"];

/// Key → value settings of one hotel
///
/// Blank values are kept (the last row for a key wins) but read as absent.
#[derive(Debug, Clone, Default)]
pub struct SettingsTable {
    values: HashMap<String, String>,
}

impl SettingsTable {
    pub fn from_rows(rows: &[RawRow]) -> Self {
        let mut values = HashMap::new();
        for row in rows {
            let Some(key) = column(row, KEY_COLUMN).map(str::trim).filter(|k| !k.is_empty()) else {
                continue;
            };
            let value = column(row, VALUE_COLUMN).unwrap_or("").trim();
            values.insert(key.to_string(), value.to_string());
        }
        Self { values }
    }

    /// Non-blank value of exactly `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// First key in `keys` holding a non-blank value
    pub fn pick<K: AsRef<str>>(&self, keys: &[K]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key.as_ref()))
    }

    pub fn pick_or<K: AsRef<str>>(&self, keys: &[K], default: &str) -> String {
        self.pick(keys).unwrap_or(default).to_string()
    }

    /// Boolean setting: only `true` (any case) is true once the key is set
    pub fn pick_bool<K: AsRef<str>>(&self, keys: &[K], default: bool) -> bool {
        self.pick(keys)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(default)
    }

    /// Comma-separated list with blank items dropped
    pub fn pick_list<K: AsRef<str>>(&self, keys: &[K]) -> Option<Vec<String>> {
        let list: Vec<String> = self
            .pick(keys)?
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        (!list.is_empty()).then_some(list)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Build the localized string table, detecting the table shape
///
/// - long: columns `key`, `lang` (or `language`) and `value`, one row per pair
/// - wide: column `key` plus one column per language tag
///
/// Blank cells are not recorded; later rows overwrite earlier ones.
pub fn localized_strings(rows: &[RawRow]) -> LocalizedStringTable {
    let mut table = LocalizedStringTable::new();
    let Some(first) = rows.first() else {
        return table;
    };

    let is_long = has_column(first, KEY_COLUMN)
        && has_column(first, VALUE_COLUMN)
        && has_column(first, LANG_COLUMN);

    for row in rows {
        let Some(key) = column(row, KEY_COLUMN).map(str::trim).filter(|k| !k.is_empty()) else {
            continue;
        };

        if is_long {
            let lang = column(row, LANG_COLUMN).unwrap_or("").trim();
            let value = column(row, VALUE_COLUMN).unwrap_or("").trim();
            if !lang.is_empty() && !value.is_empty() {
                table.insert(lang, key, value);
            }
            continue;
        }

        for (lang, value) in row {
            if lang.eq_ignore_ascii_case("key") {
                continue;
            }
            let value = value.trim();
            if !value.is_empty() {
                table.insert(lang.trim(), key, value);
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::parse_table;

    #[test]
    fn test_settings_pick_skips_blank_and_orders_fallbacks() {
        let rows = parse_table("key,value\nwhatsappHousekeeping,   \nwhatsapp_housekeeping,359888\n");
        let settings = SettingsTable::from_rows(&rows);

        assert_eq!(settings.get("whatsappHousekeeping"), None);
        assert_eq!(
            settings.pick(&["whatsappHousekeeping", "whatsapp_housekeeping"]),
            Some("359888")
        );
        assert_eq!(settings.pick_or(&["missing"], "fallback"), "fallback");
    }

    #[test]
    fn test_settings_header_case_and_last_wins() {
        let rows = parse_table("Key,VALUE\nhotelName,First\nhotelName,Second\n");
        let settings = SettingsTable::from_rows(&rows);
        assert_eq!(settings.get("hotelName"), Some("Second"));
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn test_settings_last_blank_wins() {
        let rows = parse_table("key,value\nnotice,Pool closed\nnotice,\n");
        let settings = SettingsTable::from_rows(&rows);
        assert_eq!(settings.get("notice"), None);
    }

    #[test]
    fn test_settings_bool_and_list() {
        let rows = parse_table("key,value\nstaffHelperEnabled,FALSE\nlanguages,\" bg, en,,de \"\n");
        let settings = SettingsTable::from_rows(&rows);
        assert!(!settings.pick_bool(&["staffHelperEnabled"], true));
        assert!(settings.pick_bool(&["missing"], true));
        assert_eq!(
            settings.pick_list(&["languages"]).unwrap(),
            vec!["bg".to_string(), "en".into(), "de".into()]
        );
        assert_eq!(settings.pick_list(&["missing"]), None);
    }

    #[test]
    fn test_wide_and_long_shapes_agree() {
        let wide = parse_table("key,bg,en\nwifi_title,Интернет,WiFi\nmsg_towels,Кърпи,\n");
        let long = parse_table(
            "key,lang,value\nwifi_title,bg,Интернет\nwifi_title,en,WiFi\nmsg_towels,bg,Кърпи\nmsg_towels,en,\n",
        );

        let from_wide = localized_strings(&wide);
        let from_long = localized_strings(&long);

        assert_eq!(from_wide, from_long);
        assert_eq!(from_wide.get("en", "wifi_title"), Some("WiFi"));
        assert_eq!(from_wide.get("en", "msg_towels"), None);
        assert_eq!(from_wide.len(), 3);
    }

    #[test]
    fn test_long_shape_language_column_variants() {
        let rows = parse_table("KEY,Language,Value\nnotice,de,Pool geschlossen\n");
        let table = localized_strings(&rows);
        assert_eq!(table.get("de", "notice"), Some("Pool geschlossen"));
    }

    #[test]
    fn test_empty_rows_empty_table() {
        assert!(localized_strings(&[]).is_empty());
    }
}
