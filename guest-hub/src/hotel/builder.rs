//! Settings + strings + menus → [`HotelConfiguration`]
//!
//! Every field is read through [`SettingsTable::pick`] with an ordered list
//! of accepted keys (camelCase first, then the snake_case spelling older
//! sheets use). The builder never fails; anything missing gets a default.

use std::collections::BTreeMap;

use shared::hotel::{
    Contacts, Department, HotelConfiguration, OperatingWindow, RawRow, ReviewLinks, StaffHelper,
    TaxiProvider, WifiCredentials,
};

use crate::sheets::{SettingsTable, localized_strings};

pub const DEFAULT_SLUG: &str = "demo";
pub const DEFAULT_NAME: &str = "Hotel";
pub const DEFAULT_LANGUAGES: &[&str] = &["bg", "en", "de"];
pub const DEFAULT_UI_LANGUAGE: &str = "en";
pub const DEFAULT_OPS_LANGUAGE: &str = "bg";
pub const DEFAULT_HELPER_LANGUAGE: &str = "en";
pub const RECEPTION_OPEN: &str = "00:00";
pub const RECEPTION_CLOSE: &str = "23:59";

/// Values the sheet may leave out that come from the deployment
#[derive(Debug, Clone)]
pub struct BuildDefaults {
    /// Directory slug the tables were loaded for
    pub slug: String,
    /// IANA zone used when the sheet names none
    pub timezone: String,
}

impl Default for BuildDefaults {
    fn default() -> Self {
        Self {
            slug: DEFAULT_SLUG.to_string(),
            timezone: crate::utils::time::DEFAULT_TIMEZONE.to_string(),
        }
    }
}

/// Raw rows of the three hotel tables
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub settings: Vec<RawRow>,
    pub strings: Vec<RawRow>,
    pub menus: Option<Vec<RawRow>>,
}

/// `<dept>Suffix` and `<dept>_suffix` spellings of a per-department key
fn dept_keys(department: Department, camel: &str, snake: &str) -> [String; 2] {
    let dept = department.key();
    [format!("{dept}{camel}"), format!("{dept}_{snake}")]
}

pub fn build(tables: SourceTables, defaults: &BuildDefaults) -> HotelConfiguration {
    let settings = SettingsTable::from_rows(&tables.settings);
    let i18n = localized_strings(&tables.strings);

    let languages = settings.pick_list(&["languages"]).unwrap_or_else(|| {
        DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect()
    });

    let mut whatsapp = BTreeMap::new();
    let mut department_hours = BTreeMap::new();
    for department in Department::ALL {
        if let Some(address) = settings.pick(&dept_keys(department, "Whatsapp", "whatsapp")) {
            whatsapp.insert(department, address.to_string());
        }
        if let Some(window) = operating_window(&settings, department) {
            department_hours.insert(department, window);
        }
    }

    let mut taxi_providers = Vec::new();
    if let Some(url) = settings.pick(&["uberUrl", "uber_url"]) {
        taxi_providers.push(TaxiProvider {
            name: "Uber".to_string(),
            phone: None,
            url: Some(url.to_string()),
        });
    }
    if let Some(phone) = settings.pick(&["taxiPhone", "taxi_phone"]) {
        taxi_providers.push(TaxiProvider {
            name: "Taxi".to_string(),
            phone: Some(phone.to_string()),
            url: None,
        });
    }

    let slug = match defaults.slug.trim() {
        "" => DEFAULT_SLUG,
        slug => slug,
    };

    HotelConfiguration {
        slug: settings.pick_or(&["hotelSlug"], slug),
        name: settings.pick_or(&["hotelName"], DEFAULT_NAME),
        cover_image: settings.pick_or(&["coverImage"], ""),
        languages,
        language_default: settings.pick_or(&["languageDefault"], DEFAULT_UI_LANGUAGE),
        ops_language: settings.pick_or(&["opsLanguage"], DEFAULT_OPS_LANGUAGE),
        staff_helper: StaffHelper {
            enabled: settings.pick_bool(&["staffHelperEnabled"], true),
            language: settings.pick_or(&["staffHelperLanguage"], DEFAULT_HELPER_LANGUAGE),
        },
        timezone: settings.pick_or(&["timezone", "timeZone"], &defaults.timezone),
        wifi: WifiCredentials {
            ssid: settings.pick_or(&["wifiSsid", "wifi_ssid"], ""),
            password: settings.pick_or(&["wifiPassword", "wifi_password"], ""),
        },
        contacts: Contacts {
            reception_phone: settings.pick_or(&["receptionPhone", "reception_phone"], ""),
            whatsapp,
        },
        department_hours,
        housekeeping_cutoff: settings
            .pick(&["housekeepingCutoff", "housekeeping_cutoff"])
            .map(String::from),
        location_query: settings.pick_or(&["locationQuery", "location"], ""),
        reviews: ReviewLinks {
            google: settings.pick_or(&["googleReviewUrl", "reviews_google"], ""),
            tripadvisor: settings.pick_or(&["tripadvisorUrl", "reviews_tripadvisor"], ""),
        },
        taxi_providers,
        i18n,
        menus: tables.menus.unwrap_or_default(),
    }
}

/// Reception always has a window (round the clock by default); the other
/// departments only when the sheet sets at least one bound
fn operating_window(settings: &SettingsTable, department: Department) -> Option<OperatingWindow> {
    let open = settings.pick(&dept_keys(department, "Open", "open"));
    let close = settings.pick(&dept_keys(department, "Close", "close"));

    if department.is_reception() {
        return Some(OperatingWindow::new(
            open.unwrap_or(RECEPTION_OPEN),
            close.unwrap_or(RECEPTION_CLOSE),
        ));
    }

    match (open, close) {
        (None, None) => None,
        (open, close) => Some(OperatingWindow::new(open.unwrap_or(""), close.unwrap_or(""))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::parse_table;

    fn build_from(settings_csv: &str, strings_csv: &str) -> HotelConfiguration {
        build(
            SourceTables {
                settings: parse_table(settings_csv),
                strings: parse_table(strings_csv),
                menus: None,
            },
            &BuildDefaults {
                slug: "seaside".into(),
                timezone: "Europe/Sofia".into(),
            },
        )
    }

    #[test]
    fn test_empty_sources_use_defaults() {
        let config = build_from("", "");

        assert_eq!(config.slug, "seaside");
        assert_eq!(config.name, "Hotel");
        assert_eq!(config.languages, vec!["bg", "en", "de"]);
        assert_eq!(config.language_default, "en");
        assert_eq!(config.ops_language, "bg");
        assert!(config.staff_helper.enabled);
        assert_eq!(config.staff_helper.language, "en");
        assert_eq!(config.timezone, "Europe/Sofia");
        assert_eq!(
            config.window(Department::Reception),
            Some(&OperatingWindow::new("00:00", "23:59"))
        );
        assert_eq!(config.window(Department::Housekeeping), None);
        assert!(config.taxi_providers.is_empty());
        assert!(config.menus.is_empty());
        assert!(config.i18n.is_empty());
    }

    #[test]
    fn test_fallback_keys_and_blank_values() {
        let config = build_from(
            "key,value\n\
             hotelName,Seaside Resort\n\
             wifiSsid,\n\
             wifi_ssid,Seaside-Guest\n\
             wifi_password,sunny2025\n\
             housekeepingWhatsapp,+359 888 111\n\
             restaurant_whatsapp,359888222\n\
             housekeepingOpen,08:00\n\
             housekeeping_close,17:00\n\
             restaurantOpen,12:00\n\
             location,Sunny Beach\n\
             staffHelperEnabled,False\n\
             timeZone,Europe/Berlin\n",
            "",
        );

        assert_eq!(config.name, "Seaside Resort");
        assert_eq!(config.wifi.ssid, "Seaside-Guest");
        assert_eq!(config.wifi.password, "sunny2025");
        assert_eq!(config.contacts.whatsapp(Department::Housekeeping), "+359 888 111");
        assert_eq!(config.contacts.whatsapp(Department::Restaurant), "359888222");
        assert_eq!(config.contacts.whatsapp(Department::Events), "");
        assert_eq!(
            config.window(Department::Housekeeping),
            Some(&OperatingWindow::new("08:00", "17:00"))
        );
        assert_eq!(
            config.window(Department::Restaurant),
            Some(&OperatingWindow::new("12:00", ""))
        );
        assert_eq!(config.location_query, "Sunny Beach");
        assert!(!config.staff_helper.enabled);
        assert_eq!(config.timezone, "Europe/Berlin");
    }

    #[test]
    fn test_taxi_providers_and_reviews() {
        let config = build_from(
            "key,value\n\
             uber_url,https://m.uber.com/\n\
             taxiPhone,+359 2 91 263\n\
             googleReviewUrl,https://g.page/r/x\n\
             reviews_tripadvisor,https://tripadvisor.example/h\n\
             housekeeping_cutoff,16:00\n",
            "",
        );

        assert_eq!(config.taxi_providers.len(), 2);
        assert_eq!(config.taxi_providers[0].name, "Uber");
        assert_eq!(config.taxi_providers[0].url.as_deref(), Some("https://m.uber.com/"));
        assert_eq!(config.taxi_providers[1].name, "Taxi");
        assert_eq!(config.taxi_providers[1].phone.as_deref(), Some("+359 2 91 263"));
        assert_eq!(config.reviews.google, "https://g.page/r/x");
        assert_eq!(config.reviews.tripadvisor, "https://tripadvisor.example/h");
        assert_eq!(config.housekeeping_cutoff.as_deref(), Some("16:00"));
    }

    #[test]
    fn test_strings_and_menus_pass_through() {
        let config = build(
            SourceTables {
                settings: parse_table("key,value\nhotelSlug,custom\n"),
                strings: parse_table("key,bg,en\nmsg_towels,Моля кърпи,Towels please\n"),
                menus: Some(parse_table("name,price\nSoup,5\n")),
            },
            &BuildDefaults::default(),
        );

        assert_eq!(config.slug, "custom");
        assert_eq!(config.i18n.get("bg", "msg_towels"), Some("Моля кърпи"));
        assert_eq!(config.menus.len(), 1);
        assert_eq!(config.menus[0]["name"], "Soup");
    }

    #[test]
    fn test_registry_shape_builds() {
        // settings + strings only, no hours / menus / taxi
        let config = build_from(
            "key,value\nhotelName,Tiny Inn\nreceptionWhatsapp,359111\n",
            "key,en\nwifi_title,WiFi\n",
        );
        assert_eq!(config.name, "Tiny Inn");
        assert_eq!(config.contacts.whatsapp(Department::Reception), "359111");
        assert_eq!(config.department_hours.len(), 1);
    }
}
