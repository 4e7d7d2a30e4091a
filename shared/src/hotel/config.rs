//! Assembled per-hotel configuration snapshot

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::department::Department;
use super::i18n::LocalizedStringTable;

/// One data row of a tabular source: column name → trimmed value
pub type RawRow = HashMap<String, String>;

/// Immutable configuration of one hotel, rebuilt on every load
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelConfiguration {
    pub slug: String,
    pub name: String,
    pub cover_image: String,
    /// Supported UI languages, in display order
    pub languages: Vec<String>,
    pub language_default: String,
    /// Language staff messages are composed in, independent of the guest UI
    pub ops_language: String,
    pub staff_helper: StaffHelper,
    /// IANA time zone name used to evaluate operating hours
    pub timezone: String,
    pub wifi: WifiCredentials,
    pub contacts: Contacts,
    /// Operating window per department; absent ⇒ always open
    pub department_hours: BTreeMap<Department, OperatingWindow>,
    /// Legacy single housekeeping cutoff (HH:MM), used only without a window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub housekeeping_cutoff: Option<String>,
    pub location_query: String,
    pub reviews: ReviewLinks,
    pub taxi_providers: Vec<TaxiProvider>,
    pub i18n: LocalizedStringTable,
    /// Menu table rows, passed through untouched
    pub menus: Vec<RawRow>,
}

impl HotelConfiguration {
    pub fn window(&self, department: Department) -> Option<&OperatingWindow> {
        self.department_hours.get(&department)
    }

    /// Helper language tag when the helper line is switched on
    pub fn helper_language(&self) -> Option<&str> {
        self.staff_helper
            .enabled
            .then_some(self.staff_helper.language.as_str())
    }

    /// UI language actually used for a guest: the requested one when the
    /// hotel supports it, else the hotel default
    pub fn ui_language<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(lang) if self.languages.iter().any(|l| l == lang) => lang,
            _ => &self.language_default,
        }
    }
}

/// Optional second language appended to staff messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffHelper {
    pub enabled: bool,
    pub language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiCredentials {
    pub ssid: String,
    pub password: String,
}

/// Department contacts; reception additionally has a voice number
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contacts {
    pub reception_phone: String,
    /// Messaging (WhatsApp) address per department
    pub whatsapp: BTreeMap<Department, String>,
}

impl Contacts {
    /// Messaging address, empty when not configured
    pub fn whatsapp(&self, department: Department) -> &str {
        self.whatsapp
            .get(&department)
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Opening / closing time-of-day pair, kept as configured
///
/// Bounds are parsed lazily by the hours evaluator so that a malformed
/// value fails open instead of rejecting the whole configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingWindow {
    pub open: String,
    pub close: String,
}

impl OperatingWindow {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewLinks {
    pub google: String,
    pub tripadvisor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxiProvider {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
