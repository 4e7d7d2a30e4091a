//! Guest page view model
//!
//! Everything the guest page shows for one render: labels in the guest's UI
//! language, staff links already routed for the current local time. Layout
//! is left to the client.

use chrono::NaiveTime;
use shared::hotel::{Department, HotelConfiguration};
use shared::response::{HubItem, HubPage, HubSection};

use crate::messaging::{Dispatcher, GuestContext, actions_for, find_action, maps_search_link, phone_link};
use crate::routing::is_department_open;

/// Nearby searches: label key and query prefix
const EXPLORE_SEARCHES: &[(&str, &str)] = &[
    ("attractions", "attractions near "),
    ("restaurants", "restaurants near "),
    ("pharmacy", "pharmacy near "),
];

const UBER_LABEL: &str = "Uber";
/// Offered even when the hotel configures no Uber link
const UBER_FALLBACK_URL: &str = "https://m.uber.com/";

struct PageBuilder<'a> {
    config: &'a HotelConfiguration,
    guest: &'a GuestContext,
    dispatcher: Dispatcher<'a>,
    lang: &'a str,
    now: NaiveTime,
}

impl<'a> PageBuilder<'a> {
    fn t(&self, key: &str) -> String {
        self.config.i18n.text(self.lang, key).to_string()
    }

    fn action_item(&self, key: &str) -> Option<HubItem> {
        let action = find_action(key)?;
        let dispatch = self.dispatcher.action(action, self.guest, &[]);
        Some(HubItem::Link {
            label: self.t(action.label_key),
            href: dispatch.link,
            new_tab: true,
            action: Some(action.key.to_string()),
            department: Some(dispatch.routing.target_department),
        })
    }

    fn department_items(&self, department: Department) -> Vec<HubItem> {
        actions_for(department)
            .filter_map(|action| self.action_item(action.key))
            .collect()
    }

    fn section(&self, id: &str, title_key: &str, items: Vec<HubItem>) -> Option<HubSection> {
        (!items.is_empty()).then(|| HubSection {
            id: id.to_string(),
            title: self.t(title_key),
            subtitle: None,
            items,
        })
    }

    /// Always shown, blank credentials included
    fn wifi(&self) -> Option<HubSection> {
        let wifi = &self.config.wifi;
        let items = vec![
            HubItem::Info {
                label: self.t("wifi_network"),
                info: wifi.ssid.clone(),
            },
            HubItem::Info {
                label: self.t("wifi_show"),
                info: wifi.password.clone(),
            },
        ];
        self.section("wifi", "wifi_title", items)
    }

    fn reception(&self) -> Option<HubSection> {
        let mut items = self.department_items(Department::Reception);
        for provider in &self.config.taxi_providers {
            let href = match (&provider.url, &provider.phone) {
                (Some(url), _) => url.clone(),
                (None, Some(phone)) => phone_link(phone),
                (None, None) => continue,
            };
            items.push(HubItem::Link {
                label: provider.name.clone(),
                href,
                new_tab: provider.url.is_some(),
                action: None,
                department: None,
            });
        }
        let has_uber = self
            .config
            .taxi_providers
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case("uber") && p.url.is_some());
        if !has_uber {
            items.push(HubItem::Link {
                label: UBER_LABEL.to_string(),
                href: UBER_FALLBACK_URL.to_string(),
                new_tab: true,
                action: None,
                department: None,
            });
        }
        self.section("reception", "reception_title", items)
    }

    fn housekeeping(&self) -> Option<HubSection> {
        let mut items = self.department_items(Department::Housekeeping);
        items.extend(self.department_items(Department::Maintenance));

        let open = is_department_open(self.config, Department::Housekeeping, self.now);
        let title_key = if open { "housekeeping_title" } else { "housekeeping_title_after" };
        let mut section = self.section("housekeeping", title_key, items)?;
        if !open {
            section.subtitle = Some(self.t("housekeeping_after_note"));
        }
        Some(section)
    }

    fn explore(&self) -> Option<HubSection> {
        let location = self.config.location_query.trim();
        if location.is_empty() {
            return None;
        }
        let items = EXPLORE_SEARCHES
            .iter()
            .map(|(label_key, prefix)| HubItem::Link {
                label: self.t(label_key),
                href: maps_search_link(&format!("{prefix}{location}")),
                new_tab: true,
                action: None,
                department: None,
            })
            .collect();
        self.section("explore", "explore_title", items)
    }

    fn reviews(&self) -> Option<HubSection> {
        let reviews = &self.config.reviews;
        let items = [
            ("leave_google_review", reviews.google.trim()),
            ("leave_tripadvisor_review", reviews.tripadvisor.trim()),
        ]
        .into_iter()
        .filter(|(_, url)| !url.is_empty())
        .map(|(label_key, url)| HubItem::Link {
            label: self.t(label_key),
            href: url.to_string(),
            new_tab: true,
            action: None,
            department: None,
        })
        .collect();
        self.section("reviews", "reviews_title", items)
    }
}

pub fn build_hub_page(config: &HotelConfiguration, guest: &GuestContext, now: NaiveTime) -> HubPage {
    let lang = config.ui_language(guest.language());
    let builder = PageBuilder {
        config,
        guest,
        dispatcher: Dispatcher::new(config, now),
        lang,
        now,
    };

    let sections = [
        builder.wifi(),
        builder.reception(),
        builder.housekeeping(),
        builder.section("restaurant", "restaurant_title", builder.department_items(Department::Restaurant)),
        builder.section("activities", "activities_title", builder.department_items(Department::Events)),
        builder.explore(),
        builder.reviews(),
    ]
    .into_iter()
    .flatten()
    .collect();

    let phone = config.contacts.reception_phone.trim();

    HubPage {
        hotel_slug: config.slug.clone(),
        hotel_name: config.name.clone(),
        cover_image: config.cover_image.clone(),
        languages: config.languages.clone(),
        language: lang.to_string(),
        room: guest.room().map(str::trim).filter(|r| !r.is_empty()).map(String::from),
        subtitle: config.i18n.get(lang, "hero_subtitle").unwrap_or_default().to_string(),
        notice: config.i18n.get(lang, "notice").unwrap_or_default().to_string(),
        call_reception: (!phone.is_empty()).then(|| phone_link(phone)),
        sections,
        taxi_providers: config.taxi_providers.clone(),
    }
}
