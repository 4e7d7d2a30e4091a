//! Per-request configuration load
//!
//! The three tables are fetched concurrently. Settings and strings are
//! required; a menu failure only costs the menu.

use shared::hotel::HotelConfiguration;

use super::builder::{BuildDefaults, SourceTables, build};
use super::directory::HotelSources;
use crate::sheets::{SourceError, TableFetcher};

pub async fn load_hotel(
    fetcher: &dyn TableFetcher,
    sources: &HotelSources,
    defaults: &BuildDefaults,
) -> Result<HotelConfiguration, SourceError> {
    if sources.settings_url.trim().is_empty() {
        return Err(SourceError::UrlMissing("settings"));
    }
    if sources.strings_url.trim().is_empty() {
        return Err(SourceError::UrlMissing("strings"));
    }

    let (settings, strings, menus) = tokio::join!(
        fetcher.fetch_rows(&sources.settings_url),
        fetcher.fetch_rows(&sources.strings_url),
        fetcher.fetch_rows(&sources.menus_url),
    );

    let settings = settings?;
    let strings = strings?;
    let menus = match menus {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!(slug = %defaults.slug, error = %e, "Menu table unavailable, continuing without menus");
            Vec::new()
        }
    };

    tracing::info!(
        slug = %defaults.slug,
        settings = settings.len(),
        strings = strings.len(),
        menus = menus.len(),
        "Hotel configuration loaded"
    );

    Ok(build(
        SourceTables {
            settings,
            strings,
            menus: Some(menus),
        },
        defaults,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::MemoryTableFetcher;

    fn defaults() -> BuildDefaults {
        BuildDefaults {
            slug: "demo".into(),
            timezone: "UTC".into(),
        }
    }

    #[tokio::test]
    async fn test_load_with_menu_failure_degrades() {
        let fetcher = MemoryTableFetcher::new()
            .with_table("mem://config", "key,value\nhotelName,Demo Hotel\n")
            .with_table("mem://i18n", "key,en\nwifi_title,WiFi\n");
        let sources = HotelSources::new("mem://config", "mem://i18n", "mem://missing-menu");

        let config = load_hotel(&fetcher, &sources, &defaults()).await.unwrap();
        assert_eq!(config.name, "Demo Hotel");
        assert_eq!(config.i18n.get("en", "wifi_title"), Some("WiFi"));
        assert!(config.menus.is_empty());
    }

    #[tokio::test]
    async fn test_load_strings_failure_is_fatal() {
        let fetcher = MemoryTableFetcher::new().with_table("mem://config", "key,value\n");
        let sources = HotelSources::new("mem://config", "mem://gone", "");

        let err = load_hotel(&fetcher, &sources, &defaults()).await.unwrap_err();
        assert!(matches!(err, SourceError::Unknown(url) if url == "mem://gone"));
    }

    #[tokio::test]
    async fn test_load_missing_url_is_fatal() {
        let fetcher = MemoryTableFetcher::new();
        let sources = HotelSources::new("", "mem://i18n", "");

        let err = load_hotel(&fetcher, &sources, &defaults()).await.unwrap_err();
        assert!(matches!(err, SourceError::UrlMissing("settings")));
    }
}
