//! Response types for the guest hub API

use serde::{Deserialize, Serialize};

use crate::hotel::{Department, Dispatch, TaxiProvider};

/// Data behind one render of a hotel's guest page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubPage {
    pub hotel_slug: String,
    pub hotel_name: String,
    pub cover_image: String,
    pub languages: Vec<String>,
    /// UI language this page was rendered in
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    pub subtitle: String,
    pub notice: String,
    /// `tel:` link of the reception voice number, `None` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_reception: Option<String>,
    pub sections: Vec<HubSection>,
    pub taxi_providers: Vec<TaxiProvider>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubSection {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub items: Vec<HubItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HubItem {
    /// Static text block (WiFi credentials)
    Info { label: String, info: String },
    /// Anything the guest taps
    Link {
        label: String,
        href: String,
        #[serde(rename = "newTab", default)]
        new_tab: bool,
        /// Set for items that open a staff message
        #[serde(skip_serializing_if = "Option::is_none")]
        action: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        department: Option<Department>,
    },
}

/// Answer to a chat question
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
    /// Staff message prepared by the collaborator, routed like any request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch: Option<Dispatch>,
}
