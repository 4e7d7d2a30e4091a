//! Outbound links: phone, WhatsApp, map search

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except the characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const WHATSAPP_BASE: &str = "https://wa.me/";
const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// `tel:` link keeping only digits and `+`
pub fn phone_link(phone: &str) -> String {
    let number: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{number}")
}

/// WhatsApp deep link carrying a pre-filled message
pub fn messaging_link(address: &str, text: &str) -> String {
    format!("{WHATSAPP_BASE}{}?text={}", digits_only(address), encode_component(text))
}

pub fn maps_search_link(query: &str) -> String {
    format!("{MAPS_SEARCH_BASE}{}", encode_component(query.trim()))
}
