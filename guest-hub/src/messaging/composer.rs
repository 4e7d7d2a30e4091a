//! Staff message composition
//!
//! Staff read messages in the operator language whatever language the guest
//! uses. When the helper is on, the same text follows in the helper language:
//!
//! ```text
//! Room 12 - Моля, донесете кърпи
//!
//! EN: Room 12 - Please bring towels
//! ```

use shared::hotel::{HotelConfiguration, LocalizedStringTable, ReservationDetails, ReservationField};

/// Placeholder filled from guest-supplied details
pub const PLACEHOLDER: &str = "____";

pub const NO_OCCASION_KEY: &str = "res_no_occasion";
pub const NO_OCCASION_DEFAULT: &str = "No occasion";

/// Second-language block appended to a staff message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelperLine<'a> {
    pub language: &'a str,
    pub text: &'a str,
}

/// `"Room {id} - "` for a non-blank room id
pub fn room_prefix(room: Option<&str>) -> String {
    match room.map(str::trim) {
        Some(room) if !room.is_empty() => format!("Room {room} - "),
        _ => String::new(),
    }
}

pub fn compose(room: Option<&str>, operator_text: &str, helper: Option<HelperLine<'_>>) -> String {
    let prefix = room_prefix(room);
    let mut message = format!("{prefix}{operator_text}");
    if let Some(helper) = helper {
        message.push_str(&format!(
            "\n\n{}: {prefix}{}",
            helper.language.to_uppercase(),
            helper.text
        ));
    }
    message
}

/// Replace `____` placeholders in order; blank or missing values leave the placeholder
pub fn fill_blanks(template: &str, values: &[String]) -> String {
    let mut parts = template.split(PLACEHOLDER);
    let mut values = values.iter();
    let mut filled = String::with_capacity(template.len());

    if let Some(head) = parts.next() {
        filled.push_str(head);
    }
    for part in parts {
        match values.next().map(|v| v.trim()).filter(|v| !v.is_empty()) {
            Some(value) => filled.push_str(value),
            None => filled.push_str(PLACEHOLDER),
        }
        filled.push_str(part);
    }
    filled
}

/// Composes staff messages for one hotel
pub struct Composer<'a> {
    config: &'a HotelConfiguration,
}

impl<'a> Composer<'a> {
    pub fn new(config: &'a HotelConfiguration) -> Self {
        Self { config }
    }

    fn strings(&self) -> &'a LocalizedStringTable {
        &self.config.i18n
    }

    /// Helper language, only when the helper is on
    fn helper_language(&self) -> Option<&'a str> {
        self.config
            .helper_language()
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
    }

    /// Operator-language text of `key`, then `fallback`, then the key itself
    pub fn operator_text(&self, key: &'a str, fallback: Option<&'a str>) -> &'a str {
        let ops = self.config.ops_language.as_str();
        match self.strings().get(ops, key).filter(|t| !t.trim().is_empty()) {
            Some(text) => text,
            None => fallback.unwrap_or(key),
        }
    }

    /// Helper-language text of `key`, `None` when the helper is off or the text is missing
    pub fn helper_text(&self, key: &str) -> Option<(&'a str, &'a str)> {
        let lang = self.helper_language()?;
        let text = self.strings().get(lang, key).filter(|t| !t.trim().is_empty())?;
        Some((lang, text))
    }

    /// Message for a catalog template key with `____` filled from `details`
    pub fn template_message(
        &self,
        room: Option<&str>,
        key: &'a str,
        fallback: Option<&'a str>,
        details: &[String],
    ) -> String {
        let operator = fill_blanks(self.operator_text(key, fallback), details);
        let helper = self
            .helper_text(key)
            .map(|(lang, text)| (lang, fill_blanks(text, details)));

        compose(
            room,
            &operator,
            helper.as_ref().map(|(language, text)| HelperLine {
                language: *language,
                text: text.as_str(),
            }),
        )
    }

    /// Message passed through verbatim (chat collaborator output)
    pub fn plain_message(&self, room: Option<&str>, text: &str) -> String {
        compose(room, text, None)
    }

    /// Four labelled reservation lines, mirrored in the helper language
    pub fn reservation_message(&self, room: Option<&str>, details: &ReservationDetails) -> String {
        let operator = self.reservation_lines(&self.config.ops_language, details);
        let helper = self
            .helper_language()
            .map(|lang| (lang, self.reservation_lines(lang, details)));

        compose(
            room,
            &operator,
            helper.as_ref().map(|(language, text)| HelperLine {
                language: *language,
                text: text.as_str(),
            }),
        )
    }

    fn reservation_lines(&self, lang: &str, details: &ReservationDetails) -> String {
        let label = |field: ReservationField| {
            let (key, default) = field.label();
            self.strings().get_or(lang, key, default)
        };
        let occasion = details
            .occasion
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .unwrap_or_else(|| self.strings().get_or(lang, NO_OCCASION_KEY, NO_OCCASION_DEFAULT));

        format!(
            "{}: {}\n{}: {}\n{}: {}\n{}: {}",
            label(ReservationField::People),
            details.people,
            label(ReservationField::Date),
            details.date,
            label(ReservationField::Time),
            details.time,
            label(ReservationField::Occasion),
            occasion,
        )
    }
}
