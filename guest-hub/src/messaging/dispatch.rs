//! Guest interaction → routed staff message
//!
//! Ties routing, composition and link building together for one request.

use chrono::NaiveTime;
use shared::hotel::{Department, Dispatch, HotelConfiguration, ReservationDetails};

use super::catalog::GuestAction;
use super::composer::Composer;
use super::links::{digits_only, messaging_link};
use crate::routing::resolve;

/// Per-request guest context; never stored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestContext {
    pub room: Option<String>,
    /// Requested UI language (may be unsupported by the hotel)
    pub language: Option<String>,
}

impl GuestContext {
    pub fn new(room: Option<String>, language: Option<String>) -> Self {
        Self { room, language }
    }

    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

pub struct Dispatcher<'a> {
    config: &'a HotelConfiguration,
    composer: Composer<'a>,
    now: NaiveTime,
}

impl<'a> Dispatcher<'a> {
    /// `now` is the hotel-local time of the request
    pub fn new(config: &'a HotelConfiguration, now: NaiveTime) -> Self {
        Self {
            config,
            composer: Composer::new(config),
            now,
        }
    }

    pub fn action(&self, action: &GuestAction, guest: &GuestContext, details: &[String]) -> Dispatch {
        let message = self.composer.template_message(
            guest.room(),
            action.message_key,
            action.fallback_template,
            details,
        );
        self.finish(action.department, message)
    }

    /// Completed table reservation, always for the restaurant
    pub fn reservation(&self, guest: &GuestContext, details: &ReservationDetails) -> Dispatch {
        let message = self.composer.reservation_message(guest.room(), details);
        self.finish(Department::Restaurant, message)
    }

    /// Ready-made operator-language text for `department`
    pub fn message(&self, department: Department, guest: &GuestContext, text: &str) -> Dispatch {
        let message = self.composer.plain_message(guest.room(), text);
        self.finish(department, message)
    }

    fn finish(&self, requested: Department, message: String) -> Dispatch {
        let routing = resolve(requested, self.config, self.now);

        if digits_only(&routing.delivery_address).is_empty() {
            tracing::warn!(
                slug = %self.config.slug,
                department = %routing.target_department,
                "No messaging address configured; the link will not open a chat"
            );
        }
        if routing.was_redirected_due_to_closure {
            tracing::info!(
                slug = %self.config.slug,
                requested = %requested,
                "Department closed, routing to reception"
            );
        }

        let link = messaging_link(&routing.delivery_address, &message);
        Dispatch {
            requested_department: requested,
            routing,
            message,
            link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotel::{BuildDefaults, SourceTables, build};
    use crate::messaging::catalog::find_action;
    use crate::sheets::parse_table;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn hotel() -> HotelConfiguration {
        build(
            SourceTables {
                settings: parse_table(
                    "key,value\n\
                     receptionWhatsapp,+359 100\n\
                     housekeepingWhatsapp,+359 200\n\
                     housekeepingOpen,08:00\n\
                     housekeepingClose,17:00\n\
                     restaurantWhatsapp,+359 300\n\
                     opsLanguage,en\n\
                     staffHelperEnabled,false\n",
                ),
                strings: parse_table("key,en\nmsg_towels,Please bring towels\n"),
                menus: None,
            },
            &BuildDefaults::default(),
        )
    }

    #[test]
    fn test_closed_housekeeping_goes_to_reception() {
        let config = hotel();
        let guest = GuestContext::new(Some("12".into()), None);
        let towels = find_action("towels").unwrap();

        let dispatch = Dispatcher::new(&config, at(18, 0)).action(towels, &guest, &[]);

        assert_eq!(dispatch.requested_department, Department::Housekeeping);
        assert_eq!(dispatch.routing.target_department, Department::Reception);
        assert!(dispatch.routing.was_redirected_due_to_closure);
        assert_eq!(dispatch.message, "Room 12 - Please bring towels");
        assert_eq!(
            dispatch.link,
            "https://wa.me/359100?text=Room%2012%20-%20Please%20bring%20towels"
        );
    }

    #[test]
    fn test_open_housekeeping_gets_request() {
        let config = hotel();
        let towels = find_action("towels").unwrap();
        let dispatch = Dispatcher::new(&config, at(9, 30)).action(towels, &GuestContext::default(), &[]);

        assert_eq!(dispatch.routing.target_department, Department::Housekeeping);
        assert!(dispatch.link.starts_with("https://wa.me/359200?text="));
    }

    #[test]
    fn test_reservation_goes_to_restaurant() {
        let config = hotel();
        let details = ReservationDetails {
            people: "4".into(),
            date: "15.06.2025".into(),
            time: "19:30".into(),
            occasion: None,
        };
        let dispatch = Dispatcher::new(&config, at(13, 0)).reservation(&GuestContext::default(), &details);

        assert_eq!(dispatch.routing.target_department, Department::Restaurant);
        assert_eq!(
            dispatch.message,
            "People: 4\nDate: 15.06.2025\nTime: 19:30\nOccasion: No occasion"
        );
    }

    #[test]
    fn test_plain_message() {
        let config = hotel();
        let guest = GuestContext::new(Some("7".into()), Some("de".into()));
        let dispatch = Dispatcher::new(&config, at(9, 0)).message(Department::Maintenance, &guest, "Климатикът не работи");

        // maintenance has no address
        assert_eq!(dispatch.routing.target_department, Department::Reception);
        assert!(!dispatch.routing.was_redirected_due_to_closure);
        assert_eq!(dispatch.message, "Room 7 - Климатикът не работи");
    }
}
