//! Guest actions offered on the hub
//!
//! Each action names the department that handles it, the string key of its
//! button label and the string key of the staff message template.

use shared::hotel::Department;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestAction {
    pub key: &'static str,
    pub department: Department,
    /// Guest-facing label (UI language)
    pub label_key: &'static str,
    /// Staff message template (operator language)
    pub message_key: &'static str,
    /// Template used when the operator language has none
    pub fallback_template: Option<&'static str>,
}

const fn action(
    key: &'static str,
    department: Department,
    label_key: &'static str,
    message_key: &'static str,
) -> GuestAction {
    GuestAction {
        key,
        department,
        label_key,
        message_key,
        fallback_template: None,
    }
}

pub const RESERVE_TABLE: &str = "reserve_table";

pub static ACTIONS: &[GuestAction] = &[
    // reception
    action("late_checkout", Department::Reception, "late_checkout", "msg_late_checkout"),
    action("taxi", Department::Reception, "taxi", "msg_taxi"),
    action("wake_up", Department::Reception, "wake_up", "msg_wakeup"),
    // housekeeping
    action("towels", Department::Housekeeping, "towels", "msg_towels"),
    action("toilet_paper", Department::Housekeeping, "toilet_paper", "msg_toilet_paper"),
    action("room_cleaning", Department::Housekeeping, "room_cleaning", "msg_room_cleaning"),
    action("extra_pillows", Department::Housekeeping, "extra_pillows", "msg_extra_pillows"),
    action("laundry", Department::Housekeeping, "laundry", "msg_laundry"),
    action("iron", Department::Housekeeping, "iron", "msg_iron"),
    action("minibar", Department::Housekeeping, "minibar", "msg_minibar"),
    action("blanket", Department::Housekeeping, "blanket", "msg_blanket"),
    // maintenance
    action("something_broken", Department::Maintenance, "something_broken", "msg_something_broken"),
    // restaurant
    action(RESERVE_TABLE, Department::Restaurant, "reserve_table", "msg_reserve_table"),
    action("allergens", Department::Restaurant, "allergens", "msg_allergens"),
    action("themed_night", Department::Restaurant, "themed_night", "msg_themed_night"),
    GuestAction {
        fallback_template: Some("Room service request: ____"),
        ..action("room_service", Department::Restaurant, "room_service", "msg_room_service")
    },
    // events
    action("hotel_events", Department::Events, "hotel_events", "msg_events"),
    action("kids_program", Department::Events, "kids_program", "msg_kids"),
];

pub fn find_action(key: &str) -> Option<&'static GuestAction> {
    let key = key.trim();
    ACTIONS.iter().find(|a| a.key == key)
}

/// Actions handled by `department`, in display order
pub fn actions_for(department: Department) -> impl Iterator<Item = &'static GuestAction> {
    ACTIONS.iter().filter(move |a| a.department == department)
}
