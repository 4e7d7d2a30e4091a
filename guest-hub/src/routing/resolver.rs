//! Department → delivery target
//!
//! Reception is the fallback for everything: a closed department, or one
//! without a messaging address, hands its requests to reception.

use chrono::NaiveTime;
use shared::hotel::{Department, HotelConfiguration, RoutingDecision};

use super::hours::{is_after_cutoff, is_open};

/// Whether `department` takes requests at local time `now`
///
/// Housekeeping without a window falls back to the legacy cutoff setting.
pub fn is_department_open(config: &HotelConfiguration, department: Department, now: NaiveTime) -> bool {
    match config.window(department) {
        Some(window) => is_open(window, now),
        None => match (department, config.housekeeping_cutoff.as_deref()) {
            (Department::Housekeeping, Some(cutoff)) => !is_after_cutoff(cutoff, now),
            _ => true,
        },
    }
}

pub fn resolve(department: Department, config: &HotelConfiguration, now: NaiveTime) -> RoutingDecision {
    let reception = || RoutingDecision {
        target_department: Department::Reception,
        delivery_address: config.contacts.whatsapp(Department::Reception).to_string(),
        was_redirected_due_to_closure: false,
    };

    if department.is_reception() {
        return reception();
    }

    if !is_department_open(config, department, now) {
        return RoutingDecision {
            was_redirected_due_to_closure: true,
            ..reception()
        };
    }

    let address = config.contacts.whatsapp(department);
    if address.trim().is_empty() {
        tracing::debug!(%department, slug = %config.slug, "No messaging address, routing to reception");
        return reception();
    }

    RoutingDecision {
        target_department: department,
        delivery_address: address.to_string(),
        was_redirected_due_to_closure: false,
    }
}
