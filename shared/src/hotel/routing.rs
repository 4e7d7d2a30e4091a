//! Routing decisions and dispatch results

use serde::{Deserialize, Serialize};

use super::department::Department;

/// Where a guest request is actually delivered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingDecision {
    pub target_department: Department,
    pub delivery_address: String,
    pub was_redirected_due_to_closure: bool,
}

/// A routed, composed request ready to be opened by the guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispatch {
    /// Department the guest asked for
    pub requested_department: Department,
    pub routing: RoutingDecision,
    /// Final text sent to staff
    pub message: String,
    /// `https://wa.me/...` deep link carrying the message
    pub link: String,
}
