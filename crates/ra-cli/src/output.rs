//! JSON shapes printed on stdout

use ra_auth::{GateDecision, Navigation, Route};
use ra_core::ProfileRow;
use ra_roster::{MutationKind, MutationOutcome, SelectionSummary};

use serde_json::{Value, json};

pub fn redirect(route: Route) -> Value {
    json!({ "redirect": route })
}

pub fn gate(path: &str, decision: GateDecision) -> Value {
    match decision {
        GateDecision::Allow => json!({ "path": path, "allowed": true }),
        GateDecision::Redirect(route) => redirect(route),
    }
}

/// Attach `"redirect"` when the operation navigates away
pub fn with_navigation(mut value: Value, navigation: Navigation) -> Value {
    if let (Some(route), Some(object)) = (navigation.target(), value.as_object_mut()) {
        object.insert("redirect".to_string(), json!(route));
    }
    value
}

pub fn profile(row: &ProfileRow) -> Value {
    json!({
        "id": row.id,
        "full_name": row.full_name(),
        "email": row.email,
        "created_at": row.created_at.to_rfc3339(),
        "last_sign_in": row.last_sign_in.map(|at| at.to_rfc3339()),
        "status": row.status().label(),
    })
}

pub fn roster(rows: &[ProfileRow], summary: SelectionSummary) -> Value {
    json!({
        "users": rows.iter().map(profile).collect::<Vec<_>>(),
        "total": summary.total,
    })
}

pub fn mutation(kind: MutationKind, outcome: MutationOutcome, summary: SelectionSummary) -> Value {
    match outcome {
        MutationOutcome::NothingSelected => json!({
            "action": kind.as_str(),
            "affected": 0,
            "message": summary.to_string(),
        }),
        MutationOutcome::Applied {
            affected,
            navigation,
        } => with_navigation(
            json!({
                "action": kind.as_str(),
                "affected": affected,
                "total": summary.total,
            }),
            navigation,
        ),
        MutationOutcome::Aborted { redirect: route } => redirect(route),
    }
}

pub fn render(value: &Value, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
