//! Read-only staff directory

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use contracts::domain::a007_staff_member::aggregate::StaffMember;
use contracts::shared::{DataEnvelope, LocalizedName, Status};

use crate::shared::state::AppState;

pub fn sample() -> Vec<StaffMember> {
    let rows = [
        ("Omar Haddad", "عمر حداد", "omar.haddad@example.com", Some(1), "admin", Status::Active),
        ("Lina Saeed", "لينا سعيد", "lina.saeed@example.com", Some(2), "editor", Status::Active),
        ("Yousef Nasser", "يوسف ناصر", "yousef.nasser@example.com", Some(1), "support", Status::Active),
        ("Mona Khalil", "منى خليل", "mona.khalil@example.com", None, "support", Status::Inactive),
    ];
    rows.into_iter()
        .enumerate()
        .map(|(i, (en, ar, email, department_id, role_code, status))| StaffMember {
            id: i as i64 + 1,
            names: LocalizedName::new(en, ar),
            email: email.into(),
            department_id,
            role_code: role_code.into(),
            status,
        })
        .collect()
}

/// GET /api/staff-members
pub async fn list(State(state): State<AppState>) -> Json<DataEnvelope<Vec<StaffMember>>> {
    Json(DataEnvelope::new(state.staff.as_ref().clone()))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list))
}
