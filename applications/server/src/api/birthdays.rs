/// Birthday API routes
use crate::{error::Result, services::templates, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use bday_core::{dates, types::BirthdayRecord, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AddBirthdayRequest {
    pub name: String,
    pub dob: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct BirthdaysResponse {
    pub success: bool,
    pub data: Vec<BirthdayRecord>,
}

/// POST /api/add-birthday
///
/// Persists the record, then sends the confirmation email before responding.
/// A delivery failure surfaces as a 500 even though the record is already
/// committed; the record is not rolled back.
pub async fn add_birthday(
    State(app_state): State<AppState>,
    Json(request): Json<AddBirthdayRequest>,
) -> Result<Json<MessageResponse>> {
    let record = app_state
        .store
        .create(&request.name, &request.dob, &request.email)
        .await?;

    tracing::info!("Registered birthday record {}", record.id);

    let formatted_dob = dates::format_long(&record.date_of_birth);
    let (subject, body) = templates::confirmation(
        &record.name,
        &formatted_dob,
        &record.email,
        &app_state.signature,
    );
    app_state.mailer.send(&record.email, &subject, &body).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Email sent successfully".to_string(),
    }))
}

/// DELETE /api/delete-birthday/:id
///
/// Succeeds whether or not anything matched the ID.
pub async fn delete_birthday(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    let deleted = app_state.store.delete_by_id(&RecordId::new(id)).await?;

    if !deleted {
        tracing::debug!("Delete matched no record");
    }

    Ok(Json(MessageResponse {
        success: true,
        message: "Record deleted successfully".to_string(),
    }))
}

/// GET /api/get-birthdays
pub async fn get_birthdays(
    State(app_state): State<AppState>,
) -> Result<Json<BirthdaysResponse>> {
    let records = app_state.store.get_all().await?;

    Ok(Json(BirthdaysResponse {
        success: true,
        data: records,
    }))
}
