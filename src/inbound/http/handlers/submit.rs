use crate::{
    domain::contact::{models::submission::SubmissionPayload, ports::ContactService},
    inbound::http::{errors::AppError, state::SharedContactState},
};
use actix_web::{web, HttpResponse};

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(payload, state),
    fields(sender_name = %payload.name)
)]
pub async fn submit<CS: ContactService>(
    payload: web::Json<SubmissionPayload>,
    state: web::Data<SharedContactState<CS>>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    state.contact_service().relay(payload).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
}
