use axum::{
    extract::{Path, State},
    http::{header::LOCATION, HeaderMap, HeaderValue, StatusCode},
    response::Json,
};
use sea_orm::TransactionTrait;
use tracing::debug;

use crate::database::entities::Grafikon;
use crate::errors::ApiError;
use crate::repository::GrafikonRepository;
use crate::server::app::AppState;
use crate::server::header_util;

const ENTITY_NAME: &str = "grafikon";

/// Checks the body id against the path id before an update.
fn validate_update_id(state: &AppState, id: i64, grafikon: &Grafikon) -> Result<(), ApiError> {
    match grafikon.id {
        None => Err(ApiError::bad_request_alert(
            &state.application_name,
            "Invalid id",
            ENTITY_NAME,
            "idnull",
        )),
        Some(body_id) if body_id != id => Err(ApiError::bad_request_alert(
            &state.application_name,
            "Invalid ID",
            ENTITY_NAME,
            "idinvalid",
        )),
        Some(_) => Ok(()),
    }
}

fn id_not_found(state: &AppState) -> ApiError {
    ApiError::bad_request_alert(
        &state.application_name,
        "Entity not found",
        ENTITY_NAME,
        "idnotfound",
    )
}

#[utoipa::path(
    post,
    path = "/api/grafikons",
    request_body = Grafikon,
    responses(
        (status = 201, description = "Grafikon created", body = Grafikon),
        (status = 400, description = "The grafikon already has an id")
    )
)]
pub async fn create_grafikon(
    State(state): State<AppState>,
    Json(grafikon): Json<Grafikon>,
) -> Result<(StatusCode, HeaderMap, Json<Grafikon>), ApiError> {
    debug!("REST request to save Grafikon : {}", grafikon);
    if grafikon.id.is_some() {
        return Err(ApiError::bad_request_alert(
            &state.application_name,
            "A new grafikon cannot already have an ID",
            ENTITY_NAME,
            "idexists",
        ));
    }

    let txn = state.db.begin().await?;
    let result = GrafikonRepository::new(&txn).save(grafikon).await?;
    txn.commit().await?;

    let id = result.id.map(|id| id.to_string()).unwrap_or_default();
    let mut headers = header_util::entity_creation_alert(&state.application_name, ENTITY_NAME, &id);
    if let Ok(location) = HeaderValue::from_str(&format!("/api/grafikons/{}", id)) {
        headers.insert(LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(result)))
}

#[utoipa::path(
    put,
    path = "/api/grafikons/{id}",
    params(
        ("id" = i64, Path, description = "Grafikon ID")
    ),
    request_body = Grafikon,
    responses(
        (status = 200, description = "Grafikon updated", body = Grafikon),
        (status = 400, description = "Missing, mismatched or unknown id")
    )
)]
pub async fn update_grafikon(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(grafikon): Json<Grafikon>,
) -> Result<(HeaderMap, Json<Grafikon>), ApiError> {
    debug!("REST request to update Grafikon : {}, {}", id, grafikon);
    validate_update_id(&state, id, &grafikon)?;

    let txn = state.db.begin().await?;
    let repo = GrafikonRepository::new(&txn);
    if !repo.exists_by_id(id).await? {
        return Err(id_not_found(&state));
    }
    let result = repo.save(grafikon).await?;
    txn.commit().await?;

    let headers =
        header_util::entity_update_alert(&state.application_name, ENTITY_NAME, &id.to_string());
    Ok((headers, Json(result)))
}

/// Partial update; fields missing from the body keep their stored values.
#[utoipa::path(
    patch,
    path = "/api/grafikons/{id}",
    params(
        ("id" = i64, Path, description = "Grafikon ID")
    ),
    request_body(content = Grafikon, content_type = "application/merge-patch+json"),
    responses(
        (status = 200, description = "Grafikon patched", body = Grafikon),
        (status = 400, description = "Missing, mismatched or unknown id"),
        (status = 404, description = "Grafikon not found")
    )
)]
pub async fn partial_update_grafikon(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(grafikon): Json<Grafikon>,
) -> Result<(HeaderMap, Json<Grafikon>), ApiError> {
    debug!("REST request to partial update Grafikon partially : {}, {}", id, grafikon);
    validate_update_id(&state, id, &grafikon)?;

    let txn = state.db.begin().await?;
    let repo = GrafikonRepository::new(&txn);
    if !repo.exists_by_id(id).await? {
        return Err(id_not_found(&state));
    }
    let existing = repo.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    let result = repo.save(existing.merge_patch(&grafikon)).await?;
    txn.commit().await?;

    let headers =
        header_util::entity_update_alert(&state.application_name, ENTITY_NAME, &id.to_string());
    Ok((headers, Json(result)))
}

#[utoipa::path(
    get,
    path = "/api/grafikons",
    responses(
        (status = 200, description = "List all grafikons", body = [Grafikon])
    )
)]
pub async fn list_grafikons(State(state): State<AppState>) -> Result<Json<Vec<Grafikon>>, ApiError> {
    debug!("REST request to get all Grafikons");
    let grafikons = GrafikonRepository::new(&state.db).find_all().await?;
    Ok(Json(grafikons))
}

#[utoipa::path(
    get,
    path = "/api/grafikons/{id}",
    params(
        ("id" = i64, Path, description = "Grafikon ID")
    ),
    responses(
        (status = 200, description = "Grafikon found", body = Grafikon),
        (status = 404, description = "Grafikon not found")
    )
)]
pub async fn get_grafikon(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Grafikon>, ApiError> {
    debug!("REST request to get Grafikon : {}", id);
    let grafikon = GrafikonRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(grafikon))
}

#[utoipa::path(
    delete,
    path = "/api/grafikons/{id}",
    params(
        ("id" = i64, Path, description = "Grafikon ID")
    ),
    responses(
        (status = 204, description = "Grafikon deleted")
    )
)]
pub async fn delete_grafikon(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, HeaderMap), ApiError> {
    debug!("REST request to delete Grafikon : {}", id);
    let txn = state.db.begin().await?;
    GrafikonRepository::new(&txn).delete_by_id(id).await?;
    txn.commit().await?;

    let headers =
        header_util::entity_deletion_alert(&state.application_name, ENTITY_NAME, &id.to_string());
    Ok((StatusCode::NO_CONTENT, headers))
}
