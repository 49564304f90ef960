use axum::{
    extract::{OriginalUri, Path, State},
    http::{header::LOCATION, HeaderMap, HeaderValue, StatusCode},
    response::Json,
};
use axum_extra::extract::Query;
use sea_orm::TransactionTrait;
use tracing::debug;

use crate::database::entities::Tabela;
use crate::errors::ApiError;
use crate::repository::{tabela_repository::sort_column, TabelaRepository};
use crate::server::app::AppState;
use crate::server::header_util;
use crate::server::pagination::{pagination_headers, PageParams, PageRequest, PaginationError};

const ENTITY_NAME: &str = "tabela";

/// Checks the body id against the path id before an update.
fn validate_update_id(state: &AppState, id: i64, tabela: &Tabela) -> Result<(), ApiError> {
    match tabela.id {
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
    path = "/api/tabelas",
    request_body = Tabela,
    responses(
        (status = 201, description = "Tabela created", body = Tabela),
        (status = 400, description = "The tabela already has an id")
    )
)]
pub async fn create_tabela(
    State(state): State<AppState>,
    Json(tabela): Json<Tabela>,
) -> Result<(StatusCode, HeaderMap, Json<Tabela>), ApiError> {
    debug!("REST request to save Tabela : {}", tabela);
    if tabela.id.is_some() {
        return Err(ApiError::bad_request_alert(
            &state.application_name,
            "A new tabela cannot already have an ID",
            ENTITY_NAME,
            "idexists",
        ));
    }

    let txn = state.db.begin().await?;
    let result = TabelaRepository::new(&txn).save(tabela).await?;
    txn.commit().await?;

    let id = result.id.map(|id| id.to_string()).unwrap_or_default();
    let mut headers = header_util::entity_creation_alert(&state.application_name, ENTITY_NAME, &id);
    if let Ok(location) = HeaderValue::from_str(&format!("/api/tabelas/{}", id)) {
        headers.insert(LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(result)))
}

#[utoipa::path(
    put,
    path = "/api/tabelas/{id}",
    params(
        ("id" = i64, Path, description = "Tabela ID")
    ),
    request_body = Tabela,
    responses(
        (status = 200, description = "Tabela updated", body = Tabela),
        (status = 400, description = "Missing, mismatched or unknown id")
    )
)]
pub async fn update_tabela(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(tabela): Json<Tabela>,
) -> Result<(HeaderMap, Json<Tabela>), ApiError> {
    debug!("REST request to update Tabela : {}, {}", id, tabela);
    validate_update_id(&state, id, &tabela)?;

    let txn = state.db.begin().await?;
    let repo = TabelaRepository::new(&txn);
    if !repo.exists_by_id(id).await? {
        return Err(id_not_found(&state));
    }
    let result = repo.save(tabela).await?;
    txn.commit().await?;

    let headers =
        header_util::entity_update_alert(&state.application_name, ENTITY_NAME, &id.to_string());
    Ok((headers, Json(result)))
}

/// Partial update; fields missing from the body keep their stored values.
#[utoipa::path(
    patch,
    path = "/api/tabelas/{id}",
    params(
        ("id" = i64, Path, description = "Tabela ID")
    ),
    request_body(content = Tabela, content_type = "application/merge-patch+json"),
    responses(
        (status = 200, description = "Tabela patched", body = Tabela),
        (status = 400, description = "Missing, mismatched or unknown id"),
        (status = 404, description = "Tabela not found")
    )
)]
pub async fn partial_update_tabela(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(tabela): Json<Tabela>,
) -> Result<(HeaderMap, Json<Tabela>), ApiError> {
    debug!("REST request to partial update Tabela partially : {}, {}", id, tabela);
    validate_update_id(&state, id, &tabela)?;

    let txn = state.db.begin().await?;
    let repo = TabelaRepository::new(&txn);
    if !repo.exists_by_id(id).await? {
        return Err(id_not_found(&state));
    }
    let existing = repo.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    let result = repo.save(existing.merge_patch(&tabela)).await?;
    txn.commit().await?;

    let headers =
        header_util::entity_update_alert(&state.application_name, ENTITY_NAME, &id.to_string());
    Ok((headers, Json(result)))
}

#[utoipa::path(
    get,
    path = "/api/tabelas",
    params(PageParams),
    responses(
        (status = 200, description = "One page of tabelas, with X-Total-Count and Link headers", body = [Tabela]),
        (status = 400, description = "Invalid sort parameter")
    )
)]
pub async fn list_tabelas(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<PageParams>,
) -> Result<(HeaderMap, Json<Vec<Tabela>>), ApiError> {
    debug!("REST request to get a page of Tabelas");
    let request = PageRequest::try_from(params)?;
    if let Some(sort) = request.sort.iter().find(|s| sort_column(&s.property).is_none()) {
        return Err(PaginationError::UnknownSortProperty(sort.property.clone()).into());
    }

    let page = TabelaRepository::new(&state.db).find_page(&request).await?;
    let headers = pagination_headers(uri.path(), &page, &request.sort)?;
    Ok((headers, Json(page.content)))
}

#[utoipa::path(
    get,
    path = "/api/tabelas/{id}",
    params(
        ("id" = i64, Path, description = "Tabela ID")
    ),
    responses(
        (status = 200, description = "Tabela found", body = Tabela),
        (status = 404, description = "Tabela not found")
    )
)]
pub async fn get_tabela(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Tabela>, ApiError> {
    debug!("REST request to get Tabela : {}", id);
    let tabela = TabelaRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(tabela))
}

#[utoipa::path(
    delete,
    path = "/api/tabelas/{id}",
    params(
        ("id" = i64, Path, description = "Tabela ID")
    ),
    responses(
        (status = 204, description = "Tabela deleted")
    )
)]
pub async fn delete_tabela(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, HeaderMap), ApiError> {
    debug!("REST request to delete Tabela : {}", id);
    let txn = state.db.begin().await?;
    TabelaRepository::new(&txn).delete_by_id(id).await?;
    txn.commit().await?;

    let headers =
        header_util::entity_deletion_alert(&state.application_name, ENTITY_NAME, &id.to_string());
    Ok((StatusCode::NO_CONTENT, headers))
}
