//! Errors surfaced by the REST resources.
//!
//! Validation failures carry the entity name and a machine-readable error key
//! (`idexists`, `idnull`, `idinvalid`, `idnotfound`) which end up both in the
//! problem body and in the `X-<app>-error` / `X-<app>-params` headers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

use crate::server::header_util;
use crate::server::pagination::PaginationError;

const PROBLEM_WITH_MESSAGE: &str = "https://www.jhipster.tech/problem/problem-with-message";

#[derive(Error, Debug)]
pub enum ApiError {
    /// Client-supplied id violates the create/update rules
    #[error("{message}")]
    BadRequestAlert {
        application_name: String,
        message: &'static str,
        entity_name: &'static str,
        error_key: &'static str,
    },

    #[error("Not found")]
    NotFound,

    #[error("Invalid request: {0}")]
    Pagination(#[from] PaginationError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl ApiError {
    pub fn bad_request_alert(
        application_name: &str,
        message: &'static str,
        entity_name: &'static str,
        error_key: &'static str,
    ) -> Self {
        Self::BadRequestAlert {
            application_name: application_name.to_string(),
            message,
            entity_name,
            error_key,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequestAlert { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Pagination(PaginationError::Header(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Pagination(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::BadRequestAlert {
                application_name,
                message,
                entity_name,
                error_key,
            } => {
                let headers = header_util::failure_alert(&application_name, entity_name, error_key);
                let body = json!({
                    "type": PROBLEM_WITH_MESSAGE,
                    "title": message,
                    "status": status.as_u16(),
                    "entityName": entity_name,
                    "errorKey": error_key,
                    "message": format!("error.{}", error_key),
                    "params": entity_name,
                });
                (status, headers, Json(body)).into_response()
            }
            ApiError::NotFound => problem(status, "Not Found", "error.http.404"),
            ApiError::Pagination(err) if status == StatusCode::BAD_REQUEST => {
                problem(status, &err.to_string(), "error.http.400")
            }
            err => {
                tracing::error!("Request failed: {}", err);
                problem(status, "Internal Server Error", "error.http.500")
            }
        }
    }
}

fn problem(status: StatusCode, title: &str, message: &str) -> Response {
    let body = json!({
        "title": title,
        "status": status.as_u16(),
        "message": message,
    });
    (status, Json(body)).into_response()
}
