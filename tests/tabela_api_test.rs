//! Tabela REST API integration tests, including the paginated listing

use anyhow::Result;
use axum::http::StatusCode;
use axum_test::TestServer;
use parafarmaija::database::connection::setup_database;
use parafarmaija::repository::TabelaRepository;
use parafarmaija::server::app::create_app;
use sea_orm::{Database, DatabaseConnection};
use serde_json::{json, Value};
use tempfile::NamedTempFile;

const DEFAULT_REGION: &str = "AAAAAAAAAA";
const UPDATED_REGION: &str = "BBBBBBBBBB";
const DEFAULT_PROMET: i32 = 1;
const UPDATED_PROMET: i32 = 2;

async fn setup_test_server() -> Result<(TestServer, DatabaseConnection, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = Database::connect(&db_url).await?;
    setup_database(&db).await?;

    let app = create_app(db.clone(), "parafarmaijaApp", Some("http://localhost:4200")).await?;
    let server = TestServer::new(app)?;

    Ok((server, db, temp_file))
}

async fn row_count(db: &DatabaseConnection) -> u64 {
    TabelaRepository::new(db).count().await.unwrap()
}

async fn create(server: &TestServer, region: &str, promet: i32) -> i64 {
    let response = server
        .post("/api/tabelas")
        .json(&json!({ "region": region, "promet": promet }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_create_tabela() -> Result<()> {
    let (server, db, _temp_file) = setup_test_server().await?;
    let before = row_count(&db).await;

    let response = server
        .post("/api/tabelas")
        .json(&json!({ "region": DEFAULT_REGION, "promet": DEFAULT_PROMET }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    let id = body["id"].as_i64().unwrap();
    assert_eq!(body["region"], DEFAULT_REGION);
    assert_eq!(body["promet"], DEFAULT_PROMET);
    assert_eq!(response.header("location"), format!("/api/tabelas/{}", id));
    assert_eq!(response.header("x-parafarmaijaapp-params"), id.to_string());
    assert_eq!(row_count(&db).await, before + 1);

    Ok(())
}

#[tokio::test]
async fn test_create_tabela_with_existing_id() -> Result<()> {
    let (server, db, _temp_file) = setup_test_server().await?;

    let response = server
        .post("/api/tabelas")
        .json(&json!({ "id": 1, "region": DEFAULT_REGION }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["entityName"], "tabela");
    assert_eq!(body["errorKey"], "idexists");
    assert_eq!(body["message"], "error.idexists");
    assert_eq!(row_count(&db).await, 0);

    Ok(())
}

#[tokio::test]
async fn test_get_all_tabelas_paginated() -> Result<()> {
    let (server, _db, _temp_file) = setup_test_server().await?;
    for promet in 1..=5 {
        create(&server, DEFAULT_REGION, promet).await;
    }

    let response = server
        .get("/api/tabelas")
        .add_query_param("page", 1)
        .add_query_param("size", 2)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("x-total-count"), "5");
    let link = response.header("link");
    let link = link.to_str()?;
    assert!(link.contains("</api/tabelas?page=2&size=2>; rel=\"next\""));
    assert!(link.contains("</api/tabelas?page=0&size=2>; rel=\"prev\""));
    assert!(link.contains("</api/tabelas?page=2&size=2>; rel=\"last\""));
    assert!(link.contains("</api/tabelas?page=0&size=2>; rel=\"first\""));

    let tabelas: Vec<Value> = response.json();
    let prometi: Vec<i64> = tabelas.iter().map(|t| t["promet"].as_i64().unwrap()).collect();
    assert_eq!(prometi, vec![3, 4]);

    Ok(())
}

#[tokio::test]
async fn test_get_all_tabelas_defaults_and_sort() -> Result<()> {
    let (server, _db, _temp_file) = setup_test_server().await?;
    create(&server, "north", 10).await;
    create(&server, "south", 30).await;
    create(&server, "east", 20).await;

    let response = server.get("/api/tabelas").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("x-total-count"), "3");
    let tabelas: Vec<Value> = response.json();
    assert_eq!(tabelas.len(), 3);
    assert_eq!(tabelas[0]["region"], "north");

    let response = server
        .get("/api/tabelas")
        .add_query_param("sort", "promet,desc")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let tabelas: Vec<Value> = response.json();
    let regions: Vec<&str> = tabelas.iter().map(|t| t["region"].as_str().unwrap()).collect();
    assert_eq!(regions, vec!["south", "east", "north"]);

    Ok(())
}

#[tokio::test]
async fn test_get_all_tabelas_rejects_unknown_sort() -> Result<()> {
    let (server, _db, _temp_file) = setup_test_server().await?;

    let response = server
        .get("/api/tabelas")
        .add_query_param("sort", "password,asc")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_get_all_tabelas_with_several_sort_keys() -> Result<()> {
    let (server, _db, _temp_file) = setup_test_server().await?;
    let north_first = create(&server, "north", 10).await;
    let south = create(&server, "south", 30).await;
    let north_second = create(&server, "north", 20).await;

    let response = server
        .get("/api/tabelas")
        .add_query_param("sort", "region,asc")
        .add_query_param("sort", "id")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let tabelas: Vec<Value> = response.json();
    let ids: Vec<i64> = tabelas.iter().map(|t| t["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![north_first, north_second, south]);

    let link = response.header("link");
    let link = link.to_str()?;
    assert!(link.contains("</api/tabelas?page=0&size=20&sort=region,asc&sort=id,asc>; rel=\"first\""));

    Ok(())
}

#[tokio::test]
async fn test_get_all_tabelas_rejects_page_beyond_range() -> Result<()> {
    let (server, _db, _temp_file) = setup_test_server().await?;
    create(&server, DEFAULT_REGION, DEFAULT_PROMET).await;

    let response = server
        .get("/api/tabelas")
        .add_query_param("page", 4611686018427387904u64)
        .add_query_param("size", 2)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_get_tabela() -> Result<()> {
    let (server, _db, _temp_file) = setup_test_server().await?;
    let id = create(&server, DEFAULT_REGION, DEFAULT_PROMET).await;

    let response = server.get(&format!("/api/tabelas/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["id"], id);
    assert_eq!(body["promet"], DEFAULT_PROMET);

    let response = server.get(&format!("/api/tabelas/{}", i64::MAX)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_put_existing_tabela() -> Result<()> {
    let (server, db, _temp_file) = setup_test_server().await?;
    let id = create(&server, DEFAULT_REGION, DEFAULT_PROMET).await;

    let response = server
        .put(&format!("/api/tabelas/{}", id))
        .json(&json!({ "id": id, "region": UPDATED_REGION, "promet": UPDATED_PROMET }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let stored = TabelaRepository::new(&db).find_by_id(id).await?.unwrap();
    assert_eq!(stored.region.as_deref(), Some(UPDATED_REGION));
    assert_eq!(stored.promet, Some(UPDATED_PROMET));

    Ok(())
}

#[tokio::test]
async fn test_put_invalid_ids_leave_store_untouched() -> Result<()> {
    let (server, db, _temp_file) = setup_test_server().await?;
    let id = create(&server, DEFAULT_REGION, DEFAULT_PROMET).await;

    let cases = [
        (id, json!({ "region": UPDATED_REGION }), "idnull"),
        (id + 1, json!({ "id": id, "region": UPDATED_REGION }), "idinvalid"),
        (id + 1, json!({ "id": id + 1, "region": UPDATED_REGION }), "idnotfound"),
    ];
    for (path_id, payload, error_key) in cases {
        let response = server
            .put(&format!("/api/tabelas/{}", path_id))
            .json(&payload)
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["errorKey"], error_key);
    }

    assert_eq!(row_count(&db).await, 1);
    let stored = TabelaRepository::new(&db).find_by_id(id).await?.unwrap();
    assert_eq!(stored.region.as_deref(), Some(DEFAULT_REGION));

    Ok(())
}

#[tokio::test]
async fn test_partial_update_tabela() -> Result<()> {
    let (server, db, _temp_file) = setup_test_server().await?;
    let id = create(&server, DEFAULT_REGION, DEFAULT_PROMET).await;

    let response = server
        .patch(&format!("/api/tabelas/{}", id))
        .text(json!({ "id": id, "promet": UPDATED_PROMET }).to_string())
        .content_type("application/merge-patch+json")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let stored = TabelaRepository::new(&db).find_by_id(id).await?.unwrap();
    assert_eq!(stored.region.as_deref(), Some(DEFAULT_REGION));
    assert_eq!(stored.promet, Some(UPDATED_PROMET));

    Ok(())
}

#[tokio::test]
async fn test_delete_tabela() -> Result<()> {
    let (server, db, _temp_file) = setup_test_server().await?;
    let id = create(&server, DEFAULT_REGION, DEFAULT_PROMET).await;

    let response = server.delete(&format!("/api/tabelas/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert_eq!(
        response.header("x-parafarmaijaapp-alert"),
        format!("A tabela is deleted with identifier {}", id)
    );
    assert_eq!(row_count(&db).await, 0);

    let response = server.delete(&format!("/api/tabelas/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    Ok(())
}
