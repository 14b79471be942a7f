//! POST /api/consultorios

use crate::support::{
    assert_status, create_entity, to_json_body, with_test_app, with_test_app_with_config,
    DEFAULT_NOME,
};
use axum::http::{header, Method, StatusCode};
use consultorio::models::Consultorio;
use serde_json::json;

#[tokio::test]
async fn create_consultorio() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let size_before = app.count().await?;

            let (status, headers, body) = app
                .request(
                    Method::POST,
                    "/api/consultorios",
                    Some(to_json_body(&create_entity())?),
                )
                .await?;
            assert_status(status, StatusCode::CREATED, "create");

            let all = app.find_all().await?;
            assert_eq!(all.len() as u64, size_before + 1);
            let stored = all.last().expect("one row stored");
            assert_eq!(stored.nome.as_deref(), Some(DEFAULT_NOME));

            let created: Consultorio = serde_json::from_slice(&body)?;
            let id = created.id.expect("response carries assigned id");
            assert_eq!(stored.id, Some(id));
            assert_eq!(created.nome.as_deref(), Some(DEFAULT_NOME));

            assert_eq!(
                headers.get(header::LOCATION).and_then(|v| v.to_str().ok()),
                Some(format!("/api/consultorios/{id}").as_str())
            );
            assert_eq!(
                headers
                    .get("x-consultorioapp-alert")
                    .and_then(|v| v.to_str().ok()),
                Some("consultorioApp.consultorio.created")
            );
            assert_eq!(
                headers
                    .get("x-consultorioapp-params")
                    .and_then(|v| v.to_str().ok()),
                Some(id.to_string().as_str())
            );

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_consultorio_with_existing_id() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let size_before = app.count().await?;

            // An entity with an existing ID cannot be created
            let consultorio = create_entity().with_id(1);
            let (status, headers, body) = app
                .request(
                    Method::POST,
                    "/api/consultorios",
                    Some(to_json_body(&consultorio)?),
                )
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "create with id");

            assert_eq!(app.count().await?, size_before);

            let problem: serde_json::Value = serde_json::from_slice(&body)?;
            assert_eq!(problem["status"], 400);
            assert_eq!(problem["errorKey"], "idexists");
            assert_eq!(problem["entityName"], "consultorio");
            assert_eq!(
                headers
                    .get("x-consultorioapp-error")
                    .and_then(|v| v.to_str().ok()),
                Some("error.idexists")
            );

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_assigns_distinct_ids() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let mut ids = Vec::new();
            for nome in ["Sala 1", "Sala 2"] {
                let (status, _headers, body) = app
                    .request(
                        Method::POST,
                        "/api/consultorios",
                        Some(to_json_body(&json!({ "nome": nome }))?),
                    )
                    .await?;
                assert_status(status, StatusCode::CREATED, "create");
                let created: Consultorio = serde_json::from_slice(&body)?;
                ids.push(created.id.expect("id assigned"));
            }
            assert_ne!(ids[0], ids[1]);
            assert_eq!(app.count().await?, 2);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_with_malformed_json_is_rejected() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, _body) = app
                .request(
                    Method::POST,
                    "/api/consultorios",
                    Some(b"{\"nome\": ".to_vec()),
                )
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "malformed json");
            assert_eq!(app.count().await?, 0);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_with_too_long_name_fails_validation() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let consultorio = Consultorio::new().nome("x".repeat(256));
            let (status, _headers, _body) = app
                .request(
                    Method::POST,
                    "/api/consultorios",
                    Some(to_json_body(&consultorio)?),
                )
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "validation");
            assert_eq!(app.count().await?, 0);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_over_body_limit_is_payload_too_large() -> anyhow::Result<()> {
    with_test_app_with_config(
        |config| {
            config.server.max_request_body_size = 16;
        },
        |app| {
            Box::pin(async move {
                let consultorio = Consultorio::new().nome("x".repeat(100));
                let (status, headers, body) = app
                    .request(
                        Method::POST,
                        "/api/consultorios",
                        Some(to_json_body(&consultorio)?),
                    )
                    .await?;
                assert_status(status, StatusCode::PAYLOAD_TOO_LARGE, "oversized body");
                assert_eq!(
                    headers
                        .get(header::CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok()),
                    Some("application/problem+json")
                );
                let problem: serde_json::Value = serde_json::from_slice(&body)?;
                assert_eq!(problem["status"], 413);
                assert_eq!(problem["message"], "error.http.413");
                assert_eq!(app.count().await?, 0);
                Ok(())
            })
        },
    )
    .await
}

#[tokio::test]
async fn create_without_json_content_type_is_unsupported() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app
                .request_with_extra_headers(
                    Method::POST,
                    "/api/consultorios",
                    Some(to_json_body(&create_entity())?),
                    &[("content-type", "text/plain")],
                )
                .await?;
            assert_status(status, StatusCode::UNSUPPORTED_MEDIA_TYPE, "text/plain body");
            let problem: serde_json::Value = serde_json::from_slice(&body)?;
            assert_eq!(problem["status"], 415);
            assert_eq!(problem["title"], "Unsupported Media Type");
            assert_eq!(app.count().await?, 0);
            Ok(())
        })
    })
    .await
}
