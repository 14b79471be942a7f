//! GET /api/consultorios

use crate::support::{assert_status, create_entity, with_test_app, DEFAULT_NOME};
use axum::http::{header, Method, StatusCode};
use consultorio::models::Consultorio;

#[tokio::test]
async fn get_all_consultorios() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let saved = app.persist(create_entity()).await?;
            let id = saved.id.expect("persisted");

            let (status, headers, body) = app
                .request(Method::GET, "/api/consultorios?sort=id,desc", None)
                .await?;
            assert_status(status, StatusCode::OK, "list");
            assert!(headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.starts_with("application/json")));

            let items: Vec<serde_json::Value> = serde_json::from_slice(&body)?;
            assert!(items.iter().any(|item| item["id"] == id));
            assert!(items.iter().any(|item| item["nome"] == DEFAULT_NOME));

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn list_honours_sort_direction() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            for nome in ["b", "c", "a"] {
                app.persist(Consultorio::new().nome(nome)).await?;
            }

            let (status, _headers, body) = app
                .request(Method::GET, "/api/consultorios?sort=id,desc", None)
                .await?;
            assert_status(status, StatusCode::OK, "sort by id desc");
            let items: Vec<Consultorio> = serde_json::from_slice(&body)?;
            let ids: Vec<_> = items.iter().filter_map(|c| c.id).collect();
            assert_eq!(ids, vec![3, 2, 1]);

            let (status, _headers, body) = app
                .request(Method::GET, "/api/consultorios?sort=nome,asc", None)
                .await?;
            assert_status(status, StatusCode::OK, "sort by nome asc");
            let items: Vec<Consultorio> = serde_json::from_slice(&body)?;
            let names: Vec<_> = items.iter().filter_map(|c| c.nome.clone()).collect();
            assert_eq!(names, vec!["a", "b", "c"]);

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn list_is_paginated() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            for i in 0..5 {
                app.persist(Consultorio::new().nome(format!("Sala {i}")))
                    .await?;
            }

            let (status, headers, body) = app
                .request(Method::GET, "/api/consultorios?page=1&size=2&sort=id,asc", None)
                .await?;
            assert_status(status, StatusCode::OK, "paged list");

            let items: Vec<Consultorio> = serde_json::from_slice(&body)?;
            let ids: Vec<_> = items.iter().filter_map(|c| c.id).collect();
            assert_eq!(ids, vec![3, 4]);

            assert_eq!(
                headers.get("x-total-count").and_then(|v| v.to_str().ok()),
                Some("5")
            );
            let link = headers
                .get(header::LINK)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            assert!(link.contains("page=2&size=2&sort=id,asc>; rel=\"next\""));
            assert!(link.contains("page=0&size=2&sort=id,asc>; rel=\"prev\""));

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn list_rejects_unknown_sort_field() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, _body) = app
                .request(Method::GET, "/api/consultorios?sort=secret,asc", None)
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "unknown sort field");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn list_of_empty_collection_is_empty_array() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, headers, body) =
                app.request(Method::GET, "/api/consultorios", None).await?;
            assert_status(status, StatusCode::OK, "empty list");
            let items: Vec<Consultorio> = serde_json::from_slice(&body)?;
            assert!(items.is_empty());
            assert_eq!(
                headers.get("x-total-count").and_then(|v| v.to_str().ok()),
                Some("0")
            );
            Ok(())
        })
    })
    .await
}
