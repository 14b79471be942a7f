//! Response header helpers: entity alerts and pagination links

use crate::{
    models::{Page, PageRequest},
    Error,
};
use axum::{
    http::{header, HeaderMap, HeaderName, HeaderValue},
    response::Response,
};

pub const DEFAULT_APPLICATION_NAME: &str = "consultorioApp";

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Builds `X-{app}-alert` / `X-{app}-params` headers for a named application.
#[derive(Debug, Clone)]
pub struct AlertHeaders {
    application_name: String,
}

impl AlertHeaders {
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
        }
    }

    pub fn alert_header_name(&self) -> String {
        format!("x-{}-alert", self.application_name.to_ascii_lowercase())
    }

    pub fn params_header_name(&self) -> String {
        format!("x-{}-params", self.application_name.to_ascii_lowercase())
    }

    fn alert(&self, action: &str, param: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let message = format!(
            "{}.{}.{action}",
            self.application_name,
            crate::error::ENTITY_NAME
        );
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(self.alert_header_name()),
            HeaderValue::try_from(message),
        ) {
            headers.insert(name, value);
        }
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(self.params_header_name()),
            HeaderValue::try_from(param),
        ) {
            headers.insert(name, value);
        }
        headers
    }

    pub fn entity_created(&self, id: i64) -> HeaderMap {
        self.alert("created", &id.to_string())
    }

    pub fn entity_updated(&self, id: i64) -> HeaderMap {
        self.alert("updated", &id.to_string())
    }

    pub fn entity_deleted(&self, id: i64) -> HeaderMap {
        self.alert("deleted", &id.to_string())
    }

    /// Render an error with this application's error headers.
    pub fn failure(&self, error: Error) -> Response {
        error.into_problem_response(&self.application_name)
    }
}

/// `X-Total-Count` plus an RFC 5988 `Link` header for a page of results.
pub fn pagination_headers<T>(base_path: &str, request: &PageRequest, page: &Page<T>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(TOTAL_COUNT_HEADER),
        HeaderValue::from(page.total),
    );

    let last_page = page.total_pages(request.size).saturating_sub(1);
    let mut links = Vec::new();
    if request.page < last_page {
        links.push(link(base_path, request, request.page + 1, "next"));
    }
    if request.page > 0 {
        links.push(link(base_path, request, request.page - 1, "prev"));
    }
    links.push(link(base_path, request, last_page, "last"));
    links.push(link(base_path, request, 0, "first"));

    if let Ok(value) = HeaderValue::try_from(links.join(",")) {
        headers.insert(header::LINK, value);
    }
    headers
}

fn link(base_path: &str, request: &PageRequest, page: u64, rel: &str) -> String {
    format!(
        "<{base_path}?{}>; rel=\"{rel}\"",
        request.query_for_page(page)
    )
}
