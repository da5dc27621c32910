//! Request routing and handlers.

use bytes::Bytes;
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::Body;
use hyper::header::{HeaderValue, ALLOW, CONTENT_TYPE};
use hyper::{Method, Request, Response, StatusCode};
use serde::Serialize;
use serde_json::json;

use hexrgb_common::{convert, HexColorInput};
use hexrgb_config::ServerConfig;

use crate::docs;
use crate::protocol::{
    parse_convert_request, ConvertResponse, ErrorDetail, MessageResponse, ValidationErrorResponse,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Handler behind a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Index,
    Convert,
    Health,
    Docs,
    OpenApi,
}

/// Every known path with the one method it answers. GET routes also
/// answer HEAD; hyper drops the body of HEAD responses.
const ROUTES: &[(&str, &str, Endpoint)] = &[
    ("/", "GET", Endpoint::Index),
    ("/convert", "POST", Endpoint::Convert),
    ("/health", "GET", Endpoint::Health),
    ("/docs", "GET", Endpoint::Docs),
    (docs::OPENAPI_PATH, "GET", Endpoint::OpenApi),
];

/// Dispatch one request. Never fails: every problem becomes a response.
pub async fn route<B>(req: Request<B>, config: &ServerConfig) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = match ROUTES.iter().find(|(known, _, _)| *known == path) {
        None => json_response(StatusCode::NOT_FOUND, &MessageResponse::new("Not Found")),
        Some(&(_, allowed, endpoint)) if accepts(allowed, &method) => {
            dispatch(endpoint, req, config).await
        }
        Some(&(_, allowed, _)) => method_not_allowed(allowed),
    };

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        "request"
    );
    response
}

async fn dispatch<B>(
    endpoint: Endpoint,
    req: Request<B>,
    config: &ServerConfig,
) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    match endpoint {
        Endpoint::Index => index(),
        Endpoint::Convert => convert_hex(req, config.max_body_bytes).await,
        Endpoint::Health => json_response(StatusCode::OK, &json!({ "status": "ok" })),
        Endpoint::Docs => html_response(docs::DOCS_HTML),
        Endpoint::OpenApi => json_response(StatusCode::OK, &docs::openapi()),
    }
}

fn accepts(allowed: &str, method: &Method) -> bool {
    method.as_str() == allowed || (allowed == "GET" && *method == Method::HEAD)
}

fn allow_header(allowed: &'static str) -> &'static str {
    if allowed == "GET" {
        "GET, HEAD"
    } else {
        allowed
    }
}

fn index() -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &json!({
            "name": "hexrgb",
            "version": env!("CARGO_PKG_VERSION"),
            "message": "Hex to RGB Converter",
            "convert": "/convert",
            "docs": "/docs",
        }),
    )
}

async fn convert_hex<B>(req: Request<B>, max_body_bytes: usize) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let body = match Limited::new(req.into_body(), max_body_bytes).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            return json_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                &MessageResponse::new("Request body too large"),
            );
        }
        Err(e) => {
            tracing::debug!(error = %e, "failed to read request body");
            return json_response(
                StatusCode::BAD_REQUEST,
                &MessageResponse::new("Failed to read request body"),
            );
        }
    };

    let request = match parse_convert_request(&body) {
        Ok(request) => request,
        Err(detail) => return unprocessable(detail),
    };

    match request.hex_code.parse::<HexColorInput>() {
        Ok(input) => {
            let color = convert::convert(&input);
            tracing::debug!(
                hex = %input,
                normalized = %color.to_hex(),
                rgb = %color,
                "converted"
            );
            json_response(StatusCode::OK, &ConvertResponse::new(request.hex_code, color))
        }
        Err(e) => {
            tracing::debug!(hex = %request.hex_code, error = %e, "rejected hex code");
            unprocessable(ErrorDetail::invalid_hex(e))
        }
    }
}

fn method_not_allowed(allowed: &'static str) -> Response<Full<Bytes>> {
    let mut response = json_response(
        StatusCode::METHOD_NOT_ALLOWED,
        &MessageResponse::new("Method Not Allowed"),
    );
    response
        .headers_mut()
        .insert(ALLOW, HeaderValue::from_static(allow_header(allowed)));
    response
}

fn unprocessable(detail: ErrorDetail) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        &ValidationErrorResponse::from(detail),
    )
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let bytes = serde_json::to_vec(body).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to serialize response");
        br#"{"detail":"Internal Server Error"}"#.to_vec()
    });
    with_content_type(status, Bytes::from(bytes), "application/json")
}

fn html_response(html: &'static str) -> Response<Full<Bytes>> {
    with_content_type(
        StatusCode::OK,
        Bytes::from_static(html.as_bytes()),
        "text/html; charset=utf-8",
    )
}

fn with_content_type(
    status: StatusCode,
    body: Bytes,
    content_type: &'static str,
) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}
