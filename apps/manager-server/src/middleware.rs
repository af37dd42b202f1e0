use axum::http::Request;

pub struct HttpRequestContext<'a> {
    pub path: &'a str,
    pub method: &'a str,
    pub request_id: Option<&'a str>,
}

/// Request facts attached to the tracing span, the request id coming from
/// the `x-request-id` header the frontend proxy sets.
pub fn get_http_request_context<T>(request: &Request<T>) -> HttpRequestContext {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty());

    HttpRequestContext {
        path: request.uri().path(),
        method: request.method().as_str(),
        request_id,
    }
}
