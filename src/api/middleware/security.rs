//! Security headers for every API response

use axum::{
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::Response,
};

/// Middleware adding the standard hardening headers to all responses
pub async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    // Prevent MIME type sniffing
    if let Ok(value) = "nosniff".parse() {
        headers.insert(header::X_CONTENT_TYPE_OPTIONS, value);
    }

    // Prevent clickjacking
    if let Ok(value) = "DENY".parse() {
        headers.insert(header::X_FRAME_OPTIONS, value);
    }

    // Referrer policy
    if let Ok(value) = "strict-origin-when-cross-origin".parse() {
        headers.insert(header::REFERRER_POLICY, value);
    }

    // Strict CSP: this service only ever serves JSON
    if let Ok(value) = "default-src 'none'; frame-ancestors 'none'".parse() {
        headers.insert(header::CONTENT_SECURITY_POLICY, value);
    }

    // Only effective over HTTPS, but safe to include
    if let Ok(value) = "max-age=31536000; includeSubDomains".parse() {
        headers.insert(header::STRICT_TRANSPORT_SECURITY, value);
    }

    if !headers.contains_key(header::CACHE_CONTROL) {
        if let Ok(value) = "no-store, no-cache, must-revalidate".parse() {
            headers.insert(header::CACHE_CONTROL, value);
        }
    }

    response
}
