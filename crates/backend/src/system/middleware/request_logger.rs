use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_number;

/// Middleware для логирования HTTP запросов
///
/// Одна строка на запрос: время, длительность, размер ответа, статус, метод и путь.
/// The body is buffered to measure its size, then handed back unchanged.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();
    let status = parts.status.as_u16();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{:>5}ms | {:>12} | {} {:>6} {} ({})",
                start.elapsed().as_millis(),
                "error",
                status,
                method,
                path,
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let line = format!(
        "{} | {:>5}ms | {:>12} | {} {:>6} {}",
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        format_number(bytes.len()),
        status,
        method,
        path
    );
    if parts.status.is_success() {
        tracing::info!("{}", line);
    } else {
        tracing::warn!("{}", line);
    }

    Response::from_parts(parts, Body::from(bytes))
}
