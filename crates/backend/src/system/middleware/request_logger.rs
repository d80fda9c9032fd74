use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Middleware для логирования HTTP запросов
///
/// Пишет в tracing: метод, путь, статус, длительность и размер ответа.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} -> {} | {}ms | body error: {}",
                method,
                path,
                parts.status.as_u16(),
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    let duration = start.elapsed().as_millis();
    let size = format_size(bytes.len());

    if parts.status.is_server_error() {
        tracing::error!("{} {} -> {} | {}ms | {}", method, path, status, duration, size);
    } else if parts.status.is_client_error() {
        tracing::warn!("{} {} -> {} | {}ms | {}", method, path, status, duration, size);
    } else {
        tracing::info!("{} {} -> {} | {}ms | {}", method, path, status, duration, size);
    }

    Response::from_parts(parts, Body::from(bytes))
}
