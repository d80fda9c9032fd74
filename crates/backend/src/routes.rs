use axum::extract::FromRef;
use axum::routing::{get, post};
use axum::Router;
use contracts::domain::a001_customer::Customer;
use contracts::domain::a002_size_chart::SizeChart;
use contracts::domain::a003_warranty::Warranty;
use contracts::domain::a004_tax_category::TaxCategory;
use contracts::domain::a005_language::Language;
use contracts::domain::a006_store_domain::StoreDomain;
use contracts::domain::a007_faq::Faq;
use contracts::domain::a008_commission_rule::CommissionRule;
use contracts::domain::a009_brand::Brand;
use contracts::domain::a010_category::Category;
use contracts::domain::common::Record;
use contracts::shared::record_store::InMemoryStore;
use std::sync::Arc;

use crate::handlers;
use crate::shared::data::AppState;

/// Маршруты CRUD одной коллекции: /api/{collection}[/...]
fn collection_routes<T: Record>(router: Router<AppState>) -> Router<AppState>
where
    Arc<InMemoryStore<T>>: FromRef<AppState>,
{
    let base = format!("/api/{}", T::collection_name());

    router
        .route(
            &base,
            get(handlers::crud::list::<T>).post(handlers::crud::upsert::<T>),
        )
        .route(
            &format!("{base}/validate"),
            post(handlers::crud::validate::<T>),
        )
        .route(&format!("{base}/schema"), get(handlers::crud::schema::<T>))
        .route(
            &format!("{base}/:id"),
            get(handlers::crud::get_by_id::<T>).delete(handlers::crud::delete::<T>),
        )
}

/// Configure all application routes
pub fn configure_routes(state: AppState) -> Router {
    let router = Router::new().route("/health", get(|| async { "ok" }));

    // ========================================
    // COLLECTIONS
    // ========================================
    let router = collection_routes::<Customer>(router);
    let router = collection_routes::<SizeChart>(router);
    let router = collection_routes::<Warranty>(router);
    let router = collection_routes::<TaxCategory>(router);
    let router = collection_routes::<Language>(router);
    let router = collection_routes::<StoreDomain>(router);
    let router = collection_routes::<Faq>(router);
    let router = collection_routes::<CommissionRule>(router);
    let router = collection_routes::<Brand>(router);
    let router = collection_routes::<Category>(router);

    router
        // Customer CSV import
        .route(
            "/api/customer/import/preview",
            post(handlers::a001_customer::import_preview),
        )
        .route("/api/customer/import", post(handlers::a001_customer::import))
        .route(
            "/api/customer/import/template",
            get(handlers::a001_customer::import_template),
        )
        // Size chart CSV exchange
        .route(
            "/api/size_chart/:id/export",
            get(handlers::a002_size_chart::export),
        )
        .route(
            "/api/size_chart/import",
            post(handlers::a002_size_chart::import),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::CommitDelay;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use contracts::shared::record_store::RecordStore;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(state: &AppState) -> Router {
        configure_routes(state.clone())
    }

    async fn send(state: &AppState, request: Request<Body>) -> Response {
        app(state).oneshot(request).await.unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn text_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "text/csv")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let state = AppState::empty(CommitDelay::none());
        let response = send(&state, get_request("/health")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_list_pages_and_sorts() {
        let state = AppState::empty(CommitDelay::none());
        for i in 0..12 {
            state
                .warranties
                .upsert(Warranty {
                    name: format!("Plan {i:02}"),
                    duration_months: i + 1,
                    ..Default::default()
                })
                .unwrap();
        }

        let response = send(&state, get_request("/api/warranty")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let page = body_json(response).await;
        assert_eq!(page["total"], 12);
        assert_eq!(page["pageSize"], 10);
        assert_eq!(page["totalPages"], 2);
        assert_eq!(page["items"].as_array().unwrap().len(), 10);

        let response = send(
            &state,
            get_request("/api/warranty?sortBy=durationMonths&sortDesc=true&page=1&q=plan"),
        )
        .await;
        let page = body_json(response).await;
        let items = page["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["name"], "Plan 00");
    }

    #[tokio::test]
    async fn test_list_unknown_sort_field_is_bad_request() {
        let state = AppState::empty(CommitDelay::none());
        let response = send(&state, get_request("/api/brand?sortBy=password")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_update_delete_round() {
        let state = AppState::empty(CommitDelay::none());

        let response = send(
            &state,
            json_request("POST", "/api/faq", json!({
                "question": "Do you ship abroad?",
                "answer": "Not yet."
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();

        let mut edited = created.clone();
        edited["answer"] = json!("Only to Nepal and Bhutan.");
        let response = send(&state, json_request("POST", "/api/faq", edited)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.faqs.len(), 1);

        let response = send(&state, get_request(&format!("/api/faq/{id}"))).await;
        assert_eq!(body_json(response).await["answer"], "Only to Nepal and Bhutan.");

        let delete = Request::builder()
            .method("DELETE")
            .uri(format!("/api/faq/{id}"))
            .body(Body::empty())
            .unwrap();
        let response = send(&state, delete).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(state.faqs.is_empty());

        let delete_again = Request::builder()
            .method("DELETE")
            .uri(format!("/api/faq/{id}"))
            .body(Body::empty())
            .unwrap();
        let response = send(&state, delete_again).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_record_is_unprocessable() {
        let state = AppState::empty(CommitDelay::none());
        let response = send(
            &state,
            json_request("POST", "/api/customer", json!({ "name": "", "phone": "123" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["errors"]["name"], "Name is required");
        assert_eq!(body["errors"]["phone"], "Phone must contain 10 to 15 digits");
        assert!(state.customers.is_empty());
    }

    #[tokio::test]
    async fn test_mistyped_field_is_field_error() {
        let state = AppState::empty(CommitDelay::none());
        let response = send(
            &state,
            json_request("POST", "/api/warranty", json!({
                "name": "Basic",
                "durationMonths": "twelve"
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["status"], 422);
        assert_eq!(
            body["errors"]["durationMonths"],
            "Duration (months) must be a whole number"
        );
        assert!(state.warranties.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let state = AppState::empty(CommitDelay::none());
        let request = Request::builder()
            .method("POST")
            .uri("/api/warranty")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = send(&state, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["status"], 400);
    }

    #[tokio::test]
    async fn test_get_bad_and_unknown_id() {
        let state = AppState::empty(CommitDelay::none());
        let response = send(&state, get_request("/api/language/not-a-uuid")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(
            &state,
            get_request("/api/language/7f0c5a3e-3c1d-4a59-9a49-2d2f1c0b8e11"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_validate_and_schema_endpoints() {
        let state = AppState::empty(CommitDelay::none());
        let response = send(
            &state,
            json_request("POST", "/api/commission_rule/validate", json!({
                "name": "Too much",
                "ruleType": "percentage",
                "value": 120
            })),
        )
        .await;
        let result = body_json(response).await;
        assert_eq!(result["valid"], false);
        assert_eq!(
            result["errors"]["value"],
            "Percentage commission cannot exceed 100"
        );

        let response = send(&state, get_request("/api/tax_category/schema")).await;
        let schema = body_json(response).await;
        assert_eq!(schema["entity"], "tax_category");
        assert!(schema["fields"].as_array().unwrap().len() >= 3);
    }

    #[tokio::test]
    async fn test_customer_import_preview_and_commit() {
        let state = AppState::empty(CommitDelay::none());
        let csv = "Name,Phone,City\nRavi,9876543210,Pune\n,9876543211,Goa\n";

        let response = send(&state, text_request("/api/customer/import/preview", csv)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let preview = body_json(response).await;
        assert_eq!(preview["accepted"].as_array().unwrap().len(), 1);
        assert_eq!(preview["errors"][0]["message"], "Name and phone are required");
        assert!(state.customers.is_empty());

        let response = send(&state, text_request("/api/customer/import", csv)).await;
        let report = body_json(response).await;
        assert_eq!(report["imported"], 1);
        assert_eq!(report["errors"].as_array().unwrap().len(), 1);
        assert_eq!(state.customers.list()[0].city, "Pune");
    }

    #[tokio::test]
    async fn test_customer_import_without_phone_column() {
        let state = AppState::empty(CommitDelay::none());
        let response = send(
            &state,
            text_request("/api/customer/import", "name,city\nRavi,Pune\n"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_size_chart_export_and_import() {
        let state = AppState::empty(CommitDelay::none());
        let chart = state
            .size_charts
            .upsert(SizeChart {
                name: "Tees".into(),
                columns: vec!["Size".into(), "Chest".into()],
                rows: vec![contracts::domain::a002_size_chart::SizeChartRow::from_values([
                    "M", "40",
                ])],
                ..Default::default()
            })
            .unwrap();
        let id = chart.id.unwrap();

        let response = send(&state, get_request(&format!("/api/size_chart/{id}/export"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"tees.csv\""
        );
        assert_eq!(body_text(response).await, "Size,Chest\nM,40");

        let response = send(
            &state,
            text_request("/api/size_chart/import?name=Shoes&unit=cm", "Size,Foot\n8,26.5\n"),
        )
        .await;
        let draft = body_json(response).await;
        assert_eq!(draft["name"], "Shoes");
        assert_eq!(draft["columns"], json!(["Size", "Foot"]));
        assert!(draft["id"].is_null());
        assert_eq!(state.size_charts.len(), 1);
    }
}
