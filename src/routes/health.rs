use axum::{ Json, http::StatusCode };

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": StatusCode::OK.as_u16() }))
}
