use axum::response::Json;
use serde_json::{json, Value};

/// GET / - Liveness message
pub async fn index() -> Json<Value> {
    Json(json!({ "message": "Flask Automate Docs Test App is running" }))
}

/// GET /protected - Guarded by `require_login` when an auth policy is set
pub async fn protected() -> Json<Value> {
    Json(json!({ "message": "This is protected content" }))
}
