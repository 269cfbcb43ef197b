//! HTTP wiring for the Resource API.
//!
//! | Method & path | Success | Failure |
//! |---------------|---------|---------|
//! | `GET /contacts` | 200, array | 500 |
//! | `GET /contacts/{id}` | 200, contact | 404, 500 |
//! | `POST /contacts` | 201, created contact | 400, 500 |
//! | `PUT /contacts/{id}` | 200, updated contact | 400, 404, 500 |
//! | `DELETE /contacts/{id}` | 204, empty | 404, 500 |
//!
//! The collection is also served at `/contacts/`. Failures carry `{"error": "<message>"}`.
//! Cross-origin requests are allowed from any origin.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use store::{Contact, ContactStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::contacts;
use crate::error::ApiError;
use crate::payload::ContactPayload;

/// Build the application router around a shared store handle.
pub fn router<S: ContactStore>(store: Arc<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/contacts", contact_routes::<S>())
        .route("/contacts/", get(list::<S>).post(create::<S>))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(store)
}

fn contact_routes<S: ContactStore>() -> Router<Arc<S>> {
    Router::new()
        .route("/", get(list::<S>).post(create::<S>))
        .route("/{id}", get(show::<S>).put(update::<S>).delete(remove::<S>))
}

async fn list<S: ContactStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    Ok(Json(contacts::list_contacts(store.as_ref()).await?))
}

async fn show<S: ContactStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError> {
    Ok(Json(contacts::get_contact(store.as_ref(), &id).await?))
}

async fn create<S: ContactStore>(
    State(store): State<Arc<S>>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let Json(payload) = payload?;
    let contact = contacts::create_contact(store.as_ref(), payload).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

async fn update<S: ContactStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<Json<Contact>, ApiError> {
    let Json(payload) = payload?;
    Ok(Json(contacts::update_contact(store.as_ref(), &id, payload).await?))
}

async fn remove<S: ContactStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    contacts::delete_contact(store.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{INVALID_AGE, MISSING_FIELDS};
    use crate::test_support::{ScriptedStore, DB_ERROR};
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use store::SqliteStore;
    use tower::ServiceExt;

    async fn sqlite_app() -> (Router, Arc<SqliteStore>) {
        let store = Arc::new(SqliteStore::open("sqlite::memory:").await.unwrap());
        (router(store.clone()), store)
    }

    fn scripted_app(store: ScriptedStore) -> Router {
        router(Arc::new(store))
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Option<Value>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            None
        } else {
            Some(serde_json::from_slice(&bytes).unwrap())
        };
        (status, json)
    }

    fn john() -> Value {
        json!({
            "firstName": "John",
            "lastName": "Doe",
            "email": "john@example.com",
            "phoneNumber": "1234567890",
            "age": 30
        })
    }

    fn error_body(message: &str) -> Option<Value> {
        Some(json!({ "error": message }))
    }

    fn is_uuid_v4(id: &str) -> bool {
        uuid::Uuid::parse_str(id)
            .map(|u| u.get_version_num() == 4)
            .unwrap_or(false)
    }

    #[tokio::test]
    async fn test_crud_happy_path() {
        let (app, store) = sqlite_app().await;

        // Create
        let (status, body) = send(&app, "POST", "/contacts", Some(john())).await;
        assert_eq!(status, StatusCode::CREATED);
        let created = body.unwrap();
        let id = created["id"].as_str().unwrap().to_string();
        assert!(is_uuid_v4(&id), "id {id}");
        assert_eq!(created["firstName"], "John");
        assert_eq!(created["lastName"], "Doe");
        assert_eq!(created["email"], "john@example.com");
        assert_eq!(created["phoneNumber"], "1234567890");
        assert_eq!(created["age"], 30);

        // List
        let (status, body) = send(&app, "GET", "/contacts", None).await;
        assert_eq!(status, StatusCode::OK);
        let list = body.unwrap();
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0], created);

        // Get
        let (status, body) = send(&app, "GET", &format!("/contacts/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.unwrap(), created);

        // Update replaces every field
        let replacement = json!({
            "firstName": "Jane",
            "lastName": "Roe",
            "email": "jane@example.com",
            "phoneNumber": "555-010-0199",
            "age": 35
        });
        let (status, body) =
            send(&app, "PUT", &format!("/contacts/{id}"), Some(replacement.clone())).await;
        assert_eq!(status, StatusCode::OK);
        let updated = body.unwrap();
        assert_eq!(updated["id"], id.as_str());
        for field in ["firstName", "lastName", "email", "phoneNumber", "age"] {
            assert_eq!(updated[field], replacement[field], "field {field}");
        }
        let (_, body) = send(&app, "GET", &format!("/contacts/{id}"), None).await;
        assert_eq!(body.unwrap(), updated);

        // Delete
        let (status, body) = send(&app, "DELETE", &format!("/contacts/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_none());
        let (status, body) = send(&app, "GET", &format!("/contacts/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, error_body("Contact not found"));

        store.close().await;
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids_and_ignores_client_id() {
        let (app, _store) = sqlite_app().await;

        let mut body = john();
        body["id"] = json!("1");
        let (_, first) = send(&app, "POST", "/contacts", Some(body.clone())).await;
        let (_, second) = send(&app, "POST", "/contacts", Some(body)).await;
        let first = first.unwrap()["id"].as_str().unwrap().to_string();
        let second = second.unwrap()["id"].as_str().unwrap().to_string();
        assert_ne!(first, "1");
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_create_coerces_string_age() {
        let (app, _store) = sqlite_app().await;

        let mut body = john();
        body["age"] = json!("42");
        let (status, created) = send(&app, "POST", "/contacts", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.unwrap()["age"], 42);
    }

    #[tokio::test]
    async fn test_create_validation_errors() {
        let (app, store) = sqlite_app().await;

        let (status, body) =
            send(&app, "POST", "/contacts", Some(json!({ "firstName": "John" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, error_body(MISSING_FIELDS));

        let mut negative = john();
        negative["age"] = json!(-1);
        let (status, body) = send(&app, "POST", "/contacts", Some(negative)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, error_body(INVALID_AGE));

        // Nothing was stored
        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_validation_error() {
        let (app, _store) = sqlite_app().await;

        let request = Request::builder()
            .method("POST")
            .uri("/contacts")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found_for_every_operation() {
        let (app, _store) = sqlite_app().await;

        for (method, body) in [("GET", None), ("PUT", Some(john())), ("DELETE", None)] {
            let (status, response) = send(&app, method, "/contacts/nonexistent-id", body).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
            assert_eq!(response, error_body("Contact not found"), "{method}");
        }
    }

    #[tokio::test]
    async fn test_update_checks_existence_before_body() {
        let (app, _store) = sqlite_app().await;

        // Unknown id is not found whatever the body
        let (status, body) =
            send(&app, "PUT", "/contacts/nonexistent-id", Some(json!({ "age": 35 }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, error_body("Contact not found"));

        // Existing id with an incomplete body is rejected and left unchanged
        let (_, created) = send(&app, "POST", "/contacts", Some(john())).await;
        let created = created.unwrap();
        let uri = format!("/contacts/{}", created["id"].as_str().unwrap());
        let (status, body) = send(&app, "PUT", &uri, Some(json!({ "age": 35 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, error_body(MISSING_FIELDS));

        let (_, stored) = send(&app, "GET", &uri, None).await;
        assert_eq!(stored.unwrap(), created);
    }

    #[tokio::test]
    async fn test_invalid_update_never_reaches_write() {
        let app = scripted_app(ScriptedStore::with_row("some-id").fail_write());

        let mut body = john();
        body["age"] = json!(-1);
        let (status, body) = send(&app, "PUT", "/contacts/some-id", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, error_body(INVALID_AGE));
    }

    #[tokio::test]
    async fn test_list_storage_error() {
        let app = scripted_app(ScriptedStore::failing_reads());
        let (status, body) = send(&app, "GET", "/contacts", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, error_body(DB_ERROR));
    }

    #[tokio::test]
    async fn test_get_storage_error() {
        let app = scripted_app(ScriptedStore::failing_reads());
        let (status, body) = send(&app, "GET", "/contacts/some-id", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, error_body(DB_ERROR));
    }

    #[tokio::test]
    async fn test_create_storage_errors() {
        // Insert fails
        let app = scripted_app(ScriptedStore::default().fail_insert());
        let (status, body) = send(&app, "POST", "/contacts", Some(john())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, error_body(DB_ERROR));

        // Insert succeeds, confirming read fails
        let app = scripted_app(ScriptedStore::default().find_ok_calls(0));
        let (status, body) = send(&app, "POST", "/contacts", Some(john())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, error_body(DB_ERROR));
    }

    #[tokio::test]
    async fn test_update_storage_errors() {
        // Existence check fails
        let app = scripted_app(ScriptedStore::failing_reads());
        let (status, body) = send(&app, "PUT", "/contacts/some-id", Some(john())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, error_body(DB_ERROR));

        // Write fails
        let app = scripted_app(ScriptedStore::with_row("some-id").fail_write());
        let (status, _) = send(&app, "PUT", "/contacts/some-id", Some(john())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        // Write succeeds, confirming read fails
        let app = scripted_app(ScriptedStore::with_row("some-id").find_ok_calls(1));
        let (status, body) = send(&app, "PUT", "/contacts/some-id", Some(john())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, error_body(DB_ERROR));
    }

    #[tokio::test]
    async fn test_delete_storage_errors() {
        let app = scripted_app(ScriptedStore::failing_reads());
        let (status, body) = send(&app, "DELETE", "/contacts/some-id", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, error_body(DB_ERROR));

        let app = scripted_app(ScriptedStore::with_row("some-id").fail_write());
        let (status, body) = send(&app, "DELETE", "/contacts/some-id", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, error_body(DB_ERROR));
    }

    #[tokio::test]
    async fn test_row_removed_between_check_and_write_is_not_found() {
        let app = scripted_app(ScriptedStore::with_row("some-id").affected(0));

        let (status, body) = send(&app, "PUT", "/contacts/some-id", Some(john())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, error_body("Contact not found"));

        let (status, body) = send(&app, "DELETE", "/contacts/some-id", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, error_body("Contact not found"));
    }

    #[tokio::test]
    async fn test_collection_with_trailing_slash() {
        let (app, _store) = sqlite_app().await;

        let (status, created) = send(&app, "POST", "/contacts/", Some(john())).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, list) = send(&app, "GET", "/contacts/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.unwrap(), json!([created.unwrap()]));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let (app, _store) = sqlite_app().await;

        let request = Request::builder()
            .method("GET")
            .uri("/contacts")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
