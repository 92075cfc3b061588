//! Post resource handlers.

use actix_web::{HttpResponse, web};

use posts_core::domain::PostPayload;

use crate::middleware::error::AppResult;
use crate::observability::RequestId;
use crate::state::AppState;

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, id: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = state.posts.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(body.into_inner()).await?;
    tracing::info!(request_id = %request_id.as_str(), post_id = post.id, "Post created");
    Ok(HttpResponse::Created().json(post))
}

/// PUT /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    request_id: RequestId,
    id: web::Path<i32>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let post = state.posts.update(id.into_inner(), body.into_inner()).await?;
    tracing::info!(request_id = %request_id.as_str(), post_id = post.id, "Post updated");
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    request_id: RequestId,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    state.posts.delete(id).await?;
    tracing::info!(request_id = %request_id.as_str(), post_id = id, "Post deleted");
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test, web};
    use posts_core::domain::Post;
    use posts_infra::InMemoryPostStore;
    use posts_shared::ErrorResponse;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use crate::handlers::configure_routes;
    use crate::state::{AppState, StoreKind};

    fn posts() -> Vec<Post> {
        vec![
            Post {
                id: 1,
                user_id: 1,
                title: "Hello, World!".to_string(),
                body: "This is my first post.".to_string(),
                version: None,
            },
            Post {
                id: 2,
                user_id: 2,
                title: "Second Post".to_string(),
                body: "This is my second post.".to_string(),
                version: None,
            },
        ]
    }

    fn state(posts: Vec<Post>) -> web::Data<AppState> {
        web::Data::new(AppState::with_store(
            Arc::new(InMemoryPostStore::with_posts(posts)),
            StoreKind::Memory,
        ))
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(App::new().app_data($state.clone()).configure(configure_routes))
                .await
        };
    }

    #[actix_web::test]
    async fn test_find_all_posts() {
        let app = app!(state(posts()));

        let resp = test::call_service(&app, test::TestRequest::get().uri("/posts").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!([
                {
                    "id": 1,
                    "userId": 1,
                    "title": "Hello, World!",
                    "body": "This is my first post.",
                    "version": null
                },
                {
                    "id": 2,
                    "userId": 2,
                    "title": "Second Post",
                    "body": "This is my second post.",
                    "version": null
                }
            ])
        );
    }

    #[actix_web::test]
    async fn test_find_post_by_valid_id() {
        let app = app!(state(posts()));

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/posts/1").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "id": 1,
                "userId": 1,
                "title": "Hello, World!",
                "body": "This is my first post.",
                "version": null
            })
        );
    }

    #[actix_web::test]
    async fn test_missing_post_is_404_with_empty_body() {
        let app = app!(state(Vec::new()));

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/posts/0").to_request()).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(test::read_body(resp).await.is_empty());
    }

    #[actix_web::test]
    async fn test_create_valid_post() {
        let app = app!(state(Vec::new()));

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({
                "userId": 1,
                "title": "Hello, World!",
                "body": "This is my first post."
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "id": 1,
                "userId": 1,
                "title": "Hello, World!",
                "body": "This is my first post.",
                "version": null
            })
        );
    }

    #[actix_web::test]
    async fn test_invalid_post_is_rejected_and_not_stored() {
        let data = state(Vec::new());
        let app = app!(data);

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({
                "id": 3,
                "userId": 1,
                "title": "",
                "body": "",
                "version": null
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let problem: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(
            problem.errors,
            vec![
                "title must not be blank".to_string(),
                "body must not be blank".to_string()
            ]
        );
        assert!(data.posts.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_keeps_owner() {
        let app = app!(state(posts()));

        let req = test::TestRequest::put()
            .uri("/posts/1")
            .set_json(json!({
                "id": 1,
                "userId": 99,
                "title": "Hello, Space!",
                "body": "This is my new first post.",
                "version": null
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "id": 1,
                "userId": 1,
                "title": "Hello, Space!",
                "body": "This is my new first post.",
                "version": null
            })
        );
    }

    #[actix_web::test]
    async fn test_update_missing_post_is_404() {
        let app = app!(state(posts()));

        let req = test::TestRequest::put()
            .uri("/posts/42")
            .set_json(json!({ "title": "t", "body": "b" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_blank_update_of_missing_post_is_400() {
        let app = app!(state(Vec::new()));

        let req = test::TestRequest::put()
            .uri("/posts/42")
            .set_json(json!({ "title": " ", "body": "b" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_delete_post() {
        let data = state(posts());
        let app = app!(data);

        for _ in 0..2 {
            let resp = test::call_service(
                &app,
                test::TestRequest::delete().uri("/posts/1").to_request(),
            )
            .await;

            assert_eq!(resp.status(), StatusCode::NO_CONTENT);
            assert!(test::read_body(resp).await.is_empty());
        }

        let ids: Vec<i32> = data.posts.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_400() {
        let app = app!(state(Vec::new()));

        let req = test::TestRequest::post()
            .uri("/posts")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"title\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let problem: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(problem.status, 400);
    }

    #[actix_web::test]
    async fn test_non_integer_id_is_400() {
        let app = app!(state(posts()));

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/posts/abc").to_request())
                .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_health_reports_store() {
        let app = app!(state(Vec::new()));

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["store"], "memory");
    }
}
