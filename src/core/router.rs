use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit, handler::HandlerWithoutStateExt, http::StatusCode,
    middleware::from_fn, routing::get, Json, Router,
};
use sqlx::PgPool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::activities::{routes as activities_routes, ActivityService};
use crate::features::auth::routes as auth_routes;
use crate::features::auth::services::{AuthService, TokenService};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::comments::{routes as comments_routes, CommentService};
use crate::features::contacts::{routes as contacts_routes, ContactService};
use crate::features::members::{routes as members_routes, MemberService};
use crate::features::news::{routes as news_routes, NewsService};
use crate::features::organizations::{routes as organizations_routes, OrganizationService};
use crate::features::roles::{routes as roles_routes, RoleService};
use crate::features::slides::{routes as slides_routes, SlideService};
use crate::features::testimonials::{routes as testimonials_routes, TestimonialService};
use crate::features::uploads::{routes as uploads_routes, UploadService};
use crate::features::users::{routes as users_routes, UserService};
use crate::modules::storage::MinIOClient;
use crate::shared::types::ApiResponse;

/// Every service the HTTP layer dispatches to
pub struct Services {
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    pub roles: Arc<RoleService>,
    pub organizations: Arc<OrganizationService>,
    pub contacts: Arc<ContactService>,
    pub testimonials: Arc<TestimonialService>,
    pub news: Arc<NewsService>,
    pub categories: Arc<CategoryService>,
    pub comments: Arc<CommentService>,
    pub members: Arc<MemberService>,
    pub slides: Arc<SlideService>,
    pub activities: Arc<ActivityService>,
    pub uploads: Arc<UploadService>,
}

impl Services {
    pub fn new(pool: PgPool, config: &Config, storage: Arc<MinIOClient>) -> Self {
        let tokens = Arc::new(TokenService::new(&config.auth));
        let auth = Arc::new(AuthService::new(pool.clone(), tokens));
        tracing::info!("Auth service initialized");

        let contacts = Arc::new(ContactService::new(pool.clone()));
        let organizations = Arc::new(OrganizationService::new(
            pool.clone(),
            Arc::clone(&contacts),
        ));
        tracing::info!("Organization and contact services initialized");

        let comments = Arc::new(CommentService::new(pool.clone()));
        let news = Arc::new(NewsService::new(pool.clone(), Arc::clone(&comments)));
        tracing::info!("News and comment services initialized");

        let uploads = Arc::new(UploadService::new(storage, config.upload.clone()));
        tracing::info!("Upload service initialized");

        Self {
            auth,
            users: Arc::new(UserService::new(pool.clone())),
            roles: Arc::new(RoleService::new(pool.clone())),
            organizations,
            contacts,
            testimonials: Arc::new(TestimonialService::new(pool.clone())),
            news,
            categories: Arc::new(CategoryService::new(pool.clone())),
            comments,
            members: Arc::new(MemberService::new(pool.clone())),
            slides: Arc::new(SlideService::new(pool.clone())),
            activities: Arc::new(ActivityService::new(pool)),
            uploads,
        }
    }
}

async fn index() -> Json<ApiResponse<()>> {
    Json(ApiResponse::success(
        None,
        Some("Somos más API".to_string()),
        None,
    ))
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

fn swagger_routes(config: &Config) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    match config.swagger.credentials() {
        Some(credentials) => {
            tracing::info!("Swagger UI basic auth enabled");
            swagger.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
        }
        None => {
            tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
            swagger
        }
    }
}

/// Assemble the full application: API routers, docs, static files and
/// the cross-cutting layers.
pub fn build_router(services: Services, config: &Config) -> Router {
    // Protected routes (require a bearer token)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes(Arc::clone(&services.auth)))
        .merge(users_routes::protected_routes(services.users))
        .merge(roles_routes::protected_routes(services.roles))
        .merge(organizations_routes::protected_routes(Arc::clone(
            &services.organizations,
        )))
        .merge(contacts_routes::protected_routes(Arc::clone(
            &services.contacts,
        )))
        .merge(testimonials_routes::protected_routes(Arc::clone(
            &services.testimonials,
        )))
        .merge(news_routes::protected_routes(Arc::clone(&services.news)))
        .merge(categories_routes::protected_routes(Arc::clone(
            &services.categories,
        )))
        .merge(comments_routes::protected_routes(services.comments))
        .merge(members_routes::protected_routes(Arc::clone(
            &services.members,
        )))
        .merge(slides_routes::protected_routes(Arc::clone(&services.slides)))
        .merge(activities_routes::protected_routes(Arc::clone(
            &services.activities,
        )))
        .merge(uploads_routes::protected_routes(services.uploads))
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::clone(&services.auth),
            middleware::auth_middleware,
        ));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .merge(auth_routes::public_routes(services.auth))
        .merge(organizations_routes::public_routes(services.organizations))
        .merge(contacts_routes::public_routes(services.contacts))
        .merge(testimonials_routes::public_routes(services.testimonials))
        .merge(news_routes::public_routes(services.news))
        .merge(categories_routes::public_routes(services.categories))
        .merge(members_routes::public_routes(services.members))
        .merge(slides_routes::public_routes(services.slides))
        .merge(activities_routes::public_routes(services.activities));

    let static_files = ServeDir::new(&config.app.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(middleware::not_found.into_service());

    let expose_panic_details = config.app.is_development();

    Router::new()
        .merge(swagger_routes(config))
        .merge(protected_routes)
        .merge(public_routes)
        .fallback_service(static_files)
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(CatchPanicLayer::custom(move |err| {
            middleware::panic_response(err, expose_panic_details)
        }))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        create_standard_user, lazy_pool, test_config, with_admin_auth, with_user,
    };
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn services(config: &Config) -> Services {
        let storage = Arc::new(MinIOClient::new(config.minio.clone()).unwrap());
        Services::new(lazy_pool(), config, storage)
    }

    fn server() -> TestServer {
        let config = test_config();
        TestServer::new(build_router(services(&config), &config)).unwrap()
    }

    /// News and user routes with the identity already attached, so the
    /// role guard and body validation run without a database round trip
    fn feature_routes(wrap: impl FnOnce(Router) -> Router) -> TestServer {
        let services = services(&test_config());
        let app = Router::new()
            .merge(news_routes::protected_routes(services.news))
            .merge(users_routes::protected_routes(services.users));
        TestServer::new(wrap(app)).unwrap()
    }

    #[tokio::test]
    async fn test_health_and_index_are_public() {
        let server = server();

        server.get("/health").await.assert_status_ok();

        let response = server.get("/").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["success"], true);
    }

    #[tokio::test]
    async fn test_protected_route_without_token_is_unauthorized() {
        let server = server();

        let response = server.get("/users").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "No token in request");
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthorized() {
        let server = server();

        let response = server
            .get("/auth/me")
            .authorization_bearer("not-a-jwt")
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_writes_need_a_token() {
        let server = server();

        for path in ["/news", "/members", "/slides", "/activities", "/roles"] {
            let response = server.post(path).json(&json!({})).await;
            response.assert_status(StatusCode::UNAUTHORIZED);
        }
    }

    #[tokio::test]
    async fn test_invalid_contact_is_rejected_before_storage() {
        let server = server();

        let response = server
            .post("/contacts")
            .json(&json!({
                "name": "Ana",
                "email": "not-an-email",
                "message": "hola"
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["errors"].is_array());
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_bad_request() {
        let server = server();

        let response = server
            .post("/auth/login")
            .content_type("application/json")
            .bytes("{not json".into())
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back_to_json_404() {
        let server = server();

        let response = server.get("/does-not-exist").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["message"], "Resource not found");

        let response = server.delete("/does-not-exist").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_static_files_are_served() {
        let server = server();

        let response = server.get("/robots.txt").await;
        response.assert_status_ok();
        assert!(response.text().contains("User-agent"));
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let server = server();

        let response = server.get("/health").await;
        assert!(response.headers().get("x-request-id").is_some());
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let server = server();

        let response = server.get("/api-docs/openapi.json").await;
        response.assert_status_ok();
        let doc: Value = response.json();
        assert_eq!(doc["info"]["title"], "Somos más API");
        assert!(doc["paths"]["/contacts"].is_object());
    }

    #[tokio::test]
    async fn test_role_is_checked_before_the_body() {
        let server = feature_routes(|app| {
            with_user(app, create_standard_user(5, "vecina@example.com"))
        });

        let response = server.post("/news").json(&json!({ "name": "" })).await;
        response.assert_status(StatusCode::FORBIDDEN);
        assert_eq!(response.json::<Value>()["message"], "Admin access required");

        server
            .get("/users")
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_body_is_validated_before_storage() {
        let server = feature_routes(with_admin_auth);

        let response = server.post("/news").json(&json!({ "name": "" })).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server
            .post("/news")
            .json(&json!({ "name": "", "image": "a.png", "content": "texto" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["errors"].is_array());
    }

    #[tokio::test]
    async fn test_bad_page_parameter_uses_the_envelope() {
        let server = server();

        for path in ["/members?page=abc", "/news?pageSize=many"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            let body: Value = response.json();
            assert_eq!(body["success"], false);
            assert!(body["message"]
                .as_str()
                .is_some_and(|m| m.starts_with("Invalid query parameter")));
        }
    }
}
