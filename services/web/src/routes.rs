use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use proplus::catalog::PropertyId;
use proplus::notifications::{ActiveNotification, NotificationId};
use proplus::site::{AuthMode, AuthModalView, AuthSubmission, Route, ShellView, SocialProvider};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub(crate) fn site_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/page", get(page_endpoint))
        .route("/api/v1/navigate", post(navigate_endpoint))
        .route("/api/v1/navigate/back", post(navigate_back_endpoint))
        .route("/api/v1/navbar/click", post(navbar_click_endpoint))
        .route("/api/v1/navbar/menu", post(menu_toggle_endpoint))
        .route("/api/v1/notifications", get(notifications_endpoint))
        .route(
            "/api/v1/notifications/:id/dismiss",
            post(dismiss_endpoint),
        )
        .route(
            "/api/v1/favorites/:id/toggle",
            post(toggle_favorite_endpoint),
        )
        .route("/api/v1/auth/open", post(auth_open_endpoint))
        .route("/api/v1/auth/close", post(auth_close_endpoint))
        .route("/api/v1/auth/switch", post(auth_switch_endpoint))
        .route("/api/v1/auth/submit", post(auth_submit_endpoint))
        .route("/api/v1/auth/social", post(auth_social_endpoint))
        .route("/api/v1/search", post(search_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Acquire);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Deserialize)]
pub(crate) struct NavigateRequest {
    pub(crate) path: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct NavigateBackResponse {
    pub(crate) moved: bool,
    pub(crate) view: ShellView,
}

#[derive(Debug, Serialize)]
pub(crate) struct FavoriteToggleResponse {
    pub(crate) property_id: u32,
    pub(crate) is_favorite: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthOpenRequest {
    pub(crate) mode: AuthMode,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthSubmitRequest {
    #[serde(default)]
    pub(crate) email: String,
    pub(crate) password: String,
    #[serde(default)]
    pub(crate) confirm_password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AuthSubmitResponse {
    pub(crate) outcome: AuthSubmission,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthSocialRequest {
    pub(crate) provider: SocialProvider,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchRequest {
    pub(crate) location: String,
}

pub(crate) async fn page_endpoint(Extension(state): Extension<AppState>) -> Json<ShellView> {
    Json(state.shell().render(&state.brand))
}

pub(crate) async fn navigate_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<NavigateRequest>,
) -> Response {
    let mut shell = state.shell();
    if shell.navigate_path(&payload.path) {
        Json(shell.render(&state.brand)).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown path: {}", payload.path) })),
        )
            .into_response()
    }
}

pub(crate) async fn navigate_back_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<NavigateBackResponse> {
    let mut shell = state.shell();
    let moved = shell.navigate_back();
    Json(NavigateBackResponse {
        moved,
        view: shell.render(&state.brand),
    })
}

/// A navbar item click raises the coming-soon notice and collapses the
/// mobile menu; it never navigates on its own.
pub(crate) async fn navbar_click_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<NavigateRequest>,
) -> Response {
    let Some(route) = Route::from_path(&payload.path) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown path: {}", payload.path) })),
        )
            .into_response();
    };

    let mut shell = state.shell();
    shell.navbar_mut().nav_click(route, &state.notifications);
    let view = shell.navbar().view(&state.brand, shell.current_route());
    Json(view).into_response()
}

pub(crate) async fn menu_toggle_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<serde_json::Value> {
    let mut shell = state.shell();
    shell.navbar_mut().toggle_menu();
    Json(json!({ "menu_open": shell.navbar().menu_open() }))
}

/// The visible stack after retiring every message past its deadline.
pub(crate) async fn notifications_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<Vec<ActiveNotification>> {
    state.notifications.sweep();
    Json(state.notifications.active())
}

pub(crate) async fn dismiss_endpoint(
    Extension(state): Extension<AppState>,
    Path(id): Path<u64>,
) -> Response {
    if state.notifications.dismiss(NotificationId(id)) {
        Json(json!({ "dismissed": true })).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "notification not found" })),
        )
            .into_response()
    }
}

pub(crate) async fn toggle_favorite_endpoint(
    Extension(state): Extension<AppState>,
    Path(id): Path<u32>,
) -> Response {
    let mut shell = state.shell();
    let Some(cards) = shell.page_mut().cards_mut() else {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "error": "current page renders no property cards" })),
        )
            .into_response();
    };

    let property_id = PropertyId(id);
    if !cards.contains(property_id) {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown property: {id}") })),
        )
            .into_response();
    }

    let is_favorite = cards.toggle_favorite(property_id);
    Json(FavoriteToggleResponse {
        property_id: id,
        is_favorite,
    })
    .into_response()
}

pub(crate) async fn auth_open_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AuthOpenRequest>,
) -> Json<AuthModalView> {
    let mut shell = state.shell();
    shell.open_auth(payload.mode);
    Json(shell.auth().view())
}

pub(crate) async fn auth_close_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<AuthModalView> {
    let mut shell = state.shell();
    shell.auth_mut().close();
    Json(shell.auth().view())
}

pub(crate) async fn auth_switch_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<AuthModalView> {
    let mut shell = state.shell();
    shell.auth_mut().switch_mode();
    Json(shell.auth().view())
}

pub(crate) async fn auth_submit_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AuthSubmitRequest>,
) -> Json<AuthSubmitResponse> {
    let mut shell = state.shell();
    shell.auth_mut().set_email(payload.email);
    shell.auth_mut().set_password(payload.password);
    shell.auth_mut().set_confirm_password(payload.confirm_password);

    let outcome = shell.auth().submit(&state.notifications);
    Json(AuthSubmitResponse { outcome })
}

pub(crate) async fn auth_social_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AuthSocialRequest>,
) -> Json<serde_json::Value> {
    let shell = state.shell();
    shell.auth().social_auth(payload.provider, &state.notifications);
    Json(json!({ "status": "ok" }))
}

/// Hero search only exists on the home page.
pub(crate) async fn search_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<SearchRequest>,
) -> Response {
    let mut shell = state.shell();
    let Some(home) = shell.page_mut().home_mut() else {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "error": "search is only available on the home page" })),
        )
            .into_response();
    };

    home.show_search();
    home.search.set_location(payload.location);
    let searched = home.search.submit_location(&state.notifications);
    Json(json!({ "searched": searched })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        AppState::new(handle, "ProPlus")
    }

    #[tokio::test]
    async fn navigate_rejects_unknown_paths() {
        let state = test_state();

        let response = navigate_endpoint(
            Extension(state.clone()),
            Json(NavigateRequest {
                path: "/remates".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(state.shell().current_route(), Route::Home);
    }

    #[tokio::test]
    async fn navigating_to_a_stub_page_raises_its_notice() {
        let state = test_state();

        let response = navigate_endpoint(
            Extension(state.clone()),
            Json(NavigateRequest {
                path: "/comprar".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let stack = state.notifications.active();
        assert_eq!(stack.len(), 1);
        assert!(stack[0].title.contains("no está implementada"));
    }

    #[tokio::test]
    async fn favorite_toggle_conflicts_on_stub_pages() {
        let state = test_state();
        state.shell().navigate_to(Route::Buy);

        let response =
            toggle_favorite_endpoint(Extension(state.clone()), Path(1)).await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn favorite_toggle_flips_the_card_state() {
        let state = test_state();

        let first = toggle_favorite_endpoint(Extension(state.clone()), Path(1)).await;
        assert_eq!(first.status(), StatusCode::OK);
        assert!(state
            .shell()
            .page_mut()
            .cards_mut()
            .expect("home has cards")
            .is_favorite(PropertyId(1)));

        let second = toggle_favorite_endpoint(Extension(state.clone()), Path(1)).await;
        assert_eq!(second.status(), StatusCode::OK);
        assert!(!state
            .shell()
            .page_mut()
            .cards_mut()
            .expect("home has cards")
            .is_favorite(PropertyId(1)));
    }

    #[tokio::test]
    async fn favorite_toggle_rejects_unknown_properties() {
        let state = test_state();

        let response =
            toggle_favorite_endpoint(Extension(state.clone()), Path(999)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn register_mismatch_reports_the_validation_outcome() {
        let state = test_state();
        auth_open_endpoint(
            Extension(state.clone()),
            Json(AuthOpenRequest {
                mode: AuthMode::Register,
            }),
        )
        .await;

        let Json(body) = auth_submit_endpoint(
            Extension(state.clone()),
            Json(AuthSubmitRequest {
                email: "cliente@proplus.cl".to_string(),
                password: "abc".to_string(),
                confirm_password: "xyz".to_string(),
            }),
        )
        .await;

        assert_eq!(body.outcome, AuthSubmission::PasswordMismatch);
        assert!(state.notifications.active()[0]
            .title
            .contains("Error de validación"));
    }

    #[tokio::test]
    async fn search_conflicts_off_the_home_page() {
        let state = test_state();
        state.shell().navigate_to(Route::FeaturedProperties);

        let response = search_endpoint(
            Extension(state.clone()),
            Json(SearchRequest {
                location: "Las Condes".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn search_on_home_names_the_location() {
        let state = test_state();

        let response = search_endpoint(
            Extension(state.clone()),
            Json(SearchRequest {
                location: "  Las Condes ".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            state.notifications.active()[0].title,
            "🔍 Buscando en: Las Condes"
        );
    }

    #[tokio::test]
    async fn router_serves_the_page_view() {
        let app = site_router().layer(Extension(test_state()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/page")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_follows_the_flag() {
        let state = test_state();

        let initializing = readiness_endpoint(Extension(state.clone()))
            .await
            .into_response();
        assert_eq!(initializing.status(), StatusCode::SERVICE_UNAVAILABLE);

        state
            .readiness
            .store(true, std::sync::atomic::Ordering::Release);
        let ready = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(ready.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn router_reports_health() {
        let app = site_router().layer(Extension(test_state()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
    }
}
