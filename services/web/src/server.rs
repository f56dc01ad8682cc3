use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::site_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use proplus::config::AppConfig;
use proplus::error::AppError;
use proplus::notifications::NotificationCenter;
use proplus::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// How often expired notifications are retired while serving.
const SWEEP_INTERVAL: Duration = Duration::from_millis(250);

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let app_state = AppState::new(prometheus_handle, &config.site.brand);
    let readiness_flag = app_state.readiness.clone();
    let notifications = app_state.notifications.clone();

    spawn_notification_sweeper(notifications.clone());

    let app = site_router()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, brand = %config.site.brand, "property site service ready");

    axum::serve(listener, app).await?;

    notifications.clear();
    Ok(())
}

/// The notification center is clock-explicit; while serving, this task is
/// the clock.
fn spawn_notification_sweeper(center: Arc<NotificationCenter>) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            center.sweep();
        }
    });
}
