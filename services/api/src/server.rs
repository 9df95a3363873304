use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_application_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use creditinder::applications::ApplicationRegistry;
use creditinder::config::AppConfig;
use creditinder::error::AppError;
use creditinder::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if args.no_samples {
        config.registry.seed_samples = false;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let registry = if config.registry.seed_samples {
        ApplicationRegistry::with_samples()
    } else {
        ApplicationRegistry::new()
    };
    let registry = Arc::new(registry);

    let app = with_application_routes(registry.clone())
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        applications = registry.len(),
        "creditinder voting service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
