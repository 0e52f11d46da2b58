use std::sync::Arc;

use tower_http::cors::CorsLayer;

use horeca_match::config::ServerConfig;
use horeca_match::onboarding::{
    FlowManager, OnboardingRouteState, applicant_flow, employer_flow, onboarding_routes,
};
use horeca_match::session::{Role, SessionContext};
use horeca_match::submit::LogSubmitter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;

    let (flow, role) = match config.flow.as_str() {
        "employer" => (employer_flow()?, Role::Employer),
        _ => (applicant_flow()?, Role::Applicant),
    };

    eprintln!("🍳 HoReCa Match v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Flow: {} ({} steps)", flow.name, flow.total_steps());
    eprintln!(
        "   API: http://0.0.0.0:{}/api/onboarding/status",
        config.port
    );

    let session = SessionContext::new("local", role);
    let manager = Arc::new(FlowManager::new(session, flow, Arc::new(LogSubmitter)));

    let app = onboarding_routes(OnboardingRouteState { manager }).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "Onboarding API started");
    axum::serve(listener, app).await?;

    Ok(())
}
