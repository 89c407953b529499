use std::env;

use ablepath_rules::RuleSet;
use ablepath_service::{AppState, router};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bind = env::var("ABLEPATH_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());

    // A rule table that fails validation must stop the process before it
    // starts answering with empty recommendations.
    let rules = match env::var_os("ABLEPATH_RULES") {
        Some(path) => RuleSet::load(path)?,
        None => {
            let rules = RuleSet::builtin();
            rules.validate()?;
            tracing::info!(
                codes = rules.registry.len(),
                keyword_rules = rules.keyword_rules.len(),
                code_rules = rules.code_rules.len(),
                "using built-in rule tables"
            );
            rules
        }
    };

    let app = router(AppState::new(rules));
    let listener = TcpListener::bind(&bind).await?;
    tracing::info!(%bind, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
