use medbook_booking::BookingConfig;
use medbook_ledger::LedgerConfig;
use medbook_runner::App;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = match App::build(LedgerConfig::from_env(), BookingConfig::from_env()) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("failed to wire services: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = app.run().await {
        tracing::error!("medbook exited with error: {err}");
        std::process::exit(1);
    }
}
