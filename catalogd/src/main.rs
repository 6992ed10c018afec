use catalog_axum::start_server;
use catalog_core::ports::{Application as _, ProductRepository as _};
use catalogd::{AppConfig, CatalogApp, Cli, Command};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project.
    // Accordingly, we likely want to subscribe to these events so we can
    // write them to stdio and possibly some durable location.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;

    // Create config with proper layering of CLI args
    let AppConfig {
        server,
        database,
        on_connect_failure,
    } = AppConfig::load(&cli)?;

    // Open database with config; a failure here is fatal or survivable
    // depending on the configured policy
    let app = CatalogApp::connect(&database, on_connect_failure).await?;

    // Maintenance commands run instead of the server
    if let Some(Command::Clear) = cli.command {
        match app.database() {
            Some(db) => {
                db.clear_products().await?;
                tracing::info!("Registros eliminados correctamente");
                return Ok(());
            }
            None => anyhow::bail!("no hay conexión a la base de datos"),
        }
    }

    start_server(server, app).await?;

    Ok(())
}
