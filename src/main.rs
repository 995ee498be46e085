use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use medivoice::application::ports::{Mailer, ScribeClient};
use medivoice::application::services::{
    IngestionConfig, IngestionService, MetadataExtractor, ReportingService,
};
use medivoice::domain::MetadataDefaults;
use medivoice::infrastructure::mail::SmtpMailer;
use medivoice::infrastructure::observability::{init_tracing, TracingConfig};
use medivoice::infrastructure::scribe::HttpScribeClient;
use medivoice::infrastructure::storage::MediaStoreFactory;
use medivoice::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env();
    let settings = Settings::load(environment)?;

    init_tracing(TracingConfig::from_settings(&settings.logging));

    let store = MediaStoreFactory::create(&settings.storage)?;
    let scribe: Arc<dyn ScribeClient> = Arc::new(HttpScribeClient::new(
        &settings.scribe.base_url,
        settings.scribe.api_key.clone(),
    ));
    let mailer: Arc<dyn Mailer> = Arc::new(SmtpMailer::new(&settings.email));

    let ingestion_service = Arc::new(IngestionService::new(
        MetadataExtractor::new(Arc::clone(&store), MetadataDefaults::ingestion()),
        Arc::clone(&scribe),
        IngestionConfig {
            data_access_role_arn: settings.scribe.data_access_role_arn.clone(),
            note_template: settings.scribe.note_template.clone(),
        },
    ));

    let reporting_service = Arc::new(ReportingService::new(
        store,
        scribe,
        mailer,
        MetadataDefaults::reporting(),
        settings.email.sender.clone(),
    ));

    let state = AppState {
        ingestion_service,
        reporting_service,
    };
    let router = create_router(state);

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::from((host, settings.server.port));
    tracing::info!(%addr, environment = %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
