use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use docsum::application::ports::{EngineProbe, LlmClient, StagingStore};
use docsum::application::services::{ExtractionService, SummaryService};
use docsum::infrastructure::llm::GeminiClient;
use docsum::infrastructure::observability::{TracingConfig, init_tracing};
use docsum::infrastructure::ocr::TesseractProbe;
use docsum::infrastructure::storage::LocalStagingStore;
use docsum::infrastructure::text_processing::ExtractorFactory;
use docsum::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let store: Arc<dyn StagingStore> = Arc::new(LocalStagingStore::new(PathBuf::from(
        &settings.storage.upload_dir,
    ))?);
    let strategies = ExtractorFactory::create(&settings.extraction)?;
    let extraction_service = Arc::new(ExtractionService::new(store, strategies));

    if settings.llm.api_key.is_empty() {
        tracing::warn!("No Gemini API key configured, summaries will fail");
    }
    let llm_client: Arc<dyn LlmClient> = Arc::new(GeminiClient::new(
        settings.llm.api_key.clone(),
        Some(settings.llm.base_url.clone()),
        Some(settings.llm.model.clone()),
        Duration::from_secs(settings.llm.timeout_secs),
    )?);
    let summary_service = Arc::new(SummaryService::new(llm_client));

    let probe = TesseractProbe::new(
        PathBuf::from(&settings.extraction.ocr.tesseract_path),
        Duration::from_secs(settings.extraction.ocr.probe_timeout_secs),
    );
    match probe.check().await {
        Ok(version) => tracing::info!(version = %version, "Tesseract OCR available"),
        Err(e) => tracing::warn!(
            error = %e,
            "Tesseract OCR not reachable, image uploads will fail until it is installed"
        ),
    }

    let host = settings.server.host.clone();
    let port = settings.server.port;

    let state = AppState {
        extraction_service,
        summary_service,
        settings: Arc::new(settings),
    };

    let router = create_router(state);

    let listener = TcpListener::bind((host.as_str(), port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
