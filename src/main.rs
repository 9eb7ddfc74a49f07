use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use receipt_processor::application::processor::ReceiptProcessor;
use receipt_processor::config::Config;
use receipt_processor::infrastructure::in_memory::InMemoryReceiptStore;
use receipt_processor::interfaces::http::server::{serve, shutdown_signal};
use receipt_processor::interfaces::http::{RouterOptions, create_router};
use receipt_processor::logging::init_logging;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.debug, config.log_json);

    let processor = Arc::new(ReceiptProcessor::new(Box::new(
        InMemoryReceiptStore::new(),
    )));
    let router = create_router(
        processor,
        RouterOptions {
            debug: config.debug,
        },
    );

    let listener = TcpListener::bind(&config.addr)
        .await
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to bind {}", config.addr))?;
    let local_addr = listener.local_addr().into_diagnostic()?;

    info!(addr = %local_addr, debug = config.debug, "Started application");

    serve(
        listener,
        router,
        shutdown_signal(),
        config.shutdown_grace(),
    )
    .await
    .into_diagnostic()
    .wrap_err("HTTP server failed")?;

    Ok(())
}
