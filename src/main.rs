use clap::Parser;
use oasmock::adapters::document::DocumentLoader;
use oasmock::adapters::mock_generator::MockGenerator;
use oasmock::adapters::mock_handler::MocksResponse;
use oasmock::adapters::random::EntropySource;
use oasmock::cli::Cli;
use oasmock::config::Settings;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `--once` output stays valid JSON
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    if cli.once {
        let document = DocumentLoader::load(&settings.document.path)?;
        let mocks = MockGenerator::new(settings.generator.reference_scope)
            .generate_all(&document, &mut EntropySource::new());
        println!("{}", serde_json::to_string_pretty(&MocksResponse { mocks })?);
        return Ok(());
    }

    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!(
        "Starting oasmock on {}:{} for {}",
        host,
        port,
        settings.document.path.display()
    );

    let app = oasmock::create_app(Arc::new(RwLock::new(settings)));

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
