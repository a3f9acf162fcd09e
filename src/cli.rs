use clap::Parser;
use std::path::PathBuf;

/// OpenAPI mock generator - random responses for every documented endpoint
#[derive(Parser, Debug, Clone)]
#[command(name = "oasmock", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "OASMOCK_CONFIG", default_value = "oasmock.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "OASMOCK_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "OASMOCK_PORT")]
    pub port: Option<u16>,

    /// OpenAPI document (YAML or JSON) to generate mocks for
    #[arg(short, long, env = "OASMOCK_DOCUMENT")]
    pub document: Option<PathBuf>,

    /// Print the generated mocks to stdout and exit instead of serving them
    #[arg(long)]
    pub once: bool,
}
