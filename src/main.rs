use std::env;
use std::sync::Arc;

use tokencheckr::cache::MemoryCache;
use tokencheckr::explain::OllamaBackend;
use tokencheckr::*;

const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "tinyllama";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Parse arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <contract_address> [audience]", args[0]);
        eprintln!("\nAudience profiles: auditor | developer | beginner | simple");
        eprintln!("\nExamples:");
        eprintln!("  {} 0xdAC17F958D2ee523a2206206994597C13D831ec7", args[0]);
        eprintln!("  {} 0xdAC17F958D2ee523a2206206994597C13D831ec7 beginner", args[0]);
        eprintln!("\nEnvironment:");
        eprintln!("  ETHERSCAN_API_KEY   block-explorer API key (required)");
        eprintln!("  OLLAMA_URL          explanation backend ({})", DEFAULT_OLLAMA_URL);
        eprintln!("  OLLAMA_MODEL        explanation model ({})", DEFAULT_MODEL);
        std::process::exit(1);
    }

    let address_str = &args[1];
    let audience: Option<Audience> = match args.get(2) {
        Some(raw) => match raw.parse() {
            Ok(audience) => Some(audience),
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    println!("🔍 TokenCheckr — contract risk scanner");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    // Parse address
    let address: ethers::types::Address = address_str
        .parse()
        .map_err(|_| ScannerError::InvalidAddress(address_str.to_string()))?;

    let api_key = env::var("ETHERSCAN_API_KEY").unwrap_or_else(|_| {
        eprintln!("⚠️  ETHERSCAN_API_KEY not set; requests may be rate-limited");
        String::new()
    });

    let explorer = ExplorerClient::new(api_key);
    let scanner = ContractScanner::new(explorer);

    println!("Scanning {:?}...\n", address);

    let result = scanner.scan(address).await?;
    println!("{}", result);

    if let Some(audience) = audience {
        let base_url = env::var("OLLAMA_URL").unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string());
        let model = env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        println!("Asking {} for a {} explanation...\n", model, audience);

        let requester = ExplanationRequester::new(
            Arc::new(OllamaBackend::new(base_url, model)),
            Arc::new(MemoryCache::new()),
        );

        let explanation = requester
            .explain(&result.address, &result.flags, audience)
            .await;

        println!("🧠 Explanation:");
        println!("{}", explanation.explanation);
        println!("\nRisk Score: {}/100", explanation.score);
    }

    Ok(())
}
