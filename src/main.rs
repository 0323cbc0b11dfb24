#[tokio::main]
async fn main() {
    if let Err(err) = ebay_mcp::mcp::server::run_stdio().await {
        eprintln!("ebay-mcp: {}", err);
        std::process::exit(1);
    }
}
