use clap::Parser;
use whatshot::cli::Config;

#[tokio::main]
async fn main() {
    let config = Config::parse();
    whatshot::cli::run(config).await
}
