use clap::Parser;
use todolist_app::{Config, Session, UreqTransport};
use todolist_core::{TodoApi, TodoClient};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todolist=info,todolist_app=info,todolist_core=warn".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = Config::parse();
    tracing::info!(base_url = %config.base_url, "starting");

    let api = TodoApi::new(TodoClient::new(&config.base_url), UreqTransport::new());
    let mut session = Session::start(api);
    session.run(std::io::stdin().lock(), std::io::stdout().lock())
}
