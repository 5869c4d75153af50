use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;

use movie_search::cli::{Cli, Command};
use movie_search::client::ProxyClient;
use movie_search::config::Config;
use movie_search::logging::{init_file_tracing, init_tracing};
use movie_search::proxy::ProxyServer;
use movie_search::store::{Completion, MovieStore, SearchState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Tui { .. } => init_file_tracing(),
        _ => init_tracing(),
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(&config).await
        }
        Command::Tui { api_base_url } => {
            if let Some(url) = api_base_url {
                config.client.api_base_url = url;
            }
            let store = build_store(&config)?;
            let handle = tokio::runtime::Handle::current();
            tokio::task::spawn_blocking(move || movie_search::ui::run(store, handle))
                .await
                .context("Terminal client task failed")??;
            Ok(())
        }
        Command::Search {
            term,
            pages,
            api_base_url,
        } => {
            if let Some(url) = api_base_url {
                config.client.api_base_url = url;
            }
            search(&config, &term, pages).await
        }
        Command::Details { id, api_base_url } => {
            if let Some(url) = api_base_url {
                config.client.api_base_url = url;
            }
            details(&config, &id).await
        }
    }
}

async fn serve(config: &Config) -> anyhow::Result<()> {
    let api_key = config
        .upstream
        .api_key()
        .context("Refusing to start without a provider API key")?;

    let mut server = ProxyServer::new(config, api_key)?;
    server.try_bind().await?;
    server.run().await?;
    Ok(())
}

fn build_store(config: &Config) -> anyhow::Result<MovieStore> {
    let client = ProxyClient::from_config(&config.client)?;
    Ok(MovieStore::new(Arc::new(client)))
}

async fn search(config: &Config, term: &str, pages: u32) -> anyhow::Result<()> {
    let store = build_store(config)?;
    if store.search(term).await == Completion::Skipped {
        bail!("Search term must not be blank");
    }
    for _ in 1..pages {
        if store.load_more().await != Completion::Fulfilled {
            break;
        }
    }

    let state = store.snapshot();
    print_results(&state);
    if let Some(error) = state.error {
        bail!(error);
    }
    Ok(())
}

async fn details(config: &Config, id: &str) -> anyhow::Result<()> {
    let store = build_store(config)?;
    store.get_details(id).await;

    let state = store.snapshot();
    if let Some(error) = state.error {
        bail!(error);
    }
    let Some(detail) = state.selected_detail else {
        bail!("No details returned for {id}");
    };
    println!("{}", serde_json::to_string_pretty(&detail)?);
    Ok(())
}

fn print_results(state: &SearchState) {
    if state.total_results > 0 {
        println!(
            "Found {} results (Page {} of {})",
            state.total_results, state.current_page, state.total_pages
        );
    }
    for movie in &state.movies {
        println!("{}\t{}\t{}", movie.id, movie.year, movie.title);
    }
}
