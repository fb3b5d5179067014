mod cli;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use juscash::api::{PublicationApi, PublicationClient, PublicationStatus};
use juscash::board::{BoardEngine, QueryState};
use juscash::config::JuscashConfig;
use juscash::error::JuscashError;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = JuscashConfig::load()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(token) = cli.token {
        config.token = token;
    }

    let token = (!config.token.is_empty()).then(|| config.token.clone());
    let client = Arc::new(PublicationClient::new(config.api_url.clone(), token));

    match cli.command {
        Command::Board {
            search,
            de,
            ate,
            pages,
        } => run_board(client, &config, search, de, ate, pages).await?,
        Command::Move { id, status } => run_move(client, &config, id, status.into()).await?,
        Command::Stats => run_stats(client).await?,
    }

    Ok(())
}

async fn run_board(
    client: Arc<PublicationClient>,
    config: &JuscashConfig,
    search: Option<String>,
    de: Option<String>,
    ate: Option<String>,
    pages: u32,
) -> Result<(), JuscashError> {
    let engine = BoardEngine::with_limit(client, config.page_limit);

    let spinner = ui::loading_spinner("Carregando publicações...");
    engine
        .set_query(QueryState {
            search,
            data_inicio: de,
            data_fim: ate,
        })
        .await;
    for _ in 1..pages {
        if engine.snapshot().await.error.is_some() {
            break;
        }
        engine.load_more().await;
    }
    spinner.finish_and_clear();

    ui::print_board(&engine.snapshot().await);
    Ok(())
}

async fn run_move(
    client: Arc<PublicationClient>,
    config: &JuscashConfig,
    id: i64,
    status: PublicationStatus,
) -> Result<(), JuscashError> {
    let engine = BoardEngine::with_limit(client, config.page_limit);

    let spinner = ui::loading_spinner("Carregando publicações...");
    engine.reload().await;
    // A publicação pode estar em uma página ainda não carregada.
    loop {
        let snap = engine.snapshot().await;
        let found = snap.publications.iter().any(|p| p.id == id);
        if found || !snap.cursor.has_more || snap.error.is_some() {
            break;
        }
        engine.load_more().await;
        if engine.snapshot().await.cursor.page == snap.cursor.page {
            // A página não avançou; evita repetir a mesma requisição.
            break;
        }
    }
    spinner.finish_and_clear();

    let outcome = engine.move_card(id, status).await;
    ui::print_move_outcome(outcome, id, status);
    if let Some(error) = engine.snapshot().await.error {
        ui::print_error(&error.to_string());
    }
    Ok(())
}

async fn run_stats(client: Arc<PublicationClient>) -> Result<(), JuscashError> {
    let spinner = ui::loading_spinner("Carregando estatísticas...");
    let stats = client.stats().await?;
    spinner.finish_and_clear();

    ui::print_stats(&stats);
    Ok(())
}
