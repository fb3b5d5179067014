//! Interface de linha de comando do juscash baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (board, move, stats)
//! e flags globais (--api-url, --token).

use clap::{Parser, Subcommand, ValueEnum};

use juscash::api::PublicationStatus;

/// juscash — Quadro Kanban de publicações do DJE.
#[derive(Debug, Parser)]
#[command(name = "juscash", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// URL base da API (sobrepõe `juscash.toml` e `JUSCASH_API_URL`).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Token de autenticação (sobrepõe `juscash.toml` e `JUSCASH_TOKEN`).
    #[arg(long, global = true)]
    pub token: Option<String>,
}

/// Status aceito pela CLI, mapeado para [`PublicationStatus`] internamente.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    /// Publicação recém-extraída, ainda não lida.
    Nova,
    /// Publicação já lida pela equipe.
    Lida,
    /// Enviada para o advogado responsável.
    EnviadaAdv,
    /// Processo concluído.
    Concluida,
}

impl From<StatusArg> for PublicationStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Nova => PublicationStatus::Nova,
            StatusArg::Lida => PublicationStatus::Lida,
            StatusArg::EnviadaAdv => PublicationStatus::EnviadaAdv,
            StatusArg::Concluida => PublicationStatus::Concluida,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Mostra o quadro Kanban de publicações.
    Board {
        /// Busca por número do processo, autor, réu ou advogado.
        #[arg(long)]
        search: Option<String>,

        /// Data inicial de disponibilização (YYYY-MM-DD).
        #[arg(long)]
        de: Option<String>,

        /// Data final de disponibilização (YYYY-MM-DD).
        #[arg(long)]
        ate: Option<String>,

        /// Quantidade de páginas a carregar.
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },

    /// Move uma publicação para outra coluna do quadro.
    Move {
        /// Identificador da publicação.
        id: i64,

        /// Coluna de destino.
        status: StatusArg,
    },

    /// Mostra estatísticas agregadas das publicações.
    Stats,
}
