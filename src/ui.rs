//! Interface de terminal do juscash — spinners e saída colorida.
//!
//! Usa as crates `indicatif` para o spinner de carregamento e `console` para
//! estilização com cores ao imprimir o quadro, estatísticas e resultados de
//! movimentação.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use juscash::api::{PublicationStats, PublicationStatus};
use juscash::board::{columns, BoardSnapshot, MoveOutcome};

/// Inicia um spinner enquanto uma operação de rede está em andamento.
pub fn loading_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("invalid template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Imprime as quatro colunas do quadro derivadas do snapshot.
pub fn print_board(snapshot: &BoardSnapshot) {
    let title_style = Style::new().cyan().bold();
    let done_style = Style::new().green().bold();
    let dim = Style::new().dim();

    if let Some(error) = &snapshot.error {
        print_error(&error.to_string());
    }

    for column in columns(snapshot) {
        let style = match column.status {
            PublicationStatus::Concluida => &done_style,
            _ => &title_style,
        };
        println!();
        println!(
            "{} ({})",
            style.apply_to(column.title),
            column.publications.len()
        );
        if column.publications.is_empty() {
            println!("  {}", dim.apply_to("nenhuma publicação"));
            continue;
        }
        for publication in &column.publications {
            println!(
                "  #{} {} — {}",
                publication.id, publication.numero_processo, publication.autores
            );
        }
        if column.has_more {
            println!("  {}", dim.apply_to("… mais publicações disponíveis"));
        }
    }
    println!();
}

/// Imprime o resultado de uma movimentação de card.
pub fn print_move_outcome(outcome: MoveOutcome, id: i64, status: PublicationStatus) {
    let green = Style::new().green().bold();
    let red = Style::new().red().bold();
    let yellow = Style::new().yellow();

    match outcome {
        MoveOutcome::Moved => println!(
            "{} Publicação #{id} movida para {status}",
            green.apply_to("✓")
        ),
        MoveOutcome::Rejected => println!(
            "{} Movimento não permitido para {status}",
            red.apply_to("✗")
        ),
        MoveOutcome::NotFound => println!(
            "{} Publicação #{id} não encontrada no quadro",
            yellow.apply_to("!")
        ),
        MoveOutcome::Failed => println!(
            "{} O servidor rejeitou a movimentação; quadro ressincronizado",
            red.apply_to("✗")
        ),
    }
}

/// Imprime as estatísticas agregadas por status.
pub fn print_stats(stats: &PublicationStats) {
    let bold = Style::new().bold();
    let e = &stats.estatisticas;

    println!("{}", bold.apply_to("─── Publicações ───"));
    println!("  total:        {}", e.total);
    println!("  novas:        {}", e.por_status.nova);
    println!("  lidas:        {}", e.por_status.lida);
    println!("  enviadas ADV: {}", e.por_status.enviada_adv);
    println!("  concluídas:   {}", e.por_status.concluida);
    println!("{}", bold.apply_to("─── Valores ───"));
    println!("  total: {}", format_brl(e.valores.total));
    println!("  médio: {}", format_brl(e.valores.medio));
}

/// Imprime uma mensagem de erro em vermelho.
pub fn print_error(message: &str) {
    let red = Style::new().red().bold();
    eprintln!("{} {message}", red.apply_to("✗"));
}

// Formatação monetária simplificada (sem separador de milhar).
fn format_brl(value: f64) -> String {
    format!("R$ {:.2}", value).replace('.', ",")
}
