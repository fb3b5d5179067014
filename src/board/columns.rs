use crate::api::{Publication, PublicationStatus};

use super::engine::BoardSnapshot;

/// Título exibido no cabeçalho de cada coluna do quadro.
pub fn column_title(status: PublicationStatus) -> &'static str {
    match status {
        PublicationStatus::Nova => "Publicações Novas",
        PublicationStatus::Lida => "Publicações Lidas",
        PublicationStatus::EnviadaAdv => "Enviadas para ADV",
        PublicationStatus::Concluida => "Concluídas",
    }
}

/// Uma coluna derivada do snapshot do quadro.
///
/// Visão pura, sem estado próprio: recalculada a cada snapshot. Os
/// indicadores `has_more`/`loading_more` vêm do cursor único compartilhado,
/// então carregar mais em uma coluna avança a paginação de todas.
#[derive(Debug, Clone)]
pub struct Column<'a> {
    pub status: PublicationStatus,
    pub title: &'static str,
    pub publications: Vec<&'a Publication>,
    pub has_more: bool,
    pub loading_more: bool,
}

/// Publicações do snapshot com o status dado, na ordem de chegada.
pub fn by_status(snapshot: &BoardSnapshot, status: PublicationStatus) -> Vec<&Publication> {
    snapshot
        .publications
        .iter()
        .filter(|p| p.status == status)
        .collect()
}

/// As quatro colunas do quadro, na ordem do fluxo de trabalho.
pub fn columns(snapshot: &BoardSnapshot) -> Vec<Column<'_>> {
    PublicationStatus::ALL
        .into_iter()
        .map(|status| Column {
            status,
            title: column_title(status),
            publications: by_status(snapshot, status),
            has_more: snapshot.cursor.has_more,
            loading_more: snapshot.cursor.loading_more,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::board::engine::{PageCursor, QueryState};

    fn record(id: i64, status: PublicationStatus) -> Publication {
        Publication {
            id,
            numero_processo: format!("proc-{id}"),
            data_disponibilizacao: "2024-03-15".into(),
            autores: "Maria da Silva".into(),
            advogados: "João Souza".into(),
            reu: "INSS".into(),
            conteudo_completo: String::new(),
            valor_principal_bruto: 0.0,
            valor_juros_moratorios: 0.0,
            honorarios_advocaticios: 0.0,
            status,
            data_extracao: None,
            url_publicacao: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn snapshot(publications: Vec<Publication>, cursor: PageCursor) -> BoardSnapshot {
        BoardSnapshot {
            publications,
            cursor,
            query: QueryState::default(),
            error: None,
        }
    }

    #[test]
    fn partitions_by_status_preserving_arrival_order() {
        let snap = snapshot(
            vec![
                record(1, PublicationStatus::Nova),
                record(2, PublicationStatus::Lida),
                record(3, PublicationStatus::Nova),
            ],
            PageCursor::default(),
        );

        let novas = by_status(&snap, PublicationStatus::Nova);
        assert_eq!(
            novas.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert!(by_status(&snap, PublicationStatus::Concluida).is_empty());
    }

    #[test]
    fn four_columns_in_workflow_order() {
        let snap = snapshot(vec![], PageCursor::default());
        let cols = columns(&snap);
        assert_eq!(cols.len(), 4);
        assert_eq!(cols[0].title, "Publicações Novas");
        assert_eq!(cols[1].status, PublicationStatus::Lida);
        assert_eq!(cols[2].title, "Enviadas para ADV");
        assert_eq!(cols[3].status, PublicationStatus::Concluida);
    }

    #[test]
    fn shared_cursor_drives_every_column() {
        let cursor = PageCursor {
            page: 2,
            has_more: true,
            loading: false,
            loading_more: true,
        };
        let snap = snapshot(vec![record(1, PublicationStatus::Nova)], cursor);

        for column in columns(&snap) {
            assert!(column.has_more);
            assert!(column.loading_more);
        }
    }

    #[test]
    fn duplicate_ids_are_not_deduplicated() {
        // Append-only growth during load-more can repeat ids; the projection
        // must not collapse them.
        let snap = snapshot(
            vec![
                record(1, PublicationStatus::Nova),
                record(1, PublicationStatus::Nova),
            ],
            PageCursor::default(),
        );
        assert_eq!(by_status(&snap, PublicationStatus::Nova).len(), 2);
    }
}
