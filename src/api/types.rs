//! Tipos de dados para requisições e respostas da API de publicações.
//!
//! Todas as structs derivam `Serialize`/`Deserialize` conforme o formato JSON
//! dos endpoints `/publicacoes` do backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Limite padrão de registros por página.
pub const DEFAULT_PAGE_LIMIT: u32 = 30;
/// Limite máximo aceito pelo backend.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Status de uma publicação no fluxo do Kanban.
///
/// Os valores de wire seguem a API: `nova`, `lida`, `enviada_adv`, `concluida`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationStatus {
    Nova,
    Lida,
    EnviadaAdv,
    Concluida,
}

impl PublicationStatus {
    /// Todos os status, na ordem das colunas do quadro.
    pub const ALL: [PublicationStatus; 4] = [
        PublicationStatus::Nova,
        PublicationStatus::Lida,
        PublicationStatus::EnviadaAdv,
        PublicationStatus::Concluida,
    ];
}

impl std::fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublicationStatus::Nova => write!(f, "nova"),
            PublicationStatus::Lida => write!(f, "lida"),
            PublicationStatus::EnviadaAdv => write!(f, "enviada_adv"),
            PublicationStatus::Concluida => write!(f, "concluida"),
        }
    }
}

/// Uma publicação do DJE rastreada pelo quadro.
///
/// O motor do quadro só lê `id` e muta `status`; os demais campos são
/// payload de exibição, repassados como chegam do servidor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub id: i64,
    pub numero_processo: String,
    pub data_disponibilizacao: String,
    pub autores: String,
    pub advogados: String,
    pub reu: String,
    pub conteudo_completo: String,
    pub valor_principal_bruto: f64,
    pub valor_juros_moratorios: f64,
    pub honorarios_advocaticios: f64,
    pub status: PublicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_extracao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_publicacao: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filtros da listagem de publicações.
///
/// Campos `None` são omitidos da query string. O servidor trata um valor
/// presente-porém-vazio como filtro literal, então strings vazias nunca
/// devem ser enviadas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicationFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PublicationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_inicio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_fim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_processo: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for PublicationFilters {
    fn default() -> Self {
        Self {
            status: None,
            search: None,
            data_inicio: None,
            data_fim: None,
            autor: None,
            numero_processo: None,
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Metadados de paginação retornados junto com a listagem.
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

/// Uma página da listagem de publicações.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicationPage {
    pub data: Vec<Publication>,
    pub pagination: Pagination,
}

/// Corpo da requisição `PUT /publicacoes/{id}/status`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest {
    pub status: PublicationStatus,
}

/// Envelope `{ data, message }` da resposta de atualização de status.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusResponse {
    pub data: Publication,
    #[serde(default)]
    pub message: Option<String>,
}

/// Estatísticas agregadas de `GET /publicacoes/stats`.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicationStats {
    pub estatisticas: Estatisticas,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Estatisticas {
    pub total: u64,
    pub por_status: PorStatus,
    pub valores: Valores,
}

/// Contagem de publicações por status.
#[derive(Debug, Clone, Deserialize)]
pub struct PorStatus {
    pub nova: u64,
    pub lida: u64,
    pub enviada_adv: u64,
    pub concluida: u64,
}

/// Somatório e média dos valores monetários.
#[derive(Debug, Clone, Deserialize)]
pub struct Valores {
    pub total: f64,
    pub medio: f64,
}
