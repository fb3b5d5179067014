//! Tipos de erro para o cliente da API de publicações.
//!
//! Define [`ApiError`] com variantes para erros retornados pelo servidor e
//! falhas de rede. Usa `thiserror` para derivar `Display` e `Error`
//! automaticamente a partir dos atributos `#[error(...)]`.

use thiserror::Error;

/// Erros que podem ocorrer ao interagir com a API de publicações.
///
/// As variantes cobrem os dois cenários de falha:
/// - [`Api`](ApiError::Api) — o servidor respondeu com status não-2xx
///   (ex.: 401 token inválido, 404 publicação inexistente, 500 erro interno)
/// - [`Network`](ApiError::Network) — falha na camada de rede
#[derive(Debug, Error)]
pub enum ApiError {
    /// Erro retornado pela API. Contém o código de status HTTP e a mensagem
    /// de erro extraída do corpo da resposta.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Falha de rede subjacente (DNS, conexão recusada, timeout).
    /// Encapsula o erro original do `reqwest` via `#[from]`.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Código de status HTTP, quando a falha veio do servidor.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Network(_) => None,
        }
    }
}
