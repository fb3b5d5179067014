use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;

use super::error::ApiError;
use super::types::{
    Publication, PublicationFilters, PublicationPage, PublicationStats, PublicationStatus,
    UpdateStatusRequest, UpdateStatusResponse,
};

/// Operações da coleção de publicações consumidas pelo motor do quadro.
///
/// O cliente HTTP real ([`PublicationClient`]) implementa este trait; os
/// testes do motor usam implementações falsas.
#[async_trait]
pub trait PublicationApi: Send + Sync {
    /// Lista uma página de publicações de acordo com os filtros.
    async fn list(&self, filters: &PublicationFilters) -> Result<PublicationPage, ApiError>;

    /// Atualiza o status de uma publicação e retorna o registro atualizado.
    async fn update_status(
        &self,
        id: i64,
        status: PublicationStatus,
    ) -> Result<Publication, ApiError>;

    /// Retorna as estatísticas agregadas por status.
    async fn stats(&self) -> Result<PublicationStats, ApiError>;
}

/// Cliente HTTP dos endpoints `/publicacoes`.
pub struct PublicationClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

// Corpo de erro padrão da API: `{ "error": "..." }`.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl PublicationClient {
    /// Cria um cliente apontando para a URL base informada, com um token
    /// bearer opcional para as rotas autenticadas.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            base_url: base_url.into(),
            token,
        }
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Converte respostas não-2xx em [`ApiError::Api`], extraindo a mensagem
    /// do corpo `{ "error": ... }` quando presente.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl PublicationApi for PublicationClient {
    async fn list(&self, filters: &PublicationFilters) -> Result<PublicationPage, ApiError> {
        let response = self
            .authorize(self.http.get(format!("{}/publicacoes", self.base_url)))
            .query(filters)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json::<PublicationPage>().await?)
    }

    async fn update_status(
        &self,
        id: i64,
        status: PublicationStatus,
    ) -> Result<Publication, ApiError> {
        let response = self
            .authorize(
                self.http
                    .put(format!("{}/publicacoes/{id}/status", self.base_url)),
            )
            .json(&UpdateStatusRequest { status })
            .send()
            .await?;
        let response = Self::check(response).await?;
        let body = response.json::<UpdateStatusResponse>().await?;
        Ok(body.data)
    }

    async fn stats(&self) -> Result<PublicationStats, ApiError> {
        let response = self
            .authorize(self.http.get(format!("{}/publicacoes/stats", self.base_url)))
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json::<PublicationStats>().await?)
    }
}
