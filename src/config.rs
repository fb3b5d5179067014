//! Configuração do juscash carregada a partir de `juscash.toml`.
//!
//! A struct [`JuscashConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis. As variáveis de
//! ambiente `JUSCASH_API_URL` e `JUSCASH_TOKEN` têm precedência sobre o
//! arquivo.

use std::path::Path;

use serde::Deserialize;

use crate::api::MAX_PAGE_LIMIT;
use crate::error::JuscashError;

/// Configuração de nível superior carregada de `juscash.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct JuscashConfig {
    /// URL base da API de publicações.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Token bearer para as rotas autenticadas. A sessão em si (login,
    /// registro, renovação) é responsabilidade de um colaborador externo.
    #[serde(default)]
    pub token: String,

    /// Registros por página nas listagens.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

// URL padrão do backend em desenvolvimento local.
fn default_api_url() -> String {
    "http://localhost:3001/api".to_string()
}

// Limite de página padrão: 30.
fn default_page_limit() -> u32 {
    30
}

impl Default for JuscashConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: String::new(),
            page_limit: default_page_limit(),
        }
    }
}

impl JuscashConfig {
    /// Carrega a configuração de `juscash.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self, JuscashError> {
        Self::load_from(Path::new("juscash.toml"))
    }

    fn load_from(path: &Path) -> Result<Self, JuscashError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<JuscashConfig>(&contents)?
        } else {
            Self::default()
        };

        // Variáveis de ambiente têm precedência sobre o arquivo.
        if let Ok(url) = std::env::var("JUSCASH_API_URL")
            && !url.is_empty()
        {
            config.api_url = url;
        }
        if let Ok(token) = std::env::var("JUSCASH_TOKEN")
            && !token.is_empty()
        {
            config.token = token;
        }

        config.validate()
    }

    fn validate(mut self) -> Result<Self, JuscashError> {
        if self.page_limit == 0 {
            return Err(JuscashError::Config(
                "page_limit deve ser maior que zero".into(),
            ));
        }
        // O backend rejeita limites acima do máximo.
        self.page_limit = self.page_limit.min(MAX_PAGE_LIMIT);
        Ok(self)
    }
}
