//! ViaCEP adapter (`GET /ws/{cep}/json/`)

use async_trait::async_trait;
use ceprace_application::{AddressProvider, ProviderError};
use ceprace_domain::{Address, ProviderName, ZipCode};
use serde::Deserialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Public ViaCEP endpoint
pub const VIA_CEP_BASE_URL: &str = "https://viacep.com.br";

/// CEP provider backed by ViaCEP
pub struct ViaCepProvider {
    name: ProviderName,
    client: reqwest::Client,
    base_url: String,
}

impl ViaCepProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, VIA_CEP_BASE_URL)
    }

    /// Point the adapter at a non-default endpoint (tests, mirrors)
    pub fn with_base_url(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            name: ProviderName::new("ViaCEP"),
            client,
            base_url: base_url.into(),
        }
    }
}

/// Wire format of a ViaCEP response
///
/// Unknown CEPs come back as HTTP 200 with `{"erro": true}` (older API
/// versions used the string "true"), so every field has to be optional.
#[derive(Debug, Deserialize)]
struct ViaCepPayload {
    #[serde(default)]
    erro: Option<Value>,
    #[serde(default)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

impl ViaCepPayload {
    fn is_erro(&self) -> bool {
        match &self.erro {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(s)) => s == "true",
            _ => false,
        }
    }
}

fn into_address(payload: ViaCepPayload) -> Address {
    Address::new(
        payload.cep,
        payload.uf,
        payload.localidade,
        payload.bairro,
        payload.logradouro,
    )
}

#[async_trait]
impl AddressProvider for ViaCepProvider {
    fn name(&self) -> &ProviderName {
        &self.name
    }

    async fn lookup(
        &self,
        zip_code: &ZipCode,
        cancel: &CancellationToken,
    ) -> Result<Address, ProviderError> {
        let url = format!("{}/ws/{}/json/", self.base_url, zip_code);
        debug!("ViaCEP GET {}", url);

        let fetch = async {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ProviderError::HttpStatus(status.as_u16()));
            }

            let payload = response
                .json::<ViaCepPayload>()
                .await
                .map_err(|e| ProviderError::DecodeError(e.to_string()))?;

            if payload.is_erro() {
                return Err(ProviderError::NotFound);
            }

            Ok(into_address(payload))
        };

        tokio::select! {
            _ = cancel.cancelled() => Err(ProviderError::Cancelled),
            result = fetch => result,
        }
    }
}
