//! BrasilAPI adapter (`GET /api/cep/v1/{cep}`)

use async_trait::async_trait;
use ceprace_application::{AddressProvider, ProviderError};
use ceprace_domain::{Address, ProviderName, ZipCode};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Public BrasilAPI endpoint
pub const BRASIL_API_BASE_URL: &str = "https://brasilapi.com.br";

/// CEP provider backed by BrasilAPI
pub struct BrasilApiProvider {
    name: ProviderName,
    client: reqwest::Client,
    base_url: String,
}

impl BrasilApiProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, BRASIL_API_BASE_URL)
    }

    /// Point the adapter at a non-default endpoint (tests, mirrors)
    pub fn with_base_url(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            name: ProviderName::new("BrasilAPI"),
            client,
            base_url: base_url.into(),
        }
    }
}

/// Wire format of a BrasilAPI CEP response
#[derive(Debug, Deserialize)]
struct BrasilApiPayload {
    cep: String,
    state: String,
    city: String,
    // Absent for CEPs that cover a whole city
    #[serde(default)]
    neighborhood: Option<String>,
    #[serde(default)]
    street: Option<String>,
}

fn into_address(payload: BrasilApiPayload) -> Address {
    Address::new(
        payload.cep,
        payload.state,
        payload.city,
        payload.neighborhood.unwrap_or_default(),
        payload.street.unwrap_or_default(),
    )
}

#[async_trait]
impl AddressProvider for BrasilApiProvider {
    fn name(&self) -> &ProviderName {
        &self.name
    }

    async fn lookup(
        &self,
        zip_code: &ZipCode,
        cancel: &CancellationToken,
    ) -> Result<Address, ProviderError> {
        let url = format!("{}/api/cep/v1/{}", self.base_url, zip_code);
        debug!("BrasilAPI GET {}", url);

        let fetch = async {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

            let status = response.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(ProviderError::NotFound);
            }
            if !status.is_success() {
                return Err(ProviderError::HttpStatus(status.as_u16()));
            }

            let payload = response
                .json::<BrasilApiPayload>()
                .await
                .map_err(|e| ProviderError::DecodeError(e.to_string()))?;

            Ok(into_address(payload))
        };

        tokio::select! {
            _ = cancel.cancelled() => Err(ProviderError::Cancelled),
            result = fetch => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_maps_to_address() {
        let json = r#"{
            "cep": "01153000",
            "state": "SP",
            "city": "São Paulo",
            "neighborhood": "Barra Funda",
            "street": "Rua Vitorino Carmilo",
            "service": "open-cep"
        }"#;

        let payload: BrasilApiPayload = serde_json::from_str(json).unwrap();
        let address = into_address(payload);

        assert_eq!(address.zip_code, "01153000");
        assert_eq!(address.state, "SP");
        assert_eq!(address.city, "São Paulo");
        assert_eq!(address.neighborhood, "Barra Funda");
        assert_eq!(address.street, "Rua Vitorino Carmilo");
    }

    #[test]
    fn test_payload_tolerates_missing_street() {
        let json = r#"{"cep": "29300000", "state": "ES", "city": "Cachoeiro de Itapemirim"}"#;

        let payload: BrasilApiPayload = serde_json::from_str(json).unwrap();
        let address = into_address(payload);

        assert_eq!(address.city, "Cachoeiro de Itapemirim");
        assert!(address.neighborhood.is_empty());
        assert!(address.street.is_empty());
    }

    #[test]
    fn test_payload_rejects_missing_required_fields() {
        let json = r#"{"message": "Todos os serviços de CEP retornaram erro."}"#;
        assert!(serde_json::from_str::<BrasilApiPayload>(json).is_err());
    }
}
