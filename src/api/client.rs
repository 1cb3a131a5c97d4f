use crate::api::models::{EvolutionChainResponse, PokemonResponse, SpeciesResponse, TypeResponse};
use crate::error::ApiError;
use crate::map_api_error;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
const USER_AGENT: &str = concat!("pokelookup/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    pub base_url: String,
    timeout: Option<Duration>,
}

impl PokeApiClient {
    // No timeout unless one is configured; the transport defaults apply.
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: String, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ApiError::Http {
            status: 0,
            endpoint: "client_init".to_string(),
            message: format!("Failed to create HTTP client: {}", e),
        })?;

        Ok(PokeApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout.map(|t| t.as_secs()).unwrap_or(0)
    }

    /// Base URL plus `segments`, each pushed as a single percent-encoded path
    /// segment. `/`, `?`, `#` and `%` in user input never change the route.
    pub fn resource_url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let endpoint = segments.join("/");
        if segments
            .iter()
            .any(|segment| matches!(*segment, "" | "." | ".."))
        {
            return Err(ApiError::NotFound { endpoint });
        }

        let mut url = Url::parse(&self.base_url).map_err(|e| ApiError::Http {
            status: 0,
            endpoint: endpoint.clone(),
            message: format!("Invalid base URL '{}': {}", self.base_url, e),
        })?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Http {
                status: 0,
                endpoint: endpoint.clone(),
                message: format!("Base URL '{}' cannot take a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn build_request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder, ApiError> {
        Ok(self.client.request(method, self.resource_url(segments)?))
    }

    /// `/pokemon/{identifier}`; the identifier is expected to be normalized already.
    pub async fn get_pokemon(&self, identifier: &str) -> Result<PokemonResponse, ApiError> {
        self.get_json(&["pokemon", identifier]).await
    }

    pub async fn get_type(&self, name: &str) -> Result<TypeResponse, ApiError> {
        self.get_json(&["type", name]).await
    }

    pub async fn get_species(&self, id: u32) -> Result<SpeciesResponse, ApiError> {
        self.get_json(&["pokemon-species", &id.to_string()]).await
    }

    /// Evolution chains are addressed by the absolute URL found on the species.
    pub async fn get_evolution_chain(&self, url: &str) -> Result<EvolutionChainResponse, ApiError> {
        let response = map_api_error!(self.client.get(url).send().await, url)?;
        self.handle_response(response, url).await
    }

    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = map_api_error!(self.client.get(url).send().await, url)?;
        let response = self.check_status(response, url).await?;
        let bytes = map_api_error!(response.bytes().await, url)?;
        Ok(bytes.to_vec())
    }

    async fn get_json<T>(&self, segments: &[&str]) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let request = self.build_request(Method::GET, segments)?;
        let endpoint = format!("/{}", segments.join("/"));
        log::debug!("GET {}{}", self.base_url, endpoint);
        let response = map_api_error!(request.send().await, &endpoint)?;
        self.handle_response(response, &endpoint).await
    }

    pub async fn handle_response<T>(
        &self,
        response: Response,
        endpoint: &str,
    ) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.check_status(response, endpoint).await?;
        let status = response.status();
        response.json::<T>().await.map_err(|e| ApiError::Http {
            status: status.as_u16(),
            endpoint: endpoint.to_string(),
            message: format!("Failed to parse response: {}", e),
        })
    }

    async fn check_status(&self, response: Response, endpoint: &str) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        match status.as_u16() {
            404 => Err(ApiError::NotFound {
                endpoint: endpoint.to_string(),
            }),
            408 | 504 => Err(ApiError::Timeout {
                timeout_secs: self.timeout_secs(),
                endpoint: endpoint.to_string(),
            }),
            _ => Err(ApiError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                message: error_text,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_creation() {
        let client = PokeApiClient::new("http://example.test/".to_string());
        assert!(client.is_ok());
        if let Ok(client) = client {
            assert_eq!(client.base_url, "http://example.test");
            assert_eq!(client.timeout_secs(), 0);
        }
    }

    #[test]
    fn test_client_with_timeout() {
        let client = PokeApiClient::with_timeout(
            "http://example.test".to_string(),
            Some(Duration::from_secs(12)),
        )
        .expect("client creation failed");
        assert_eq!(client.timeout_secs(), 12);
    }

    #[test]
    fn test_build_request() {
        let client =
            PokeApiClient::new("http://example.test".to_string()).expect("client creation failed");
        let request = client
            .build_request(Method::GET, &["pokemon", "pikachu"])
            .expect("valid url");

        let built_request = request.build().expect("Failed to build request");

        assert_eq!(
            built_request.url().as_str(),
            "http://example.test/pokemon/pikachu"
        );
        assert_eq!(built_request.method(), Method::GET);
    }

    #[test]
    fn test_resource_url_keeps_base_path() {
        let client = PokeApiClient::new("https://pokeapi.co/api/v2/".to_string()).unwrap();
        let url = client.resource_url(&["type", "grass"]).unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/type/grass");
    }

    #[test]
    fn test_resource_url_encodes_user_input() {
        let client = PokeApiClient::new("http://example.test".to_string()).unwrap();

        let url = client.resource_url(&["pokemon", "eevee/../pikachu"]).unwrap();
        assert_eq!(url.path(), "/pokemon/eevee%2F..%2Fpikachu");

        let url = client.resource_url(&["pokemon", "pikachu?x=1#frag"]).unwrap();
        assert_eq!(url.path(), "/pokemon/pikachu%3Fx=1%23frag");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());

        assert!(matches!(
            client.resource_url(&["pokemon", ".."]),
            Err(ApiError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_pokemon_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/ditto"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 132, "name": "ditto"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = PokeApiClient::new(server.uri()).expect("client creation failed");
        let pokemon = client.get_pokemon("ditto").await.expect("ditto should load");
        assert_eq!(pokemon.id, 132);
        assert_eq!(pokemon.name, "ditto");
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/type/dragon"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/pokemon-species/1"))
            .respond_with(ResponseTemplate::new(504))
            .mount(&server)
            .await;

        let client = PokeApiClient::new(server.uri()).expect("client creation failed");

        match client.get_pokemon("missingno").await {
            Err(ApiError::NotFound { endpoint }) => assert_eq!(endpoint, "/pokemon/missingno"),
            other => panic!("Expected NotFound, got {:?}", other),
        }

        match client.get_type("dragon").await {
            Err(ApiError::Http {
                status, message, ..
            }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("Expected Http error, got {:?}", other),
        }

        assert!(matches!(
            client.get_species(1).await,
            Err(ApiError::Timeout { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_json_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/glitch"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = PokeApiClient::new(server.uri()).expect("client creation failed");
        match client.get_pokemon("glitch").await {
            Err(ApiError::Http {
                status, message, ..
            }) => {
                assert_eq!(status, 200);
                assert!(message.starts_with("Failed to parse response"));
            }
            other => panic!("Expected parse failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_evolution_chain_by_absolute_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/evolution-chain/1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "chain": {"species": {"name": "bulbasaur", "url": ""}, "evolves_to": []}
            })))
            .mount(&server)
            .await;

        let client = PokeApiClient::new("http://unused.test".to_string())
            .expect("client creation failed");
        let url = format!("{}/evolution-chain/1/", server.uri());
        let chain = client
            .get_evolution_chain(&url)
            .await
            .expect("chain should load");
        assert_eq!(chain.chain.species.name, "bulbasaur");
    }

    #[tokio::test]
    async fn test_get_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cries/25.ogg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
            .mount(&server)
            .await;

        let client = PokeApiClient::new(server.uri()).expect("client creation failed");
        let bytes = client
            .get_bytes(&format!("{}/cries/25.ogg", server.uri()))
            .await
            .expect("bytes should load");
        assert_eq!(bytes, vec![1, 2, 3]);
    }
}
