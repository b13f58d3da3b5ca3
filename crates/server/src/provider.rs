use airdist::prelude::*;
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
    #[error("airport {0} not found")]
    NotFound(String),
    #[error("lookup of {0} failed with status {1}")]
    Status(String, StatusCode),
    #[error("airport {0} has an invalid coordinate: {1}")]
    InvalidCoordinate(String, String),
}

#[derive(Debug, Deserialize)]
struct AirportResponse {
    data: AirportData,
}

#[derive(Debug, Deserialize)]
struct AirportData {
    attributes: AirportAttributes,
}

#[derive(Debug, Deserialize)]
struct AirportAttributes {
    name: String,
    city: String,
    country: String,
    latitude: String,
    longitude: String,
}

/// Looks airports up in the Airport Gap API.
#[derive(Debug, Clone)]
pub struct AirportGapClient {
    client: Client,
    base_url: String,
}

impl AirportGapClient {
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, ProviderError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        if let Some(token) = token {
            let mut value = header::HeaderValue::from_str(&format!("Bearer token={token}"))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch(&self, code: &str) -> Result<AirportDetails, ProviderError> {
        let code = code.trim().to_uppercase();
        let url = format!("{}/airports/{}", self.base_url, code);
        debug!("Fetching {url}");
        let response = self.client.get(&url).send().await?;
        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => return Err(ProviderError::NotFound(code)),
            status => return Err(ProviderError::Status(code, status)),
        }

        let attributes = response.json::<AirportResponse>().await?.data.attributes;
        let latitude = parse_degrees(&code, &attributes.latitude)?;
        let longitude = parse_degrees(&code, &attributes.longitude)?;
        info!("Resolved {code} to {latitude}, {longitude}");
        Ok(AirportDetails {
            code,
            name: attributes.name,
            city: attributes.city,
            country: attributes.country,
            coordinate: Coordinate::new(latitude, longitude),
        })
    }
}

fn parse_degrees(code: &str, value: &str) -> Result<f64, ProviderError> {
    value
        .trim()
        .parse()
        .map_err(|_| ProviderError::InvalidCoordinate(code.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const JFK_BODY: &str = r#"{
        "data": {
            "id": "JFK",
            "type": "airport",
            "attributes": {
                "name": "John F Kennedy International Airport",
                "city": "New York",
                "country": "United States",
                "iata": "JFK",
                "icao": "KJFK",
                "latitude": "40.63980103",
                "longitude": "-73.77890015",
                "altitude": 13,
                "timezone": "America/New_York"
            }
        }
    }"#;

    #[tokio::test]
    async fn fetch_sends_the_bearer_token_and_parses_coordinates() -> Result<(), ProviderError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/airports/JFK")
            .match_header("authorization", "Bearer token=secret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(JFK_BODY)
            .create_async()
            .await;

        let client = AirportGapClient::new(&server.url(), Some("secret"))?;
        let airport = client.fetch("jfk").await?;

        mock.assert_async().await;
        assert_eq!(airport.code, "JFK");
        assert_eq!(
            airport.display_name(),
            "John F Kennedy International Airport, New York, United States"
        );
        assert_eq!(airport.coordinate, Coordinate::new(40.63980103, -73.77890015));
        Ok(())
    }

    #[tokio::test]
    async fn fetch_without_token_sends_no_authorization() -> Result<(), ProviderError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/airports/JFK")
            .match_header("authorization", mockito::Matcher::Missing)
            .with_status(200)
            .with_body(JFK_BODY)
            .create_async()
            .await;

        let client = AirportGapClient::new(&format!("{}/", server.url()), None)?;
        client.fetch("JFK").await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn fetch_maps_404_to_not_found() -> Result<(), ProviderError> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/airports/XXX")
            .with_status(404)
            .create_async()
            .await;

        let client = AirportGapClient::new(&server.url(), None)?;
        match client.fetch("xxx").await {
            Err(ProviderError::NotFound(code)) => assert_eq!(code, "XXX"),
            other => panic!("expected not found, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn fetch_maps_other_failures_to_status() -> Result<(), ProviderError> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/airports/JFK")
            .with_status(429)
            .create_async()
            .await;

        let client = AirportGapClient::new(&server.url(), None)?;
        assert!(matches!(
            client.fetch("JFK").await,
            Err(ProviderError::Status(_, StatusCode::TOO_MANY_REQUESTS))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn fetch_rejects_unparsable_coordinates() -> Result<(), ProviderError> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/airports/JFK")
            .with_status(200)
            .with_body(JFK_BODY.replace("40.63980103", "north"))
            .create_async()
            .await;

        let client = AirportGapClient::new(&server.url(), None)?;
        assert!(matches!(
            client.fetch("JFK").await,
            Err(ProviderError::InvalidCoordinate(_, value)) if value == "north"
        ));
        Ok(())
    }
}
