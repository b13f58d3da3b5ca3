use std::{collections::HashMap, sync::Arc};

use crate::{
    dto::{AirportDetailsDto, FlightLegDto},
    provider::ProviderError,
    state::AppState,
};
use airdist::airports::FlightLeg;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

pub async fn airport(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let airport = state
        .provider
        .fetch(&code)
        .await
        .map_err(provider_status)?;
    Ok(Json(AirportDetailsDto::from(&airport)).into_response())
}

pub async fn distance(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let (Some(from), Some(to)) = (params.get("from"), params.get("to")) else {
        return Err(StatusCode::BAD_REQUEST);
    };

    let (from, to) = tokio::join!(state.provider.fetch(from), state.provider.fetch(to));
    let from = from.map_err(provider_status)?;
    let to = to.map_err(provider_status)?;

    for airport in [&from, &to] {
        if !airport.coordinate.is_valid() {
            warn!("{} has an out of range coordinate {}", airport.code, airport.coordinate);
            return Err(StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    let leg = FlightLeg::new(from, to);
    info!("{leg}");
    Ok(Json(FlightLegDto::from(&leg)).into_response())
}

fn provider_status(err: ProviderError) -> StatusCode {
    match err {
        ProviderError::NotFound(code) => {
            warn!("Airport {code} not found");
            StatusCode::NOT_FOUND
        }
        err => {
            error!("Failed to fetch airport: {err}");
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::AirportGapClient;
    use airdist::airports::AirportDirectory;

    fn body(code: &str, latitude: &str, longitude: &str) -> String {
        format!(
            r#"{{"data": {{"id": "{code}", "type": "airport", "attributes": {{
                "name": "{code} International Airport", "city": "City", "country": "United States",
                "latitude": "{latitude}", "longitude": "{longitude}"}}}}}}"#
        )
    }

    async fn read_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn state(url: &str) -> State<Arc<AppState>> {
        let provider = AirportGapClient::new(url, None).unwrap();
        State(Arc::new(AppState::new(AirportDirectory::default(), provider)))
    }

    fn query(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
        Query(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[tokio::test]
    async fn distance_returns_leg_and_map_payload() {
        let mut server = mockito::Server::new_async().await;
        let _jfk = server
            .mock("GET", "/airports/JFK")
            .with_status(200)
            .with_body(body("JFK", "40.6413", "-73.7781"))
            .create_async()
            .await;
        let _lax = server
            .mock("GET", "/airports/LAX")
            .with_status(200)
            .with_body(body("LAX", "33.9416", "-118.4085"))
            .create_async()
            .await;

        let response = distance(query(&[("from", "jfk"), ("to", "lax")]), state(&server.url()))
            .await
            .unwrap();
        let json = read_json(response).await;

        let distance_nm = json["distance_nm"].as_f64().unwrap();
        assert!((distance_nm - 2145.0).abs() < 5.0);
        assert_eq!(json["from"]["code"], "JFK");
        assert_eq!(json["to"]["code"], "LAX");
        assert_eq!(json["line"][1]["latitude"], 33.9416);
        assert!(json["label"].as_str().unwrap().ends_with("nautical miles"));
    }

    #[tokio::test]
    async fn distance_requires_both_codes() {
        let result = distance(query(&[("from", "JFK")]), state("http://127.0.0.1:9")).await;
        assert_eq!(result.unwrap_err(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn distance_rejects_out_of_range_coordinates() {
        let mut server = mockito::Server::new_async().await;
        let _a = server
            .mock("GET", "/airports/AAA")
            .with_status(200)
            .with_body(body("AAA", "95.0", "0.0"))
            .create_async()
            .await;
        let _b = server
            .mock("GET", "/airports/BBB")
            .with_status(200)
            .with_body(body("BBB", "10.0", "10.0"))
            .create_async()
            .await;

        let result = distance(query(&[("from", "AAA"), ("to", "BBB")]), state(&server.url())).await;
        assert_eq!(result.unwrap_err(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn airport_maps_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/airports/XXX")
            .with_status(404)
            .create_async()
            .await;

        let result = airport(Path("XXX".to_string()), state(&server.url())).await;
        assert_eq!(result.unwrap_err(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn airport_maps_provider_failures_to_bad_gateway() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/airports/JFK")
            .with_status(500)
            .create_async()
            .await;

        let result = airport(Path("JFK".to_string()), state(&server.url())).await;
        assert_eq!(result.unwrap_err(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn distance_maps_malformed_payload_to_bad_gateway() {
        let mut server = mockito::Server::new_async().await;
        let _jfk = server
            .mock("GET", "/airports/JFK")
            .with_status(200)
            .with_body(body("JFK", "40.6413", "-73.7781"))
            .create_async()
            .await;
        let _lax = server
            .mock("GET", "/airports/LAX")
            .with_status(200)
            .with_body(body("LAX", "west", "-118.4085"))
            .create_async()
            .await;

        let result = distance(query(&[("from", "JFK"), ("to", "LAX")]), state(&server.url())).await;
        assert_eq!(result.unwrap_err(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn airport_returns_details() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/airports/LHR")
            .with_status(200)
            .with_body(body("LHR", "51.4700", "-0.4543"))
            .create_async()
            .await;

        let response = airport(Path("lhr".to_string()), state(&server.url()))
            .await
            .unwrap();
        let json = read_json(response).await;
        assert_eq!(
            json["display_name"],
            "LHR International Airport, City, United States"
        );
        assert_eq!(json["coordinate"]["longitude"], -0.4543);
    }
}
