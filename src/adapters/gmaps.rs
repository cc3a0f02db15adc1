use crate::domain::model::{Landmark, Reachability};
use crate::domain::ports::DistanceOracle;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Distance Matrix API client. One instance is built from explicit
/// configuration at startup and shared by reference across the fan-out.
pub struct GoogleMapsOracle {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct MatrixResponse {
    #[serde(default)]
    rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
struct MatrixRow {
    #[serde(default)]
    elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
struct MatrixElement {
    status: String,
    distance: Option<DistanceField>,
}

#[derive(Debug, Deserialize)]
struct DistanceField {
    value: u64,
}

impl GoogleMapsOracle {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    async fn request(&self, origin: &Landmark, dest: &Landmark) -> Result<MatrixResponse> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("origins", origin.coordinate().as_str()),
                ("destinations", dest.coordinate().as_str()),
                ("mode", "driving"),
                ("units", "metric"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[async_trait]
impl DistanceOracle for GoogleMapsOracle {
    async fn driving_distance(&self, origin: &Landmark, dest: &Landmark) -> Reachability {
        let response = match self.request(origin, dest).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("API error for {} to {}: {}", origin.name, dest.name, e);
                return Reachability::Unreachable;
            }
        };

        let element = response
            .rows
            .first()
            .and_then(|row| row.elements.first());

        match element {
            Some(element) if element.status == "OK" => match &element.distance {
                Some(distance) => Reachability::Reachable(distance.value as f64 / 1000.0),
                None => {
                    tracing::warn!(
                        "OK element without distance for {} to {}",
                        origin.name,
                        dest.name
                    );
                    Reachability::Unreachable
                }
            },
            Some(element) => {
                tracing::warn!(
                    "Failed to get distance from {} to {}: status {}",
                    origin.name,
                    dest.name,
                    element.status
                );
                Reachability::Unreachable
            }
            None => {
                tracing::warn!("Empty response for {} to {}", origin.name, dest.name);
                Reachability::Unreachable
            }
        }
    }
}
