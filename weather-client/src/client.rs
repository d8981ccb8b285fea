use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::WeatherError,
    model::{CurrentWeatherResponse, WeeklyForecastResponse},
};

const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Abstraction over the weather fetcher, so consumers (and tests) can swap in
/// their own implementation.
#[async_trait]
pub trait WeatherFetch: Send + Sync {
    /// Five-day forecast for a city, in three-hour slots.
    async fn weekly_forecast(&self, city: &str) -> Result<WeeklyForecastResponse, WeatherError>;

    /// Current conditions for a city.
    async fn current_weather(&self, city: &str) -> Result<CurrentWeatherResponse, WeatherError>;
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    /// Build the request URL for an endpoint suffix ("/forecast" or "/weather").
    ///
    /// A malformed URL yields a `Network` error without issuing a request.
    /// The city is deliberately not validated: an empty query goes out as-is
    /// and the provider rejects it.
    fn endpoint_url(&self, endpoint: &str, city: &str) -> Result<Url, WeatherError> {
        Url::parse_with_params(
            &format!("{API_BASE_URL}{endpoint}"),
            &[
                ("q", city),
                ("mode", "json"),
                ("units", "metric"),
                ("APPID", self.api_key.as_str()),
            ],
        )
        .map_err(|e| WeatherError::Network(format!("couldn't create URL: {e}")))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, WeatherError> {
        let url = self.endpoint_url(endpoint, city)?;
        debug!(%endpoint, %city, "fetching weather");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        // The reference behavior decodes whatever body arrives; a provider
        // error payload surfaces as a Decoding failure, not a Network one.
        let body = res
            .text()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl WeatherFetch for WeatherClient {
    async fn weekly_forecast(
        &self,
        city: &str,
    ) -> Result<WeeklyForecastResponse, WeatherError> {
        self.fetch("/forecast", city).await
    }

    async fn current_weather(
        &self,
        city: &str,
    ) -> Result<CurrentWeatherResponse, WeatherError> {
        self.fetch("/weather", city).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn forecast_url_carries_all_query_params() {
        let client = WeatherClient::new("SECRET".to_string());
        let url = client.endpoint_url("/forecast", "London").unwrap();

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("api.openweathermap.org"));
        assert_eq!(url.path(), "/data/2.5/forecast");

        let params = query_map(&url);
        assert_eq!(params.get("q").map(String::as_str), Some("London"));
        assert_eq!(params.get("mode").map(String::as_str), Some("json"));
        assert_eq!(params.get("units").map(String::as_str), Some("metric"));
        assert_eq!(params.get("APPID").map(String::as_str), Some("SECRET"));
    }

    #[test]
    fn current_url_uses_weather_endpoint() {
        let client = WeatherClient::new("SECRET".to_string());
        let url = client.endpoint_url("/weather", "Paris").unwrap();

        assert_eq!(url.path(), "/data/2.5/weather");
        assert_eq!(query_map(&url).get("q").map(String::as_str), Some("Paris"));
    }

    #[test]
    fn city_with_spaces_is_percent_encoded() {
        let client = WeatherClient::new("SECRET".to_string());
        let url = client.endpoint_url("/weather", "New York").unwrap();

        assert_eq!(
            query_map(&url).get("q").map(String::as_str),
            Some("New York")
        );
        assert!(url.as_str().contains("q=New+York"));
    }

    #[test]
    fn empty_city_still_builds_a_url() {
        let client = WeatherClient::new("SECRET".to_string());
        let url = client.endpoint_url("/forecast", "").unwrap();

        assert_eq!(query_map(&url).get("q").map(String::as_str), Some(""));
    }

    #[test]
    fn error_kinds_stay_distinguishable() {
        let network = WeatherError::Network("connection refused".to_string());
        let decoding: WeatherError =
            serde_json::from_str::<WeeklyForecastResponse>("not json")
                .unwrap_err()
                .into();

        assert!(network.is_network());
        assert!(!network.is_decoding());
        assert!(decoding.is_decoding());
        assert!(decoding.to_string().contains("decode"));
    }
}
