use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Five-day forecast: an ordered sequence of three-hour slots.
#[derive(Debug, Clone, Deserialize)]
pub struct WeeklyForecastResponse {
    pub list: Vec<ForecastSlot>,
}

/// One forecast slot as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSlot {
    /// Unix timestamp of the slot.
    pub dt: i64,
    pub main: SlotMain,
    pub weather: Vec<Condition>,
}

impl ForecastSlot {
    /// Slot time as UTC; `None` if the provider sent a nonsensical timestamp.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotMain {
    /// Temperature in the requested units (we always ask for metric).
    pub temp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    /// Short condition group, e.g. "Rain".
    pub main: String,
    /// Longer human-readable text, e.g. "light rain".
    pub description: String,
    /// Provider icon id, e.g. "10d".
    pub icon: String,
}

/// Current conditions: a single slot for "now".
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    pub dt: i64,
    pub main: SlotMain,
    pub weather: Vec<Condition>,
}

impl CurrentWeatherResponse {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORECAST_JSON: &str = r#"{
        "cod": "200",
        "city": { "name": "London", "country": "GB" },
        "list": [
            {
                "dt": 1724925600,
                "main": { "temp": 18.4, "feels_like": 18.1, "humidity": 62 },
                "weather": [ { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" } ]
            },
            {
                "dt": 1724936400,
                "main": { "temp": 16.9, "feels_like": 16.3, "humidity": 70 },
                "weather": [ { "id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03n" } ]
            }
        ]
    }"#;

    const CURRENT_JSON: &str = r#"{
        "cod": 200,
        "name": "London",
        "dt": 1724925600,
        "main": { "temp": 18.4, "feels_like": 18.1, "humidity": 62 },
        "weather": [ { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" } ]
    }"#;

    #[test]
    fn decodes_forecast_payload() {
        let parsed: WeeklyForecastResponse = serde_json::from_str(FORECAST_JSON).unwrap();

        assert_eq!(parsed.list.len(), 2);
        assert_eq!(parsed.list[0].dt, 1724925600);
        assert!((parsed.list[0].main.temp - 18.4).abs() < f64::EPSILON);
        assert_eq!(parsed.list[1].weather[0].main, "Clouds");
        assert_eq!(parsed.list[1].weather[0].icon, "03n");
    }

    #[test]
    fn decodes_current_payload() {
        let parsed: CurrentWeatherResponse = serde_json::from_str(CURRENT_JSON).unwrap();

        assert_eq!(parsed.dt, 1724925600);
        assert_eq!(parsed.weather[0].description, "light rain");
    }

    #[test]
    fn slot_timestamp_converts_to_utc() {
        let parsed: WeeklyForecastResponse = serde_json::from_str(FORECAST_JSON).unwrap();
        let ts = parsed.list[0].timestamp().unwrap();

        assert_eq!(ts.to_rfc3339(), "2024-08-29T10:00:00+00:00");
    }

    #[test]
    fn rejects_payload_missing_list() {
        let result = serde_json::from_str::<WeeklyForecastResponse>(r#"{"cod":"404"}"#);
        assert!(result.is_err());
    }
}
