use std::collections::HashSet;
use weather_client::ForecastSlot;

/// View-ready projection of one forecast slot.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyWeatherRow {
    /// Weekday name derived from the slot timestamp, e.g. "Monday".
    pub day: String,
    /// Temperature in °C.
    pub temperature: f64,
    /// Short condition group, e.g. "Rain".
    pub title: String,
    /// Provider icon id, e.g. "10d".
    pub icon: String,
}

impl DailyWeatherRow {
    /// Pure projection; the provider occasionally omits the condition array,
    /// in which case title and icon fall back to empty strings.
    pub fn from_slot(slot: &ForecastSlot) -> Self {
        let day = slot
            .timestamp()
            .map(|dt| dt.format("%A").to_string())
            .unwrap_or_default();

        let (title, icon) = slot
            .weather
            .first()
            .map(|c| (c.main.clone(), c.icon.clone()))
            .unwrap_or_default();

        Self {
            day,
            temperature: slot.main.temp,
            title,
            icon,
        }
    }

    /// Semantic identity of a row: two slots on the same day with the same
    /// condition read as the same row to a user.
    fn key(&self) -> (&str, &str) {
        (&self.day, &self.title)
    }
}

/// Drop rows whose semantic key was already seen, keeping the first
/// occurrence and preserving order.
pub fn dedup_rows(rows: Vec<DailyWeatherRow>) -> Vec<DailyWeatherRow> {
    let mut seen: HashSet<(String, String)> = HashSet::new();

    rows.into_iter()
        .filter(|row| {
            let (day, title) = row.key();
            seen.insert((day.to_string(), title.to_string()))
        })
        .collect()
}
