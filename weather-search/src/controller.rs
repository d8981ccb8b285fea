use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use std::time::Duration;

use tokio::{sync::watch, task::JoinHandle, time::sleep};
use tracing::{debug, warn};

use weather_client::{CurrentWeatherResponse, WeatherError, WeatherFetch};

use crate::row::{DailyWeatherRow, dedup_rows};

/// Debounces city-name edits and publishes display rows for the weekly
/// forecast of whichever edit survives the quiet period.
///
/// Every call to [`set_city`](Self::set_city) supersedes the previous one:
/// the pending debounce timer or in-flight fetch is cancelled, so the
/// published rows only ever reflect the most recent edit. A fetch failure
/// of either kind clears the rows. The initial (construction-time) city
/// does not trigger a fetch; an explicit set does, even to the empty string.
pub struct SearchController {
    client: Arc<dyn WeatherFetch>,
    debounce: Duration,
    city: String,
    /// Bumped on every edit and on drop; a scheduled fetch publishes only if
    /// the generation it was spawned under is still current.
    generation: Arc<AtomicU64>,
    rows_tx: watch::Sender<Vec<DailyWeatherRow>>,
    pending: Option<JoinHandle<()>>,
}

impl SearchController {
    /// Must be called from within a tokio runtime; scheduled fetches run as
    /// tasks on it.
    pub fn new(client: Arc<dyn WeatherFetch>, debounce: Duration) -> Self {
        let (rows_tx, _) = watch::channel(Vec::new());

        Self {
            client,
            debounce,
            city: String::new(),
            generation: Arc::new(AtomicU64::new(0)),
            rows_tx,
            pending: None,
        }
    }

    /// Current query value.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Subscribe to the published display rows. The watch channel hands each
    /// new row list to subscribers on their own context, so a UI can await
    /// changes wherever it needs to render.
    pub fn subscribe(&self) -> watch::Receiver<Vec<DailyWeatherRow>> {
        self.rows_tx.subscribe()
    }

    /// Record a query edit and (re)start the debounce timer.
    ///
    /// Any outstanding timer or in-flight fetch is cancelled first.
    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let client = Arc::clone(&self.client);
        let live = Arc::clone(&self.generation);
        let rows_tx = self.rows_tx.clone();
        let city = self.city.clone();
        let debounce = self.debounce;

        self.pending = Some(tokio::spawn(async move {
            sleep(debounce).await;
            if live.load(Ordering::SeqCst) != generation {
                return;
            }

            debug!(%city, "debounce elapsed, fetching weekly forecast");
            let rows = match client.weekly_forecast(&city).await {
                Ok(response) => {
                    dedup_rows(response.list.iter().map(DailyWeatherRow::from_slot).collect())
                }
                Err(e) => {
                    warn!(%city, error = %e, "weekly forecast failed, clearing rows");
                    Vec::new()
                }
            };

            // A newer edit may have arrived while the fetch was in flight;
            // its result wins, ours is discarded.
            if live.load(Ordering::SeqCst) == generation {
                rows_tx.send_replace(rows);
            }
        }));
    }

    /// Convenience accessor: a current-weather request scoped to the current
    /// query and this controller's client. Pass-through, no extra logic.
    pub fn current_weather(&self) -> CurrentWeatherRequest {
        CurrentWeatherRequest {
            city: self.city.clone(),
            client: Arc::clone(&self.client),
        }
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        // Invalidate any scheduled fetch so nothing publishes after teardown.
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

/// A current-weather fetch bound to a city and client at construction time.
pub struct CurrentWeatherRequest {
    city: String,
    client: Arc<dyn WeatherFetch>,
}

impl CurrentWeatherRequest {
    pub fn city(&self) -> &str {
        &self.city
    }

    pub async fn fetch(&self) -> Result<CurrentWeatherResponse, WeatherError> {
        self.client.current_weather(&self.city).await
    }
}
