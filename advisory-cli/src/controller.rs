//! Page state for the dashboard: what has been loaded, and which refresh it
//! came from.

use crate::client::{AdvisoryClient, FetchError};
use advisory_common::{AdvisorySnapshot, Carousel, ForecastEntry};
use log::{debug, info, warn};

pub const LOAD_ERROR_MESSAGE: &str = "Unable to load AI predictions. Please try again later.";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub advisory: AdvisorySnapshot,
    /// `None` when the forecast response had no `forecast` array.
    pub forecast: Option<Vec<ForecastEntry>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Success(DashboardData),
    Error(String),
}

/// Identifies one refresh. Only the most recently issued token may commit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// Fetches everything one dashboard render needs.
#[derive(Clone)]
pub struct DashboardLoader {
    client: AdvisoryClient,
    forecast_days: u32,
}

impl DashboardLoader {
    pub fn new(client: AdvisoryClient, forecast_days: u32) -> Self {
        Self {
            client,
            forecast_days,
        }
    }

    /// Current advisory and forecast are requested together; the first
    /// failure wins and any result from the other request is dropped.
    pub async fn load(&self) -> Result<DashboardData, FetchError> {
        let (advisory, forecast) = tokio::try_join!(
            self.client.current(),
            self.client.forecast(self.forecast_days)
        )?;
        Ok(DashboardData { advisory, forecast })
    }
}

pub struct PageController {
    loader: DashboardLoader,
    state: PageState,
    latest: u64,
    carousel: Carousel,
}

impl PageController {
    pub fn new(loader: DashboardLoader) -> Self {
        Self {
            loader,
            state: PageState::Loading,
            latest: 0,
            carousel: Carousel::default(),
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn loader(&self) -> DashboardLoader {
        self.loader.clone()
    }

    /// Enter `Loading` and issue a token for the refresh about to start.
    pub fn begin_refresh(&mut self) -> RequestToken {
        self.latest += 1;
        self.state = PageState::Loading;
        debug!("[controller] refresh #{} started", self.latest);
        RequestToken(self.latest)
    }

    /// Apply a finished refresh. Returns `false` and leaves state untouched
    /// when a newer refresh has been issued since `token`.
    pub fn commit(
        &mut self,
        token: RequestToken,
        outcome: Result<DashboardData, FetchError>,
    ) -> bool {
        if token.0 != self.latest {
            debug!(
                "[controller] discarding refresh #{} (latest is #{})",
                token.0, self.latest
            );
            return false;
        }
        self.state = match outcome {
            Ok(data) => {
                info!(
                    "[controller] refresh #{} loaded {} advisories",
                    token.0,
                    data.advisory.advisories.len()
                );
                PageState::Success(data)
            }
            Err(err) => {
                warn!("[controller] refresh #{} failed: {err}", token.0);
                PageState::Error(LOAD_ERROR_MESSAGE.to_string())
            }
        };
        true
    }

    /// Run a full refresh in place. Retry and the initial load both go
    /// through here.
    pub async fn refresh(&mut self) -> &PageState {
        let token = self.begin_refresh();
        let outcome = self.loader.load().await;
        self.commit(token, outcome);
        &self.state
    }
}
