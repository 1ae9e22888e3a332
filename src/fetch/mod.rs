use std::{num::NonZeroU32, sync::OnceLock, time::Duration};

use governor::{
    clock::{QuantaClock, QuantaInstant},
    middleware::NoOpMiddleware,
    state::InMemoryState,
};
use reqwest::{Client, Error as RequestError};
use tracing::{instrument, Level};
use url::Url;

use crate::{
    config::Config,
    parse::{self, DiningHall},
};

/// Source of short menu pages, one hall at a time.
pub trait PageRetriever {
    async fn menu_page(&self, hall: &DiningHall) -> crate::Result<String>;
}

/// A client that keeps cookies between requests and identifies itself as `user_agent`.
pub fn make_session(user_agent: &str) -> Result<Client, RequestError> {
    Client::builder()
        .cookie_store(true)
        .gzip(true)
        .user_agent(user_agent)
        .build()
}

static RATE_LIMIT: u32 = 5;
static DELAY_JITTER: u64 = 1;
static RATE_LIMITER: OnceLock<
    governor::RateLimiter<
        governor::state::NotKeyed,
        InMemoryState,
        QuantaClock,
        NoOpMiddleware<QuantaInstant>,
    >,
> = OnceLock::new();

async fn wait_for_rate_limit() {
    let rate_limiter = RATE_LIMITER.get_or_init(|| {
        governor::RateLimiter::direct(governor::Quota::per_second(
            NonZeroU32::new(RATE_LIMIT).expect("rate limit should be non-zero"),
        ))
    });
    let retry_jitter = governor::Jitter::new(Duration::ZERO, Duration::from_secs(DELAY_JITTER));
    rate_limiter.until_ready_with_jitter(retry_jitter).await;
}

/// Fetches each hall on its own session, after visiting the landing page so the
/// site hands out its session cookies.
#[derive(Debug, Clone)]
pub struct HttpRetriever {
    landing: Url,
    user_agent: String,
    date: Option<chrono::NaiveDate>,
}

impl HttpRetriever {
    pub fn new(config: &Config) -> Self {
        Self {
            landing: config.base_url.clone(),
            user_agent: config.user_agent.clone(),
            date: config.date,
        }
    }

    async fn open_session(&self) -> Result<Client, RequestError> {
        let client = make_session(&self.user_agent)?;
        let landing = client.get(self.landing.clone()).send().await?;
        log::trace!("Landing page answered {}", landing.status());
        Ok(client)
    }

    fn menu_url(&self, hall: &DiningHall) -> Url {
        let mut url = hall.url().to_owned();
        if let Some(date) = self.date {
            url.query_pairs_mut()
                .append_pair("dtdate", date.format("%m/%d/%Y").to_string().as_str());
        }
        url
    }
}

impl PageRetriever for HttpRetriever {
    #[instrument(skip(self, hall), fields(
        hall = %hall.name(),
        id = ?hall.id(),
        date = ?self.date,
    ), level = Level::TRACE)]
    async fn menu_page(&self, hall: &DiningHall) -> crate::Result<String> {
        wait_for_rate_limit().await;
        let client = self.open_session().await?;
        let res = client
            .get(self.menu_url(hall))
            .send()
            .await?
            .error_for_status()?;
        let start = std::time::Instant::now();
        let text = res.text().await?;
        log::trace!("Got text of menu page in \t {:?}", start.elapsed());
        Ok(text)
    }
}

pub async fn locations_page(config: &Config) -> Result<String, RequestError> {
    wait_for_rate_limit().await;
    let client = make_session(&config.user_agent)?;
    client
        .get(config.base_url.clone())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}

/// Halls listed on the location page, or the built-in registry when discovery
/// is off, fails, or finds nothing.
pub async fn dining_halls(config: &Config) -> crate::Result<Vec<DiningHall>> {
    if config.discover {
        match locations_page(config).await {
            Ok(page) => {
                let halls = parse::dining_halls(&page, &config.base_url);
                if !halls.is_empty() {
                    log::info!("Discovered {} dining halls", halls.len());
                    return Ok(halls);
                }
                log::warn!("No dining halls listed on the location page, using the registry");
            }
            Err(e) => log::warn!("Error fetching location page, using the registry: {e}"),
        }
    }
    Ok(DiningHall::registry(&config.base_url)?)
}
