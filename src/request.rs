use crate::darksky::Forecast;
use crate::error::ForecastError;
use crate::options::{Lang, Units};

use reqwest::Url;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::HeaderMap;

use std::fmt;

/// Where forecasts are requested from unless overridden with `with_base_url`.
pub const DEFAULT_BASE_URL: &str = "https://api.darksky.net/forecast";

/// The HTTP header that contains the number of API calls made by the given key for the current
/// 24 hour period.
pub const API_CALLS_HEADER: &str = "X-Forecast-API-Calls";

/// A single forecast request for one location.
///
/// Built by value: every `with_*` call consumes the request and hands back the updated one, so a
/// request is owned by exactly one caller at a time.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    key: String,
    latitude: f64,
    longitude: f64,
    time: Option<i64>,
    lang: Lang,
    units: Units,
    extend_hourly: bool,
    exclude: Vec<String>,
    base_url: String,
    client: Option<Client>,
}

/// A successfully decoded forecast, along with the quota telemetry sent alongside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastResponse {
    pub forecast: Forecast,
    /// Calls made with this key today, or 0 if the API did not say.
    pub api_call_count: u32,
}

impl ForecastRequest {
    /// Construct a request for the current conditions at a location, in English and US units.
    ///
    /// Coordinates are not range checked; the API is the judge of what is valid.
    pub fn new(key: impl Into<String>, latitude: f64, longitude: f64) -> ForecastRequest {
        ForecastRequest {
            key: key.into(),
            latitude,
            longitude,
            time: None,
            lang: Lang::default(),
            units: Units::default(),
            extend_hourly: false,
            exclude: Vec::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> ForecastRequest {
        self.base_url = base_url.into();
        self
    }

    /// Request the conditions at a point in time (UNIX seconds) instead of now.
    pub fn with_time(mut self, time: i64) -> ForecastRequest {
        self.time = Some(time);
        self
    }

    pub fn with_lang(mut self, lang: impl Into<Lang>) -> ForecastRequest {
        self.lang = lang.into();
        self
    }

    pub fn with_units(mut self, units: impl Into<Units>) -> ForecastRequest {
        self.units = units.into();
        self
    }

    /// Record whether hourly data should cover a week instead of two days. Not sent yet.
    pub fn with_extend_hourly(mut self, extend_hourly: bool) -> ForecastRequest {
        self.extend_hourly = extend_hourly;
        self
    }

    /// Record the data blocks the caller does not need. Not sent yet.
    pub fn with_exclude(mut self, exclude: Vec<String>) -> ForecastRequest {
        self.exclude = exclude;
        self
    }

    /// Use a preconfigured HTTP client, for example one with a timeout.
    pub fn with_client(mut self, client: Client) -> ForecastRequest {
        self.client = Some(client);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn time(&self) -> Option<i64> {
        self.time
    }

    pub fn lang(&self) -> &Lang {
        &self.lang
    }

    pub fn units(&self) -> &Units {
        &self.units
    }

    pub fn extend_hourly(&self) -> bool {
        self.extend_hourly
    }

    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL this request will be sent to:
    /// `{base_url}/{key}/{latitude},{longitude}[,{time}]?lang={lang}&units={units}`
    pub fn render_url(&self) -> Result<Url, ForecastError> {
        Url::parse(&self.base_url).map_err(|err| self.url_error(err))?;

        let mut location = format!(
            "{}/{}/{},{}",
            self.base_url.trim_end_matches('/'),
            self.key,
            self.latitude,
            self.longitude
        );
        if let Some(time) = self.time {
            location.push_str(&format!(",{time}"));
        }

        let mut url = Url::parse(&location).map_err(|err| self.url_error(err))?;
        url.query_pairs_mut()
            .append_pair("lang", self.lang.as_str())
            .append_pair("units", self.units.as_str());
        Ok(url)
    }

    /// Send the request and decode the forecast. Makes exactly one HTTP call and never retries.
    pub fn execute(&self) -> Result<ForecastResponse, ForecastError> {
        let url = self.render_url()?;
        let client = match &self.client {
            Some(client) => client.clone(),
            None => ClientBuilder::new().gzip(true).build()?,
        };

        info!(
            "Calling DarkSky for {},{} (time: {:?}, lang: {}, units: {})",
            self.latitude, self.longitude, self.time, self.lang, self.units
        );
        let res = client.get(url).send()?;
        let status = res.status();
        let api_call_count = read_call_count(res.headers());
        let body = res.text()?;
        debug!("DarkSky returned status {status} with {} bytes", body.len());

        if status.as_u16() >= 400 {
            return Err(ForecastError::Api { status, body });
        }

        let forecast = Forecast::from_json(&body)?;
        debug!("DarkSky call count for key is now {api_call_count}");

        Ok(ForecastResponse {
            forecast,
            api_call_count,
        })
    }

    fn url_error(&self, err: impl fmt::Display) -> ForecastError {
        ForecastError::Url {
            base_url: self.base_url.clone(),
            reason: err.to_string(),
        }
    }
}

/// Read the API call count header. A missing or garbled header counts as 0.
fn read_call_count(headers: &HeaderMap) -> u32 {
    let Some(value) = headers.get(API_CALLS_HEADER) else {
        return 0;
    };

    match value.to_str().ok().and_then(|v| v.parse::<u32>().ok()) {
        Some(count) => count,
        None => {
            warn!("Ignoring unparsable {API_CALLS_HEADER} header: {value:?}");
            0
        }
    }
}
