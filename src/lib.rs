//! Client for the DarkSky forecast API.
//!
//! Build a [`ForecastRequest`] for a location, adjust it with the `with_*` methods, then call
//! [`ForecastRequest::execute`] to make a single blocking call to the API:
//!
//! ```no_run
//! use darksky_client::{ForecastRequest, Units};
//!
//! let response = ForecastRequest::new("my_key", 41.8781, -87.6297)
//!     .with_units(Units::Si)
//!     .execute()?;
//!
//! let currently = &response.forecast.currently;
//! println!(
//!     "It feels like {} degrees outside with wind from the {}.",
//!     currently.apparent_temperature,
//!     currently.wind_direction()
//! );
//! # Ok::<(), darksky_client::ForecastError>(())
//! ```
//!
//! All times are UNIX seconds; the `*_time()` accessors convert them to `OffsetDateTime`.
#![forbid(unsafe_code)]

extern crate reqwest;
extern crate serde;
#[macro_use]
extern crate log;

pub mod darksky;
pub mod error;
pub mod options;
pub mod request;

pub use crate::darksky::{Alert, DataBlock, DataPoint, Flags, Forecast};
pub use crate::error::ForecastError;
pub use crate::options::{Lang, Units};
pub use crate::request::{API_CALLS_HEADER, DEFAULT_BASE_URL, ForecastRequest, ForecastResponse};
