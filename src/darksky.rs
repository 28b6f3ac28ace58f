use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// Decode an explicit `null` the same way as a missing field: as the zero value.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Convert a raw UNIX timestamp into an `OffsetDateTime`, if it is representable.
fn to_datetime(timestamp: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp(timestamp).ok()
}

/// API responses consist of a UTF-8-encoded, JSON-formatted object.
///
/// Every field may be missing from the payload or `null`; either way it decodes to its zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast {
    /// The requested latitude.
    #[serde(deserialize_with = "null_default")]
    pub latitude: f64,
    /// The requested longitude.
    #[serde(deserialize_with = "null_default")]
    pub longitude: f64,
    /// The IANA timezone name for the requested location. This is used for text summaries and for
    /// determining when hourly and daily data block objects begin.
    #[serde(deserialize_with = "null_default")]
    pub timezone: String,
    /// deprecated.  The current timezone offset in hours. (Use of this property will almost
    /// certainly result in Daylight Saving Time bugs. Please use timezone, instead.)
    #[serde(deserialize_with = "null_default")]
    pub offset: f64,
    /// A data point containing the current weather conditions at the requested location.
    #[serde(deserialize_with = "null_default")]
    pub currently: DataPoint,
    /// A data block containing the weather conditions minute-by-minute for the next hour.
    #[serde(deserialize_with = "null_default")]
    pub minutely: DataBlock,
    /// A data block containing the weather conditions hour-by-hour for the next two days.
    #[serde(deserialize_with = "null_default")]
    pub hourly: DataBlock,
    /// A data block containing the weather conditions day-by-day for the next week.
    #[serde(deserialize_with = "null_default")]
    pub daily: DataBlock,
    /// Any severe weather alerts pertinent to the requested location, in the order the API sent
    /// them.
    #[serde(deserialize_with = "null_default")]
    pub alerts: Vec<Alert>,
    /// A flags object containing miscellaneous metadata about the request.
    #[serde(deserialize_with = "null_default")]
    pub flags: Flags,
}

impl Forecast {
    /// Decode a forecast from the JSON body returned by the API.
    pub fn from_json(body: &str) -> Result<Forecast, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// A data block object represents the various weather phenomena occurring over a period of time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataBlock {
    /// A human-readable summary of this data block.
    #[serde(deserialize_with = "null_default")]
    pub summary: String,
    /// A machine-readable text summary of this data block. (May take on the same values as the icon
    /// property of data points.)
    #[serde(deserialize_with = "null_default")]
    pub icon: String,
    /// An array of data points, ordered by time, which together describe the weather conditions at
    /// the requested location over time.
    #[serde(deserialize_with = "null_default")]
    pub data: Vec<DataPoint>,
}

/// A data point object contains various properties, each representing the average (unless otherwise
/// specified) of a particular weather phenomenon occurring during a period of time: an instant in
/// the case of currently, a minute for minutely, an hour for hourly, and a day for daily.
///
/// Properties that only apply to some of those periods are left at zero on the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataPoint {
    /// The UNIX time at which this data point begins. minutely data point are always aligned to the
    /// top of the minute, hourly data point objects to the top of the hour, and daily data point
    /// objects to midnight of the day, all according to the local time zone.
    #[serde(rename = "time")]
    #[serde(deserialize_with = "null_default")]
    pub timestamp: i64,
    /// A human-readable text summary of this data point. (This property has millions of possible
    /// values, so don't use it for automated purposes: use the icon property, instead!)
    #[serde(deserialize_with = "null_default")]
    pub summary: String,
    /// A machine-readable text summary of this data point, suitable for selecting an icon for
    /// display: clear-day, clear-night, rain, snow, sleet, wind, fog, cloudy, partly-cloudy-day,
    /// or partly-cloudy-night.
    #[serde(deserialize_with = "null_default")]
    pub icon: String,
    /// The UNIX time of when the sun will rise during a given day. (only on daily)
    #[serde(rename = "sunriseTime")]
    #[serde(deserialize_with = "null_default")]
    pub sunrise_timestamp: i64,
    /// The UNIX time of when the sun will set during a given day. (only on daily)
    #[serde(rename = "sunsetTime")]
    #[serde(deserialize_with = "null_default")]
    pub sunset_timestamp: i64,
    /// The intensity (in inches of liquid water per hour) of precipitation occurring at the given
    /// time. This value is conditional on probability (that is, assuming any precipitation occurs
    /// at all).
    #[serde(deserialize_with = "null_default")]
    pub precip_intensity: f64,
    /// The standard deviation of the distribution of precipIntensity.
    #[serde(deserialize_with = "null_default")]
    pub precip_intensity_error: f64,
    /// The maximum value of precipIntensity during a given day. (only on daily)
    #[serde(deserialize_with = "null_default")]
    pub precip_intensity_max: f64,
    /// The UNIX time of when precipIntensityMax occurs during a given day. (only on daily)
    #[serde(rename = "precipIntensityMaxTime")]
    #[serde(deserialize_with = "null_default")]
    pub precip_intensity_max_timestamp: i64,
    /// The probability of precipitation occurring, between 0 and 1, inclusive.
    #[serde(deserialize_with = "null_default")]
    pub precip_probability: f64,
    /// The type of precipitation occurring at the given time: "rain", "snow", or "sleet".
    #[serde(deserialize_with = "null_default")]
    pub precip_type: String,
    /// The amount of snowfall accumulation expected to occur, in inches. (only on hourly and daily)
    #[serde(deserialize_with = "null_default")]
    pub precip_accumulation: f64,
    /// The air temperature.
    #[serde(deserialize_with = "null_default")]
    pub temperature: f64,
    /// The daytime high temperature. (only on daily)
    #[serde(deserialize_with = "null_default")]
    pub temperature_high: f64,
    /// The UNIX time representing when the daytime high temperature occurs. (only on daily)
    #[serde(rename = "temperatureHighTime")]
    #[serde(deserialize_with = "null_default")]
    pub temperature_high_timestamp: i64,
    /// The overnight low temperature. (only on daily)
    #[serde(deserialize_with = "null_default")]
    pub temperature_low: f64,
    /// The UNIX time representing when the overnight low temperature occurs. (only on daily)
    #[serde(rename = "temperatureLowTime")]
    #[serde(deserialize_with = "null_default")]
    pub temperature_low_timestamp: i64,
    /// The minimum temperature during a given date. (only on daily)
    #[serde(deserialize_with = "null_default")]
    pub temperature_min: f64,
    /// The UNIX time representing when the minimum temperature during a given date occurs.
    #[serde(rename = "temperatureMinTime")]
    #[serde(deserialize_with = "null_default")]
    pub temperature_min_timestamp: i64,
    /// The maximum temperature during a given date. (only on daily)
    #[serde(deserialize_with = "null_default")]
    pub temperature_max: f64,
    /// The UNIX time representing when the maximum temperature during a given date occurs.
    #[serde(rename = "temperatureMaxTime")]
    #[serde(deserialize_with = "null_default")]
    pub temperature_max_timestamp: i64,
    /// The apparent (or "feels like") temperature.
    #[serde(deserialize_with = "null_default")]
    pub apparent_temperature: f64,
    /// The daytime high apparent temperature. (only on daily)
    #[serde(deserialize_with = "null_default")]
    pub apparent_temperature_high: f64,
    /// The UNIX time representing when the daytime high apparent temperature occurs.
    #[serde(rename = "apparentTemperatureHighTime")]
    #[serde(deserialize_with = "null_default")]
    pub apparent_temperature_high_timestamp: i64,
    /// The overnight low apparent temperature. (only on daily)
    #[serde(deserialize_with = "null_default")]
    pub apparent_temperature_low: f64,
    /// The UNIX time representing when the overnight low apparent temperature occurs.
    #[serde(rename = "apparentTemperatureLowTime")]
    #[serde(deserialize_with = "null_default")]
    pub apparent_temperature_low_timestamp: i64,
    /// The minimum apparent temperature during a given date. (only on daily)
    #[serde(deserialize_with = "null_default")]
    pub apparent_temperature_min: f64,
    /// The UNIX time representing when the minimum apparent temperature during a given date occurs.
    #[serde(rename = "apparentTemperatureMinTime")]
    #[serde(deserialize_with = "null_default")]
    pub apparent_temperature_min_timestamp: i64,
    /// The maximum apparent temperature during a given date. (only on daily)
    #[serde(deserialize_with = "null_default")]
    pub apparent_temperature_max: f64,
    /// The UNIX time representing when the maximum apparent temperature during a given date occurs.
    #[serde(rename = "apparentTemperatureMaxTime")]
    #[serde(deserialize_with = "null_default")]
    pub apparent_temperature_max_timestamp: i64,
    /// The dew point.
    #[serde(deserialize_with = "null_default")]
    pub dew_point: f64,
    /// The wind speed.
    #[serde(deserialize_with = "null_default")]
    pub wind_speed: f64,
    /// The wind gust speed.
    #[serde(deserialize_with = "null_default")]
    pub wind_gust: f64,
    /// The time at which the maximum wind gust speed occurs during the day.
    #[serde(rename = "windGustTime")]
    #[serde(deserialize_with = "null_default")]
    pub wind_gust_timestamp: i64,
    /// The direction that the wind is coming from in degrees, with true north at 0° and progressing
    /// clockwise. (If windSpeed is zero, then this value will not be defined.)
    #[serde(deserialize_with = "null_default")]
    pub wind_bearing: f64,
    /// The percentage of sky occluded by clouds, between 0 and 1, inclusive.
    #[serde(deserialize_with = "null_default")]
    pub cloud_cover: f64,
    /// The relative humidity, between 0 and 1, inclusive.
    #[serde(deserialize_with = "null_default")]
    pub humidity: f64,
    /// The sea-level air pressure in millibars.
    #[serde(deserialize_with = "null_default")]
    pub pressure: f64,
    /// The average visibility, capped at 10 miles.
    #[serde(deserialize_with = "null_default")]
    pub visibility: f64,
    /// The columnar density of total atmospheric ozone at the given time in Dobson units.
    #[serde(deserialize_with = "null_default")]
    pub ozone: f64,
    /// The UV index.
    #[serde(deserialize_with = "null_default")]
    pub uv_index: f64,
    /// The UNIX time of when the maximum uvIndex occurs during a given day. (only on daily)
    #[serde(rename = "uvIndexTime")]
    #[serde(deserialize_with = "null_default")]
    pub uv_index_timestamp: i64,
    /// The approximate distance to the nearest storm. (only on currently)
    #[serde(deserialize_with = "null_default")]
    pub nearest_storm_distance: f64,
    /// The approximate direction of the nearest storm in degrees. (only on currently)
    #[serde(deserialize_with = "null_default")]
    pub nearest_storm_bearing: f64,
    /// The fractional part of the lunation number during the given day: 0 is a new moon, 0.25 a
    /// first quarter moon, 0.5 a full moon and 0.75 a last quarter moon. (only on daily)
    #[serde(deserialize_with = "null_default")]
    pub moon_phase: f64,
}

impl DataPoint {
    /// Convert `wind_bearing` into compass text, e.g. a bearing of 200 is "SW".
    ///
    /// Each letter is tested on its own strict-inequality window, so the exact window edges
    /// (22, 67, 113, 157, 203, 247, 293, 337) and bearings outside [0, 360) may yield a single
    /// letter or an empty string.
    pub fn wind_direction(&self) -> String {
        let bearing = self.wind_bearing;
        let mut direction = String::with_capacity(2);

        if bearing > 293.0 || bearing < 67.0 {
            direction.push('N');
        }
        if bearing < 247.0 && bearing > 113.0 {
            direction.push('S');
        }
        if bearing > 22.0 && bearing < 157.0 {
            direction.push('E');
        }
        if bearing < 337.0 && bearing > 203.0 {
            direction.push('W');
        }

        direction
    }

    /// The time at which this data point begins.
    pub fn time(&self) -> Option<OffsetDateTime> {
        to_datetime(self.timestamp)
    }

    /// The time of when the sun will rise during a given day. (only on daily)
    pub fn sunrise_time(&self) -> Option<OffsetDateTime> {
        to_datetime(self.sunrise_timestamp)
    }

    /// The time of when the sun will set during a given day. (only on daily)
    pub fn sunset_time(&self) -> Option<OffsetDateTime> {
        to_datetime(self.sunset_timestamp)
    }

    pub fn precip_intensity_max_time(&self) -> Option<OffsetDateTime> {
        to_datetime(self.precip_intensity_max_timestamp)
    }

    pub fn temperature_high_time(&self) -> Option<OffsetDateTime> {
        to_datetime(self.temperature_high_timestamp)
    }

    pub fn temperature_low_time(&self) -> Option<OffsetDateTime> {
        to_datetime(self.temperature_low_timestamp)
    }

    pub fn temperature_min_time(&self) -> Option<OffsetDateTime> {
        to_datetime(self.temperature_min_timestamp)
    }

    pub fn temperature_max_time(&self) -> Option<OffsetDateTime> {
        to_datetime(self.temperature_max_timestamp)
    }

    pub fn apparent_temperature_high_time(&self) -> Option<OffsetDateTime> {
        to_datetime(self.apparent_temperature_high_timestamp)
    }

    pub fn apparent_temperature_low_time(&self) -> Option<OffsetDateTime> {
        to_datetime(self.apparent_temperature_low_timestamp)
    }

    pub fn apparent_temperature_min_time(&self) -> Option<OffsetDateTime> {
        to_datetime(self.apparent_temperature_min_timestamp)
    }

    pub fn apparent_temperature_max_time(&self) -> Option<OffsetDateTime> {
        to_datetime(self.apparent_temperature_max_timestamp)
    }

    pub fn wind_gust_time(&self) -> Option<OffsetDateTime> {
        to_datetime(self.wind_gust_timestamp)
    }

    /// The time of when the maximum uvIndex occurs during a given day. (only on daily)
    pub fn uv_index_time(&self) -> Option<OffsetDateTime> {
        to_datetime(self.uv_index_timestamp)
    }
}

/// Object representing the severe weather warnings issued for the requested location by a
/// governmental authority.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    /// A brief description of the alert.
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    /// A detailed description of the alert.
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    /// The UNIX time at which the alert was issued.
    #[serde(rename = "time")]
    #[serde(deserialize_with = "null_default")]
    pub timestamp: i64,
    /// The UNIX time at which the alert will expire.
    #[serde(rename = "expires")]
    #[serde(deserialize_with = "null_default")]
    pub expires_timestamp: i64,
    /// The names of the regions covered by this weather alert.
    #[serde(deserialize_with = "null_default")]
    pub regions: Vec<String>,
    /// The severity of the weather alert: "advisory", "watch", or "warning".
    #[serde(deserialize_with = "null_default")]
    pub severity: String,
    /// An HTTP(S) URI that one may refer to for detailed information about the alert.
    #[serde(deserialize_with = "null_default")]
    pub uri: String,
}

impl Alert {
    /// The time at which the alert was issued.
    pub fn time(&self) -> Option<OffsetDateTime> {
        to_datetime(self.timestamp)
    }

    /// The time at which the alert will expire.
    pub fn expires(&self) -> Option<OffsetDateTime> {
        to_datetime(self.expires_timestamp)
    }
}

/// The flags object contains various metadata information related to the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flags {
    /// The presence of this property indicates that the Dark Sky data source supports the given
    /// location, but a temporary error (such as a radar station being down for maintenance) has
    /// made the data unavailable.
    #[serde(rename = "darksky-unavailable")]
    #[serde(deserialize_with = "null_default")]
    pub darksky_unavailable: String,
    #[serde(rename = "darksky-stations")]
    #[serde(deserialize_with = "null_default")]
    pub darksky_stations: Vec<String>,
    #[serde(rename = "datapoint-stations")]
    #[serde(deserialize_with = "null_default")]
    pub datapoint_stations: Vec<String>,
    #[serde(rename = "isd-stations", alias = "isds-stations")]
    #[serde(deserialize_with = "null_default")]
    pub isd_stations: Vec<String>,
    #[serde(rename = "lamp-stations")]
    #[serde(deserialize_with = "null_default")]
    pub lamp_stations: Vec<String>,
    #[serde(rename = "metar-stations", alias = "metars-stations")]
    #[serde(deserialize_with = "null_default")]
    pub metar_stations: Vec<String>,
    /// The license text required when data from the Norwegian Meteorological Institute is used.
    #[serde(rename = "metno-license", alias = "metnol-license")]
    #[serde(deserialize_with = "null_default")]
    pub metno_license: String,
    /// The distance to the nearest weather station that contributed data to this response. This
    /// property's value is in miles (if US units are selected) or kilometers (if SI units are
    /// selected).
    #[serde(rename = "nearest-station")]
    #[serde(deserialize_with = "null_default")]
    pub nearest_station: f64,
    /// This property contains an array of IDs for each data source utilized in servicing this
    /// request.
    #[serde(deserialize_with = "null_default")]
    pub sources: Vec<String>,
    /// Indicates the units which were used for the data in this request.
    #[serde(deserialize_with = "null_default")]
    pub units: String,
}
