use serde::Deserialize;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The measurement units used in the response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Units {
    /// Imperial units (the default).
    #[default]
    Us,
    /// SI units.
    Si,
    /// Same as SI, except that wind speed is in kilometers per hour.
    Ca,
    /// Deprecated alias of Uk2 kept by the API.
    Uk,
    /// Same as SI, except that distance and wind speed are in miles.
    Uk2,
    /// Units selected by the API based on geographic location.
    Auto,
    /// A code the library does not know about, sent to the API as is.
    Other(String),
}

impl Units {
    pub fn as_str(&self) -> &str {
        match self {
            Units::Us => "us",
            Units::Si => "si",
            Units::Ca => "ca",
            Units::Uk => "uk",
            Units::Uk2 => "uk2",
            Units::Auto => "auto",
            Units::Other(code) => code,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Units {
    fn from(code: &str) -> Self {
        match code {
            "us" => Units::Us,
            "si" => Units::Si,
            "ca" => Units::Ca,
            "uk" => Units::Uk,
            "uk2" => Units::Uk2,
            "auto" => Units::Auto,
            other => Units::Other(other.to_string()),
        }
    }
}

impl From<String> for Units {
    fn from(code: String) -> Self {
        Units::from(code.as_str())
    }
}

impl FromStr for Units {
    type Err = Infallible;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Ok(Units::from(code))
    }
}

macro_rules! languages {
    ($($(#[$doc:meta])* $variant:ident => $code:literal,)+) => {
        /// The language of the text summaries in the response.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
        #[serde(from = "String")]
        pub enum Lang {
            #[default]
            English,
            $($(#[$doc])* $variant,)+
            /// A code the library does not know about, sent to the API as is.
            Other(String),
        }

        impl Lang {
            pub fn as_str(&self) -> &str {
                match self {
                    Lang::English => "en",
                    $(Lang::$variant => $code,)+
                    Lang::Other(code) => code,
                }
            }
        }

        impl From<&str> for Lang {
            fn from(code: &str) -> Self {
                match code {
                    "en" => Lang::English,
                    $($code => Lang::$variant,)+
                    other => Lang::Other(other.to_string()),
                }
            }
        }
    };
}

languages! {
    Arabic => "ar",
    Bosnian => "bs",
    German => "de",
    Greek => "el",
    Spanish => "es",
    French => "fr",
    Croatian => "hr",
    Italian => "it",
    Dutch => "nl",
    Polish => "pl",
    Portuguese => "pt",
    Russian => "ru",
    Slovak => "sk",
    Swedish => "sv",
    Tetum => "tet",
    Turkish => "tr",
    Ukrainian => "uk",
    /// Igpay Atinlay.
    PigLatin => "x-pig-latin",
    /// Simplified Chinese.
    Chinese => "zh",
    TraditionalChinese => "zh-tw",
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Lang {
    fn from(code: String) -> Self {
        Lang::from(code.as_str())
    }
}

impl FromStr for Lang {
    type Err = Infallible;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Ok(Lang::from(code))
    }
}
