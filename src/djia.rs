//! Market-index collaborator: the Dow Jones opening value.
//!
//! The core never performs I/O. Callers resolve the index value through
//! an [`IndexSource`] before building a
//! [`SeedInput`](crate::geohash::SeedInput); an unavailable quote is an
//! explicit sentinel, not an error, and the comic renders its digits
//! deterministically.

use crate::error::Result;
use chrono::NaiveDate;

/// Seed value standing in for a quote the source has no data for.
pub const UNAVAILABLE_SENTINEL: f64 = -1.0;

/// A resolved market-index quote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndexQuote {
    /// The opening value for the requested date.
    Value(f64),
    /// The source has no data for the requested date.
    Unavailable,
}

impl IndexQuote {
    /// The value to feed into the seed string.
    #[must_use]
    pub const fn seed_value(self) -> f64 {
        match self {
            Self::Value(v) => v,
            Self::Unavailable => UNAVAILABLE_SENTINEL,
        }
    }
}

/// Resolves the index quote for a date.
pub trait IndexSource {
    /// Resolve the quote for `date`.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport or parse failures; a date
    /// with no data yields [`IndexQuote::Unavailable`].
    fn resolve(&self, date: NaiveDate) -> Result<IndexQuote>;
}

/// The date whose opening value seeds a geohash, per the 30W rule.
///
/// East of 30°W, from 2008-05-27 on, the previous day's opening is
/// used, since the Dow opens after markets east of that meridian have
/// already reached the date.
#[must_use]
pub fn djia_date(date: NaiveDate, lon: f64) -> NaiveDate {
    let cutover = NaiveDate::from_ymd_opt(2008, 5, 27).unwrap_or(date);
    if lon > -30.0 && date >= cutover {
        date.pred_opt().unwrap_or(date)
    } else {
        date
    }
}

#[cfg(feature = "fetch")]
pub use self::http::HttpIndexSource;

#[cfg(feature = "fetch")]
mod http {
    use super::{IndexQuote, IndexSource};
    use crate::error::{Error, Result};
    use chrono::NaiveDate;
    use tracing::{debug, info};

    const DEFAULT_ENDPOINT: &str = "http://irc.peeron.com/xkcd/map/data";

    /// Fetches quotes from the xkcd geohashing data mirror.
    ///
    /// No retry or backoff; one GET per resolve.
    #[derive(Debug, Clone)]
    pub struct HttpIndexSource {
        endpoint: String,
        client: reqwest::blocking::Client,
    }

    impl Default for HttpIndexSource {
        fn default() -> Self {
            Self::new(DEFAULT_ENDPOINT)
        }
    }

    impl HttpIndexSource {
        /// Create a source against a custom endpoint (tests, mirrors).
        #[must_use]
        pub fn new(endpoint: &str) -> Self {
            Self {
                endpoint: endpoint.trim_end_matches('/').to_string(),
                client: reqwest::blocking::Client::new(),
            }
        }

        fn quote_url(&self, date: NaiveDate) -> String {
            format!("{}/{}", self.endpoint, date.format("%Y/%m/%d"))
        }
    }

    impl IndexSource for HttpIndexSource {
        fn resolve(&self, date: NaiveDate) -> Result<IndexQuote> {
            let url = self.quote_url(date);
            debug!(%url, "fetching market index");

            let response = self
                .client
                .get(&url)
                .send()
                .map_err(|e| Error::IndexFetch(e.to_string()))?;

            if response.status() == reqwest::StatusCode::NOT_FOUND {
                info!(%date, "no market index data for date");
                return Ok(IndexQuote::Unavailable);
            }
            let body = response
                .error_for_status()
                .map_err(|e| Error::IndexFetch(e.to_string()))?
                .text()
                .map_err(|e| Error::IndexFetch(e.to_string()))?;

            // The mirror serves a plain-text 404 page with status 200.
            if body.contains("404 Not Found") {
                info!(%date, "no market index data for date");
                return Ok(IndexQuote::Unavailable);
            }

            body.trim()
                .parse::<f64>()
                .map(IndexQuote::Value)
                .map_err(|e| Error::IndexFetch(format!("bad quote body: {e}")))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_quote_url_layout() {
            let source = HttpIndexSource::new("http://example.com/data/");
            let date = NaiveDate::from_ymd_opt(2008, 5, 27).unwrap();
            assert_eq!(
                source.quote_url(date),
                "http://example.com/data/2008/05/27"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_seed_value_sentinel() {
        assert_eq!(IndexQuote::Value(10458.68).seed_value(), 10458.68);
        assert_eq!(IndexQuote::Unavailable.seed_value(), -1.0);
    }

    #[test]
    fn test_30w_rule_east_after_cutover() {
        let d = date(2008, 5, 27);
        assert_eq!(djia_date(d, 0.0), date(2008, 5, 26));
        assert_eq!(djia_date(d, -29.9), date(2008, 5, 26));
    }

    #[test]
    fn test_30w_rule_west_unaffected() {
        let d = date(2008, 5, 27);
        assert_eq!(djia_date(d, -122.085589), d);
        assert_eq!(djia_date(d, -30.0), d);
    }

    #[test]
    fn test_30w_rule_before_cutover() {
        let d = date(2005, 5, 26);
        assert_eq!(djia_date(d, 0.0), d);
    }
}
