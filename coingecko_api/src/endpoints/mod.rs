//! Per-resource endpoint methods on [`Client`](crate::Client).
//!
//! Each method validates its required identifiers, applies its query, and
//! delegates to the shared request routine. Path segments are inserted
//! verbatim; callers supply URL-safe identifiers.

mod coins;
mod contracts;
mod events;
mod exchanges;
mod misc;
mod simple;
mod status_updates;

use crate::{query::MarketChartRangeQuery, Error};

/// Rejects an absent or empty required identifier before any network I/O.
fn require(name: &'static str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::MissingParameter(name));
    }
    Ok(())
}

/// Rejects an absent or all-empty required list parameter.
fn require_list(name: &'static str, values: &[String]) -> Result<(), Error> {
    if values.is_empty() || values.iter().all(|v| v.trim().is_empty()) {
        return Err(Error::MissingParameter(name));
    }
    Ok(())
}

/// Validates the required `from`/`to` pair of a ranged chart query.
fn require_range(query: &MarketChartRangeQuery) -> Result<(), Error> {
    let from = query.from.ok_or(Error::MissingParameter("from"))?;
    let to = query.to.ok_or(Error::MissingParameter("to"))?;
    if from > to {
        return Err(Error::InvalidParameter {
            name: "from",
            reason: format!("range start {} is later than range end {}", from, to),
        });
    }
    Ok(())
}

/// The upstream default asset platform for contract lookups.
fn platform_or_default(asset_platform: &str) -> &str {
    if asset_platform.trim().is_empty() {
        "ethereum"
    } else {
        asset_platform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn require_rejects_blank() {
        assert!(matches!(
            require("coin_id", "  "),
            Err(Error::MissingParameter("coin_id"))
        ));
        assert!(require("coin_id", "bitcoin").is_ok());
    }

    #[test]
    fn require_list_rejects_empty_and_blank() {
        assert!(require_list("ids", &[]).is_err());
        assert!(require_list("ids", &["".to_string()]).is_err());
        assert!(require_list("ids", &["bitcoin".to_string()]).is_ok());
    }

    #[test]
    fn range_must_be_ordered() {
        let query = MarketChartRangeQuery::default().with_range(200, 100);
        assert!(matches!(
            require_range(&query),
            Err(Error::InvalidParameter { name: "from", .. })
        ));
        let query = MarketChartRangeQuery::default().with_range(100, 200);
        assert!(require_range(&query).is_ok());
    }

    #[test]
    fn platform_falls_back_to_ethereum() {
        assert_eq!(platform_or_default(""), "ethereum");
        assert_eq!(platform_or_default("binance-smart-chain"), "binance-smart-chain");
    }
}
