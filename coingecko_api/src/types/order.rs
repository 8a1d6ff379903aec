//! Sort orders accepted by list endpoints.

use std::str::FromStr;

/// Sort order for list endpoints (`order` query parameter).
///
/// Not every endpoint honors every variant; unsupported values are ignored
/// upstream rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    GeckoAsc,
    GeckoDesc,
    MarketCapAsc,
    MarketCapDesc,
    VolumeAsc,
    VolumeDesc,
    CoinNameAsc,
    CoinNameDesc,
    PriceAsc,
    PriceDesc,
    H24ChangeAsc,
    H24ChangeDesc,
    TrustScoreDesc,
    NameAsc,
    NameDesc,
    OpenInterestBtcAsc,
    OpenInterestBtcDesc,
    TradeVolume24hBtcAsc,
    TradeVolume24hBtcDesc,
}

impl Order {
    /// Wire representation sent in the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::GeckoAsc => "gecko_asc",
            Order::GeckoDesc => "gecko_desc",
            Order::MarketCapAsc => "market_cap_asc",
            Order::MarketCapDesc => "market_cap_desc",
            Order::VolumeAsc => "volume_asc",
            Order::VolumeDesc => "volume_desc",
            Order::CoinNameAsc => "coin_name_asc",
            Order::CoinNameDesc => "coin_name_desc",
            Order::PriceAsc => "price_asc",
            Order::PriceDesc => "price_desc",
            Order::H24ChangeAsc => "h24_change_asc",
            Order::H24ChangeDesc => "h24_change_desc",
            Order::TrustScoreDesc => "trust_score_desc",
            Order::NameAsc => "name_asc",
            Order::NameDesc => "name_desc",
            Order::OpenInterestBtcAsc => "open_interest_btc_asc",
            Order::OpenInterestBtcDesc => "open_interest_btc_desc",
            Order::TradeVolume24hBtcAsc => "trade_volume_24h_btc_asc",
            Order::TradeVolume24hBtcDesc => "trade_volume_24h_btc_desc",
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Order {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gecko_asc" => Ok(Order::GeckoAsc),
            "gecko_desc" => Ok(Order::GeckoDesc),
            "market_cap_asc" => Ok(Order::MarketCapAsc),
            "market_cap_desc" => Ok(Order::MarketCapDesc),
            "volume_asc" => Ok(Order::VolumeAsc),
            "volume_desc" => Ok(Order::VolumeDesc),
            "coin_name_asc" => Ok(Order::CoinNameAsc),
            "coin_name_desc" => Ok(Order::CoinNameDesc),
            "price_asc" => Ok(Order::PriceAsc),
            "price_desc" => Ok(Order::PriceDesc),
            "h24_change_asc" => Ok(Order::H24ChangeAsc),
            "h24_change_desc" => Ok(Order::H24ChangeDesc),
            "trust_score_desc" => Ok(Order::TrustScoreDesc),
            "name_asc" => Ok(Order::NameAsc),
            "name_desc" => Ok(Order::NameDesc),
            "open_interest_btc_asc" => Ok(Order::OpenInterestBtcAsc),
            "open_interest_btc_desc" => Ok(Order::OpenInterestBtcDesc),
            "trade_volume_24h_btc_asc" => Ok(Order::TradeVolume24hBtcAsc),
            "trade_volume_24h_btc_desc" => Ok(Order::TradeVolume24hBtcDesc),
            _ => Err(()),
        }
    }
}
