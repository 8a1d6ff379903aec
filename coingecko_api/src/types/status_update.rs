//! Status-update filter enums for `/status_updates`.

use std::str::FromStr;

/// Category filter for status updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusUpdateCategory {
    General,
    Milestone,
    Partnership,
    ExchangeListing,
    SoftwareRelease,
    FundMovement,
    NewListings,
    Event,
}

impl std::fmt::Display for StatusUpdateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StatusUpdateCategory::General => "general",
            StatusUpdateCategory::Milestone => "milestone",
            StatusUpdateCategory::Partnership => "partnership",
            StatusUpdateCategory::ExchangeListing => "exchange_listing",
            StatusUpdateCategory::SoftwareRelease => "software_release",
            StatusUpdateCategory::FundMovement => "fund_movement",
            StatusUpdateCategory::NewListings => "new_listings",
            StatusUpdateCategory::Event => "event",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for StatusUpdateCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(StatusUpdateCategory::General),
            "milestone" => Ok(StatusUpdateCategory::Milestone),
            "partnership" => Ok(StatusUpdateCategory::Partnership),
            "exchange_listing" => Ok(StatusUpdateCategory::ExchangeListing),
            "software_release" => Ok(StatusUpdateCategory::SoftwareRelease),
            "fund_movement" => Ok(StatusUpdateCategory::FundMovement),
            "new_listings" => Ok(StatusUpdateCategory::NewListings),
            "event" => Ok(StatusUpdateCategory::Event),
            _ => Err(()),
        }
    }
}

/// Project-type filter for status updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusUpdateProjectType {
    Coin,
    Market,
}

impl std::fmt::Display for StatusUpdateProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StatusUpdateProjectType::Coin => "coin",
            StatusUpdateProjectType::Market => "market",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for StatusUpdateProjectType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coin" => Ok(StatusUpdateProjectType::Coin),
            "market" => Ok(StatusUpdateProjectType::Market),
            _ => Err(()),
        }
    }
}
