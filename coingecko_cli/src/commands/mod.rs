pub mod coin;
pub mod markets;
pub mod misc;
pub mod price;
