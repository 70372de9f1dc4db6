//! Request/response shapes for the HTTP API.

pub mod link;
pub mod shorten;
pub mod stats;

pub use link::LinkInfo;
pub use shorten::{ShortenRequest, ShortenResponse};
pub use stats::{ClickInfo, StatsResponse};
