//! Deluthium REST endpoint paths and rate-limit constants.

/// Production API base URL.
pub const BASE_URL: &str = "https://rfq-api.deluthium.ai";

/// GET: list supported trading pairs.
pub const LISTING_PAIRS_PATH: &str = "/v1/listing/pairs";

/// GET: indicative (non-binding) price for a pair.
pub const QUOTE_INDICATIVE_PATH: &str = "/v1/quote/indicative";

/// POST: firm (binding, time-limited) quote with execution calldata.
pub const QUOTE_FIRM_PATH: &str = "/v1/quote/firm";

/// GET: status of a submitted order.
pub const ORDER_STATUS_PATH: &str = "/v1/order/status";

/// GET: historical orders.
pub const ORDER_HISTORY_PATH: &str = "/v1/order/history";

/// GET: account balances.
pub const BALANCES_PATH: &str = "/v1/balances";

/// Venue-advertised rate limit: requests per window.
///
/// Enforcement lives in the host's throttler; these are documentation for
/// configuring it.
pub const RATE_LIMIT_REQUESTS: u32 = 300;

/// Venue-advertised rate limit window in seconds.
pub const RATE_LIMIT_PERIOD_SECS: u64 = 60;
