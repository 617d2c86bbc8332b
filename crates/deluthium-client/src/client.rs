//! HTTP client for the Deluthium RFQ endpoints.
//!
//! Three calls, all JSON over HTTPS with bearer-token auth:
//! - `GET /v1/listing/pairs` (soft-fail: empty list on any failure)
//! - `GET /v1/quote/indicative` (soft-fail: `None` on any failure)
//! - `POST /v1/quote/firm` (hard-fail: transport and venue errors propagate)

use crate::codes::normalize_venue_error;
use crate::endpoints::{LISTING_PAIRS_PATH, QUOTE_FIRM_PATH, QUOTE_INDICATIVE_PATH};
use crate::error::{ClientError, ClientResult};
use deluthium_core::{ChainId, FirmQuoteRequest, FirmQuoteResult, Side, TradingPair};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::pin::Pin;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Boxed future for dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// Source of indicative prices.
///
/// The polling loop depends on this seam rather than on `VenueClient`
/// directly, so tests can script slow or failing fetches without a network.
pub trait PriceSource: Send + Sync {
    /// Fetch an indicative mid-price.
    ///
    /// `None` means "temporarily unpriceable" - never an error.
    fn indicative_price<'a>(
        &'a self,
        pair: &'a TradingPair,
        chain: ChainId,
    ) -> BoxFuture<'a, Option<Decimal>>;
}

/// Venue-side pair metadata from the listing endpoint.
///
/// Only `symbol` is interpreted; everything else rides along as an opaque
/// blob for the host to inspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairListing {
    pub symbol: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ListingResponse {
    #[serde(default)]
    pairs: Vec<PairListing>,
}

/// Query parameters for the indicative-quote endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IndicativeParams<'a> {
    base_token: &'a str,
    quote_token: &'a str,
    chain_id: u64,
}

/// Request body for the firm-quote endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FirmQuoteWire<'a> {
    base_token: &'a str,
    quote_token: &'a str,
    side: Side,
    amount: String,
    chain_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    wallet_address: Option<&'a str>,
}

/// Authenticated client for the Deluthium REST API.
pub struct VenueClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl VenueClient {
    /// Create a client with the given base URL, API key, and transport
    /// timeout.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach bearer token and content type. Every Deluthium call is
    /// authenticated the same way; there is no request signing.
    fn authenticate(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
    }

    /// Fetch the venue's pair listing.
    ///
    /// Soft-fail contract: any transport, HTTP, or parse failure is logged
    /// and an empty list returned. A listing hiccup must not crash the
    /// polling or cache-population paths that depend on it.
    pub async fn list_pairs(&self) -> Vec<PairListing> {
        let request = self.authenticate(self.http.get(self.url(LISTING_PAIRS_PATH)));

        let response = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "Failed to fetch Deluthium pair listing");
                return Vec::new();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Deluthium pair listing returned non-success status");
            return Vec::new();
        }

        match response.json::<ListingResponse>().await {
            Ok(listing) => {
                debug!(pair_count = listing.pairs.len(), "Fetched pair listing");
                listing.pairs
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse Deluthium pair listing");
                Vec::new()
            }
        }
    }

    /// Fetch an indicative mid-price for one pair.
    ///
    /// Returns `None` on any failure - network, non-2xx, malformed payload,
    /// or missing `price` field. Callers treat absence as "temporarily
    /// unpriceable", not fatal.
    pub async fn indicative_price(&self, pair: &TradingPair, chain: ChainId) -> Option<Decimal> {
        let params = IndicativeParams {
            base_token: pair.base(),
            quote_token: pair.quote(),
            chain_id: chain.value(),
        };
        let request = self
            .authenticate(self.http.get(self.url(QUOTE_INDICATIVE_PATH)))
            .query(&params);

        let response = match request.send().await {
            Ok(resp) if resp.status().is_success() => resp,
            Ok(resp) => {
                warn!(pair = %pair, status = %resp.status(), "Indicative quote returned non-success status");
                return None;
            }
            Err(e) => {
                warn!(pair = %pair, error = %e, "Failed to fetch indicative price");
                return None;
            }
        };

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!(pair = %pair, error = %e, "Failed to parse indicative quote payload");
                return None;
            }
        };

        let price = parse_price(body.get("price")?);
        if price.is_none() {
            warn!(pair = %pair, "Indicative quote payload has unparseable price");
        }
        price
    }

    /// Request a firm quote.
    ///
    /// Transport failures propagate as [`ClientError::Transport`]; venue
    /// error codes (either scheme) as [`ClientError::Venue`]. No retry is
    /// attempted here.
    pub async fn firm_quote(&self, req: &FirmQuoteRequest) -> ClientResult<FirmQuoteResult> {
        let wire = FirmQuoteWire {
            base_token: req.pair.base(),
            quote_token: req.pair.quote(),
            side: req.side,
            amount: req.amount.to_string(),
            chain_id: req.chain.value(),
            wallet_address: req.wallet_address.as_deref(),
        };

        let response = self
            .authenticate(self.http.post(self.url(QUOTE_FIRM_PATH)))
            .json(&wire)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("Firm quote request failed: {e}")))?;

        let status = response.status();
        // The venue reports semantic failures in the body even on non-2xx
        // responses, so parse before judging the status code.
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) if status.is_success() => {
                return Err(ClientError::Transport(format!(
                    "Failed to parse firm quote response: {e}"
                )))
            }
            Err(_) => return Err(ClientError::Transport(format!("HTTP {status}"))),
        };

        into_firm_quote_result(body, &req.pair, req.side)
    }
}

/// Interpret a firm-quote response body.
///
/// Checks the string `errorCode` field, then the numeric `code` field; a
/// match in either (or an unrecognized non-empty code) is a venue error.
/// Otherwise the raw payload is returned intact alongside whatever tx hash
/// and calldata the venue supplied.
fn into_firm_quote_result(
    body: Value,
    pair: &TradingPair,
    side: Side,
) -> ClientResult<FirmQuoteResult> {
    if let Some(failure) = normalize_venue_error(&body) {
        return Err(ClientError::Venue(failure));
    }

    let tx_hash = body
        .get("txHash")
        .and_then(Value::as_str)
        .map(str::to_string);
    let calldata = body
        .get("calldata")
        .and_then(Value::as_str)
        .map(str::to_string);

    info!(
        pair = %pair,
        %side,
        tx_hash = tx_hash.as_deref().unwrap_or("N/A"),
        "Firm quote received"
    );

    Ok(FirmQuoteResult {
        tx_hash,
        calldata,
        raw: body,
    })
}

/// Parse a price field that may arrive as a JSON string or number.
///
/// Numbers go through their decimal string form rather than `f64` so the
/// exact printed value survives.
fn parse_price(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => Decimal::from_str(s).ok(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}

impl PriceSource for VenueClient {
    fn indicative_price<'a>(
        &'a self,
        pair: &'a TradingPair,
        chain: ChainId,
    ) -> BoxFuture<'a, Option<Decimal>> {
        Box::pin(self.indicative_price(pair, chain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deluthium_core::CoreError;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn pair() -> TradingPair {
        TradingPair::from_host_symbol("WBNB-USDT").unwrap()
    }

    #[test]
    fn test_firm_quote_wire_serialization() {
        let wire = FirmQuoteWire {
            base_token: "WBNB",
            quote_token: "USDT",
            side: Side::Buy,
            amount: "1.5".to_string(),
            chain_id: 56,
            wallet_address: None,
        };
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(
            json,
            json!({
                "baseToken": "WBNB",
                "quoteToken": "USDT",
                "side": "buy",
                "amount": "1.5",
                "chainId": 56,
            })
        );
    }

    #[test]
    fn test_firm_quote_wire_includes_wallet() {
        let wire = FirmQuoteWire {
            base_token: "ETH",
            quote_token: "USDC",
            side: Side::Sell,
            amount: "0.25".to_string(),
            chain_id: 1,
            wallet_address: Some("0xdeadbeef"),
        };
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["walletAddress"], "0xdeadbeef");
        assert_eq!(json["side"], "sell");
    }

    #[test]
    fn test_parse_price_string_and_number() {
        assert_eq!(parse_price(&json!("600.30")), Some(dec!(600.30)));
        assert_eq!(parse_price(&json!(600.3)), Some(dec!(600.3)));
        assert_eq!(parse_price(&json!(null)), None);
        assert_eq!(parse_price(&json!("not-a-price")), None);
    }

    #[test]
    fn test_firm_quote_result_string_error() {
        let body = json!({"errorCode": "QUOTE_EXPIRED"});
        let err = into_firm_quote_result(body, &pair(), Side::Buy).unwrap_err();
        match err {
            ClientError::Venue(failure) => {
                assert_eq!(failure.code, "QUOTE_EXPIRED");
                assert!(failure.message.contains("expired"));
            }
            other => panic!("expected venue error, got {other:?}"),
        }
    }

    #[test]
    fn test_firm_quote_result_numeric_error() {
        let body = json!({"code": 1004});
        let err = into_firm_quote_result(body, &pair(), Side::Sell).unwrap_err();
        assert!(err.is_venue_error());
        assert!(err.to_string().to_lowercase().contains("expired"));
    }

    #[test]
    fn test_firm_quote_result_success_keeps_raw() {
        let body = json!({
            "txHash": "0xabc123",
            "calldata": "0xdeadbeef",
            "quoteId": "q-17",
        });
        let result = into_firm_quote_result(body.clone(), &pair(), Side::Buy).unwrap();
        assert_eq!(result.tx_hash.as_deref(), Some("0xabc123"));
        assert_eq!(result.calldata.as_deref(), Some("0xdeadbeef"));
        assert_eq!(result.raw, body);
    }

    #[test]
    fn test_listing_response_parses_opaque_metadata() {
        let body = json!({
            "pairs": [
                {"symbol": "WBNB/USDT", "minAmount": "0.01", "decimals": 18},
                {"symbol": "ETH/USDC"},
            ]
        });
        let listing: ListingResponse = serde_json::from_value(body).unwrap();
        assert_eq!(listing.pairs.len(), 2);
        assert_eq!(listing.pairs[0].symbol, "WBNB/USDT");
        assert_eq!(listing.pairs[0].extra["minAmount"], "0.01");
    }

    #[test]
    fn test_request_validation_rejects_bad_amount() {
        let chain = ChainId::new(56).unwrap();
        let err = FirmQuoteRequest::new(pair(), Side::Buy, dec!(0), chain, None).unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount(_)));
    }
}
