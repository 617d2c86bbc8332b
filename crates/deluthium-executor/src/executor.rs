//! Firm-quote order placement.
//!
//! Only market orders exist: a firm quote is a binding price plus calldata
//! that executes atomically on-chain. There is nothing resting on a book,
//! so cancellation and balance tracking are structural gaps, not missing
//! features - the executor reports them as such instead of simulating.

use crate::error::ExecutorResult;
use deluthium_client::VenueClient;
use deluthium_core::{ChainId, FirmQuoteRequest, FirmQuoteResult, Side, TradingPair};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, warn};

/// Places orders by obtaining firm quotes.
///
/// Stateless apart from the shared client and the chain/wallet scope; each
/// call builds a fresh request and nothing is cached or retried.
pub struct QuoteExecutor {
    client: Arc<VenueClient>,
    chain: ChainId,
    wallet_address: Option<String>,
}

impl QuoteExecutor {
    pub fn new(client: Arc<VenueClient>, chain: ChainId, wallet_address: Option<String>) -> Self {
        Self {
            client,
            chain,
            wallet_address,
        }
    }

    /// Request a firm quote and return the venue's calldata for external
    /// signing and broadcast.
    ///
    /// Venue and transport errors propagate to the caller untouched: order
    /// placement is user-initiated, and swallowing a failure here would be
    /// unsafe. Retry policy belongs to the caller.
    pub async fn place_order(
        &self,
        pair: &TradingPair,
        amount: Decimal,
        side: Side,
    ) -> ExecutorResult<FirmQuoteResult> {
        let request = FirmQuoteRequest::new(
            pair.clone(),
            side,
            amount,
            self.chain,
            self.wallet_address.clone(),
        )?;

        let result = self.client.firm_quote(&request).await?;
        info!(
            pair = %pair,
            %side,
            %amount,
            tx_hash = result.tx_hash.as_deref().unwrap_or("N/A"),
            "Order placed via firm quote"
        );
        Ok(result)
    }

    /// Cancellation is structurally unsupported: quotes execute atomically
    /// on-chain, so there is never an open order to cancel. Always returns
    /// `false` - the host's cleanup logic needs a definite negative, not
    /// an exception.
    pub async fn cancel_order(&self, order_id: &str, pair: &TradingPair) -> bool {
        warn!(
            order_id,
            pair = %pair,
            "Order cancellation is not supported on Deluthium; quotes execute atomically on-chain"
        );
        false
    }

    /// Balance tracking is a declared capability gap: on-chain balances
    /// must be sourced from the wallet provider. No-op with a warning.
    pub async fn update_balances(&self) {
        warn!(
            "Balance updates are not implemented for the Deluthium connector; \
             query on-chain balances via the wallet provider"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecutorError;
    use deluthium_core::CoreError;
    use rust_decimal_macros::dec;

    fn executor() -> QuoteExecutor {
        // Points at an unreachable base URL; validation-path tests never
        // issue a request.
        let client = Arc::new(
            VenueClient::new("http://127.0.0.1:0", "test-key", None).unwrap(),
        );
        QuoteExecutor::new(client, ChainId::new(56).unwrap(), None)
    }

    fn pair() -> TradingPair {
        TradingPair::from_host_symbol("WBNB-USDT").unwrap()
    }

    #[tokio::test]
    async fn test_cancel_order_always_false() {
        let exec = executor();
        assert!(!exec.cancel_order("oid-1", &pair()).await);
        assert!(!exec.cancel_order("", &pair()).await);
    }

    #[tokio::test]
    async fn test_update_balances_is_noop() {
        executor().update_balances().await;
    }

    #[tokio::test]
    async fn test_place_order_rejects_non_positive_amount() {
        let exec = executor();
        let err = exec.place_order(&pair(), dec!(0), Side::Buy).await.unwrap_err();
        assert!(matches!(
            err,
            ExecutorError::Core(CoreError::InvalidAmount(_))
        ));

        let err = exec
            .place_order(&pair(), dec!(-3), Side::Sell)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ExecutorError::Core(CoreError::InvalidAmount(_))
        ));
    }
}
