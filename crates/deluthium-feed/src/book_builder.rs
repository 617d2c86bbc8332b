//! Synthetic order book construction.
//!
//! Deluthium gives us a single indicative mid-price per pair. The builder
//! spreads it into a deterministic two-level ladder:
//!
//! ```text
//! half  = mid * ratio / 2
//! bids  = [mid - half, mid - 2*half]   sizes [1.0, 2.0]
//! asks  = [mid + half, mid + 2*half]   sizes [1.0, 2.0]
//! ```
//!
//! Sizes are a placeholder depth model, not real liquidity. All arithmetic
//! is exact decimal; no I/O happens here.

use deluthium_core::{BookLevel, BookSnapshot, TradingPair};
use rust_decimal::Decimal;

/// Default synthetic spread ratio: 0.001 = 10 bps.
pub const DEFAULT_SPREAD_RATIO: Decimal = Decimal::from_parts(1, 0, 0, false, 3);

/// Fixed sizes for ladder levels 1 and 2.
const LEVEL_SIZES: [Decimal; 2] = [Decimal::ONE, Decimal::TWO];

/// Builds synthetic book snapshots from indicative mid-prices.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticBookBuilder {
    spread_ratio: Decimal,
}

impl SyntheticBookBuilder {
    pub fn new(spread_ratio: Decimal) -> Self {
        Self { spread_ratio }
    }

    pub fn spread_ratio(&self) -> Decimal {
        self.spread_ratio
    }

    /// Build a snapshot around `mid`.
    ///
    /// An absent mid produces an empty book: "no quote available this
    /// cycle" is a normal state downstream, never an error.
    pub fn build(&self, pair: TradingPair, mid: Option<Decimal>, update_id: u64) -> BookSnapshot {
        let Some(mid) = mid else {
            return BookSnapshot::empty(pair, update_id);
        };

        let half = mid * self.spread_ratio / Decimal::TWO;
        let bids = vec![
            BookLevel::new(mid - half, LEVEL_SIZES[0]),
            BookLevel::new(mid - half * Decimal::TWO, LEVEL_SIZES[1]),
        ];
        let asks = vec![
            BookLevel::new(mid + half, LEVEL_SIZES[0]),
            BookLevel::new(mid + half * Decimal::TWO, LEVEL_SIZES[1]),
        ];

        BookSnapshot {
            pair,
            update_id,
            bids,
            asks,
        }
    }
}

impl Default for SyntheticBookBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SPREAD_RATIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pair() -> TradingPair {
        TradingPair::from_host_symbol("WBNB-USDT").unwrap()
    }

    #[test]
    fn test_reference_ladder() {
        // mid 600.00, ratio 0.001 -> half 0.3
        let builder = SyntheticBookBuilder::default();
        let snap = builder.build(pair(), Some(dec!(600.00)), 1);

        assert_eq!(snap.bids[0].price, dec!(599.70));
        assert_eq!(snap.bids[1].price, dec!(599.40));
        assert_eq!(snap.asks[0].price, dec!(600.30));
        assert_eq!(snap.asks[1].price, dec!(600.60));
        assert_eq!(snap.bids[0].size, dec!(1.0));
        assert_eq!(snap.bids[1].size, dec!(2.0));
        assert_eq!(snap.asks[0].size, dec!(1.0));
        assert_eq!(snap.asks[1].size, dec!(2.0));
    }

    #[test]
    fn test_ladder_ordering_invariant() {
        let builder = SyntheticBookBuilder::new(dec!(0.004));
        for mid in [dec!(0.00001), dec!(1), dec!(65000.5), dec!(1234567.89)] {
            let snap = builder.build(pair(), Some(mid), 1);
            let best_bid = snap.bids[0].price;
            let best_ask = snap.asks[0].price;
            let bid2 = snap.bids[1].price;
            let ask2 = snap.asks[1].price;

            assert!(bid2 < best_bid, "bid2 < bestBid for mid {mid}");
            assert!(best_bid < mid, "bestBid < mid for mid {mid}");
            assert!(mid < best_ask, "mid < bestAsk for mid {mid}");
            assert!(best_ask < ask2, "bestAsk < ask2 for mid {mid}");
        }
    }

    #[test]
    fn test_absent_mid_gives_empty_book() {
        let builder = SyntheticBookBuilder::default();
        let snap = builder.build(pair(), None, 9);
        assert!(snap.is_empty());
        assert_eq!(snap.update_id, 9);
    }

    #[test]
    fn test_deterministic() {
        let builder = SyntheticBookBuilder::default();
        let a = builder.build(pair(), Some(dec!(423.17)), 5);
        let b = builder.build(pair(), Some(dec!(423.17)), 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_ratio() {
        assert_eq!(SyntheticBookBuilder::default().spread_ratio(), dec!(0.001));
    }
}
