//! Order book observation.
//!
//! A book becomes a `3 x N` matrix with one column per level:
//!
//! ```text
//!            bids (ascending)      asks (ascending)
//! sign     [  -1    -1    -1   |   +1    +1    +1  ]
//! quantity [  q     q     q    |   q     q     q   ]
//! price    [  98    99    100  |   101   102   103 ]
//! ```
//!
//! Bids arrive best-first (descending) and are reversed; asks arrive
//! best-first (ascending) and keep their order, so a non-crossed book
//! yields an ascending price row.

use market_core::{OrderBookSnapshot, PriceLevel, Side};
use ndarray::{Array2, ArrayView1};

pub const SIGN_ROW: usize = 0;
pub const QUANTITY_ROW: usize = 1;
pub const PRICE_ROW: usize = 2;
pub const ROWS: usize = 3;

/// Signed bid/ask matrix built from one order book snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Observation(Array2<f64>);

impl Observation {
    pub fn from_book(book: &OrderBookSnapshot) -> Self {
        let mut data = Array2::<f64>::zeros((ROWS, book.depth()));

        let bids = book.bids.iter().rev().map(|l| (Side::Buy, l));
        let asks = book.asks.iter().map(|l| (Side::Sell, l));

        for (col, (side, level)) in bids.chain(asks).enumerate() {
            write_column(&mut data, col, side, level);
        }

        Observation(data)
    }

    /// Number of columns (levels on both sides)
    pub fn len(&self) -> usize {
        self.0.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.0.ncols() == 0
    }

    pub fn shape(&self) -> (usize, usize) {
        self.0.dim()
    }

    pub fn signs(&self) -> ArrayView1<'_, f64> {
        self.0.row(SIGN_ROW)
    }

    pub fn quantities(&self) -> ArrayView1<'_, f64> {
        self.0.row(QUANTITY_ROW)
    }

    pub fn prices(&self) -> ArrayView1<'_, f64> {
        self.0.row(PRICE_ROW)
    }

    /// `(sign, quantity, price)` of column `index`
    pub fn column(&self, index: usize) -> Option<(f64, f64, f64)> {
        (index < self.len()).then(|| {
            (
                self.0[[SIGN_ROW, index]],
                self.0[[QUANTITY_ROW, index]],
                self.0[[PRICE_ROW, index]],
            )
        })
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.0
    }

    pub fn into_array(self) -> Array2<f64> {
        self.0
    }
}

impl From<&OrderBookSnapshot> for Observation {
    fn from(book: &OrderBookSnapshot) -> Self {
        Observation::from_book(book)
    }
}

fn write_column(data: &mut Array2<f64>, col: usize, side: Side, level: &PriceLevel) {
    data[[SIGN_ROW, col]] = side.sign();
    data[[QUANTITY_ROW, col]] = level.quantity_f64();
    data[[PRICE_ROW, col]] = level.price_f64();
}

/// Bounds of valid observations
///
/// Row bounds apply to every column; the column count is unbounded.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSpace {
    pub low: [f64; ROWS],
    pub high: [f64; ROWS],
}

impl ObservationSpace {
    pub fn new() -> Self {
        ObservationSpace {
            low: [-1.0, 0.0, 0.0],
            high: [1.0, f64::INFINITY, f64::INFINITY],
        }
    }

    /// `(rows, columns)`; columns depend on book depth
    pub fn shape(&self) -> (usize, Option<usize>) {
        (ROWS, None)
    }

    pub fn contains(&self, observation: &Observation) -> bool {
        let data = observation.as_array();
        if data.nrows() != ROWS {
            return false;
        }

        let in_bounds = data.rows().into_iter().enumerate().all(|(row, values)| {
            values
                .iter()
                .all(|&v| !v.is_nan() && v >= self.low[row] && v <= self.high[row])
        });

        in_bounds
            && observation
                .signs()
                .iter()
                .all(|&s| s == Side::Buy.sign() || s == Side::Sell.sign())
    }
}

impl Default for ObservationSpace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    fn book() -> OrderBookSnapshot {
        OrderBookSnapshot::new(
            "BTC/USDT",
            vec![
                PriceLevel::new(dec!(100), dec!(1.5)),
                PriceLevel::new(dec!(99), dec!(2)),
                PriceLevel::new(dec!(98), dec!(0.25)),
            ],
            vec![
                PriceLevel::new(dec!(101), dec!(3)),
                PriceLevel::new(dec!(102.5), dec!(4)),
            ],
        )
    }

    #[test]
    fn test_shape_and_layout() {
        let obs = Observation::from_book(&book());

        assert_eq!(obs.shape(), (3, 5));
        assert_eq!(obs.signs().to_vec(), vec![-1.0, -1.0, -1.0, 1.0, 1.0]);
        assert_eq!(obs.quantities().to_vec(), vec![0.25, 2.0, 1.5, 3.0, 4.0]);
        assert_eq!(obs.prices().to_vec(), vec![98.0, 99.0, 100.0, 101.0, 102.5]);
    }

    #[test]
    fn test_prices_ascending() {
        let obs = Observation::from_book(&book());
        let prices = obs.prices();
        assert!(prices.windows(2).into_iter().all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_column() {
        let obs = Observation::from_book(&book());

        let (sign, qty, price) = obs.column(2).unwrap();
        assert_eq!(sign, -1.0);
        assert_relative_eq!(qty, 1.5);
        assert_relative_eq!(price, 100.0);

        assert_eq!(obs.column(3), Some((1.0, 3.0, 101.0)));
        assert_eq!(obs.column(5), None);
    }

    #[test]
    fn test_one_sided_books() {
        let mut only_asks = book();
        only_asks.bids.clear();
        let obs = Observation::from_book(&only_asks);
        assert_eq!(obs.shape(), (3, 2));
        assert!(obs.signs().iter().all(|&s| s == 1.0));

        let mut only_bids = book();
        only_bids.asks.clear();
        let obs = Observation::from_book(&only_bids);
        assert_eq!(obs.shape(), (3, 3));
        assert_eq!(obs.prices().to_vec(), vec![98.0, 99.0, 100.0]);
    }

    #[test]
    fn test_empty_book() {
        let obs = Observation::from_book(&OrderBookSnapshot::new("BTC/USDT", vec![], vec![]));
        assert_eq!(obs.shape(), (3, 0));
        assert!(obs.is_empty());
        assert!(ObservationSpace::new().contains(&obs));
    }

    #[test]
    fn test_space_contains() {
        let space = ObservationSpace::default();
        assert_eq!(space.shape(), (3, None));
        assert!(space.contains(&Observation::from_book(&book())));

        let mut data = Observation::from_book(&book()).into_array();
        data[[SIGN_ROW, 0]] = 0.5;
        assert!(!space.contains(&Observation(data.clone())));

        data[[SIGN_ROW, 0]] = -1.0;
        data[[PRICE_ROW, 1]] = f64::NAN;
        assert!(!space.contains(&Observation(data)));

        assert!(!space.contains(&Observation(Array2::zeros((2, 4)))));
    }
}
