//! Matching Engine Service
//!
//! Aggregated price-level order book and continuous double-auction matching
//! for a single fractional-share market.
//!
//! **Key Invariants:**
//! - Bids strictly descending, asks strictly ascending, one level per price
//! - No resting level at or below the dust threshold
//! - Executions always happen at the resting level's price
//! - Conservation of quantity: filled + remaining == submitted
//! - Deterministic (same config and orders → same book and trades)

pub mod book;
pub mod matching;
pub mod seeder;
pub mod engine;

pub use book::{BookSnapshot, OrderBook, PriceLevel, DEFAULT_BOOK_DEPTH};
pub use engine::{MatchingEngine, PlaceOutcome};
pub use seeder::{seed_book, SeedSummary};
