//! Trade execution logic
//!
//! Generates trade records with a monotonically increasing sequence.

use types::numeric::{Price, Quantity};
use types::order::Side;
use types::trade::Trade;

/// Match executor for handling trade generation
#[derive(Debug, Clone)]
pub struct MatchExecutor {
    sequence_counter: u64,
}

impl MatchExecutor {
    /// Create a new match executor with starting sequence number
    pub fn new(starting_sequence: u64) -> Self {
        Self {
            sequence_counter: starting_sequence,
        }
    }

    /// Get next sequence number (monotonically increasing)
    fn next_sequence(&mut self) -> u64 {
        let seq = self.sequence_counter;
        self.sequence_counter += 1;
        seq
    }

    /// Record an execution at the maker's price
    pub fn execute_trade(
        &mut self,
        taker_side: Side,
        price: Price,
        size: Quantity,
        timestamp: i64,
    ) -> Trade {
        let sequence = self.next_sequence();
        Trade::new(sequence, price, size, taker_side, timestamp)
    }

    /// Sequence number the next trade will receive
    pub fn peek_sequence(&self) -> u64 {
        self.sequence_counter
    }
}

impl Default for MatchExecutor {
    fn default() -> Self {
        Self::new(1)
    }
}
