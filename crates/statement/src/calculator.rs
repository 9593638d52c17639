//! Per-performance pricing and volume credits.
//!
//! | type    | amount (cents)                                               | credits                       |
//! |---------|--------------------------------------------------------------|-------------------------------|
//! | tragedy | 40000, + 1000 per seat over 30                               | seats over 30                 |
//! | comedy  | 30000, + 10000 + 500 per seat over 20 if over 20, + 300/seat | seats over 30 + seats / 5     |

use repertory_core::Cents;

use crate::error::StatementResult;
use crate::invoice::Performance;
use crate::play::{Play, PlayType};

/// Prices a single performance according to its play's type.
#[derive(Debug, Clone, Copy)]
pub struct PerformanceCalculator<'a> {
    performance: &'a Performance,
    play: &'a Play,
    play_type: PlayType,
}

impl<'a> PerformanceCalculator<'a> {
    /// Fails with `unknown type: ...` when the play's type has no pricing rule.
    pub fn new(performance: &'a Performance, play: &'a Play) -> StatementResult<Self> {
        Ok(Self {
            performance,
            play,
            play_type: play.play_type()?,
        })
    }

    pub fn performance(&self) -> &'a Performance {
        self.performance
    }

    pub fn play(&self) -> &'a Play {
        self.play
    }

    pub fn play_type(&self) -> PlayType {
        self.play_type
    }

    pub fn amount(&self) -> Cents {
        let audience = i64::from(self.performance.audience);
        let amount = match self.play_type {
            PlayType::Tragedy => {
                let mut result = 40_000;
                if audience > 30 {
                    result += 1_000 * (audience - 30);
                }
                result
            }
            PlayType::Comedy => {
                let mut result = 30_000;
                if audience > 20 {
                    result += 10_000 + 500 * (audience - 20);
                }
                result + 300 * audience
            }
        };
        Cents(amount)
    }

    pub fn volume_credits(&self) -> u64 {
        let audience = u64::from(self.performance.audience);
        let base = audience.saturating_sub(30);
        match self.play_type {
            PlayType::Tragedy => base,
            PlayType::Comedy => base + audience / 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(kind: &str, audience: u32) -> (Cents, u64) {
        let play = Play::new("Test", kind);
        let performance = Performance::new("test", audience);
        let calc = PerformanceCalculator::new(&performance, &play).unwrap();
        (calc.amount(), calc.volume_credits())
    }

    #[test]
    fn tragedy_at_or_under_thirty_seats_is_flat() {
        assert_eq!(price("tragedy", 0), (Cents(40_000), 0));
        assert_eq!(price("tragedy", 30), (Cents(40_000), 0));
    }

    #[test]
    fn tragedy_charges_per_extra_seat() {
        assert_eq!(price("tragedy", 31), (Cents(41_000), 1));
        assert_eq!(price("tragedy", 55), (Cents(65_000), 25));
    }

    #[test]
    fn comedy_small_audience() {
        // 30000 + 300 * 20; no credits below 30 seats except the /5 bonus.
        assert_eq!(price("comedy", 20), (Cents(36_000), 4));
        assert_eq!(price("comedy", 4), (Cents(31_200), 0));
    }

    #[test]
    fn comedy_large_audience() {
        assert_eq!(price("comedy", 21), (Cents(30_000 + 10_500 + 6_300), 4));
        assert_eq!(price("comedy", 35), (Cents(58_000), 12));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let play = Play::new("Henry V", "history");
        let performance = Performance::new("henry-v", 40);
        let err = PerformanceCalculator::new(&performance, &play).unwrap_err();
        assert_eq!(err.to_string(), "unknown type: history");
    }
}
