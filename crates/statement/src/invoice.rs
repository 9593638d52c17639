use serde::{Deserialize, Serialize};

use crate::play::PlayId;

/// One performance on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID")]
    pub play_id: PlayId,
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// Customer invoice: the performances to bill, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }
}
