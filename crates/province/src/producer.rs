use serde::{Deserialize, Serialize};

use repertory_core::Entity;

/// Producer identifier: its position within the owning province.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProducerId(pub usize);

impl ProducerId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl core::fmt::Display for ProducerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "producer #{}", self.0)
    }
}

/// Producer input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerData {
    pub name: String,
    /// Marginal cost per unit.
    pub cost: i64,
    /// Units currently produced; absent means 0.
    #[serde(default)]
    pub production: i64,
}

impl ProducerData {
    pub fn new(name: impl Into<String>, cost: i64, production: i64) -> Self {
        Self {
            name: name.into(),
            cost,
            production,
        }
    }
}

/// Entity: Producer.
///
/// Producers are owned by a [`crate::Province`]; all writes go through the
/// province so its cached total production stays in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Producer {
    id: ProducerId,
    name: String,
    cost: Option<i64>,
    production: i64,
}

impl Producer {
    pub(crate) fn new(id: ProducerId, data: ProducerData) -> Self {
        Self {
            id,
            name: data.name,
            cost: Some(data.cost),
            production: data.production,
        }
    }

    pub fn id_typed(&self) -> ProducerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` after a textual assignment that did not parse.
    pub fn cost(&self) -> Option<i64> {
        self.cost
    }

    pub fn production(&self) -> i64 {
        self.production
    }

    pub(crate) fn set_cost(&mut self, cost: Option<i64>) {
        self.cost = cost;
    }

    pub(crate) fn set_production(&mut self, production: i64) {
        self.production = production;
    }
}

impl Entity for Producer {
    type Id = ProducerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_production_defaults_to_zero() {
        let data: ProducerData =
            serde_json::from_str(r#"{ "name": "Sinope", "cost": 10 }"#).unwrap();
        assert_eq!(data, ProducerData::new("Sinope", 10, 0));
    }

    #[test]
    fn producer_is_an_entity_keyed_by_position() {
        let mut producer = Producer::new(ProducerId::new(2), ProducerData::new("Byzantium", 10, 9));
        producer.set_cost(None);
        producer.set_production(20);
        assert_eq!(producer.cost(), None);
        assert_eq!(producer.production(), 20);
        assert_eq!(producer.id(), &ProducerId::new(2));
        assert_eq!(producer.id_typed().to_string(), "producer #2");
    }
}
