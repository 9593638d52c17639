use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use repertory_core::{DomainError, DomainResult, parse_int};

use crate::producer::{Producer, ProducerData, ProducerId};

/// Province input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceData {
    pub name: String,
    #[serde(default)]
    pub producers: Vec<ProducerData>,
    pub demand: i64,
    pub price: i64,
}

/// A province: demand to satisfy, a sale price, and the producers supplying it.
///
/// `demand`, `price` and producer costs are `None` after a textual assignment
/// that did not parse; every figure derived from them is then `None` as well.
/// Derived figures that would overflow an `i64` are `None` too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Province {
    name: String,
    producers: Vec<Producer>,
    total_production: i64,
    demand: Option<i64>,
    price: Option<i64>,
}

impl Province {
    /// Fails only when the producers' combined production overflows.
    pub fn new(data: ProvinceData) -> DomainResult<Self> {
        let mut province = Self {
            name: data.name,
            producers: Vec::with_capacity(data.producers.len()),
            total_production: 0,
            demand: Some(data.demand),
            price: Some(data.price),
        };
        for producer in data.producers {
            province.add_producer(producer)?;
        }
        Ok(province)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owned snapshot of the producers, in insertion order.
    pub fn producers(&self) -> Vec<Producer> {
        self.producers.clone()
    }

    pub fn producer(&self, id: ProducerId) -> Option<&Producer> {
        self.producers.get(id.index())
    }

    /// Sum of all producers' production (cached).
    pub fn total_production(&self) -> i64 {
        self.total_production
    }

    pub fn demand(&self) -> Option<i64> {
        self.demand
    }

    pub fn price(&self) -> Option<i64> {
        self.price
    }

    pub fn add_producer(&mut self, data: ProducerData) -> DomainResult<ProducerId> {
        let total_production = self.total_after(data.production)?;
        let id = ProducerId::new(self.producers.len());
        let producer = Producer::new(id, data);
        debug!(
            province = %self.name,
            producer = producer.name(),
            production = producer.production(),
            "producer added"
        );
        self.producers.push(producer);
        self.total_production = total_production;
        Ok(id)
    }

    pub fn set_demand(&mut self, demand: i64) {
        self.demand = Some(demand);
    }

    /// Unparseable text leaves the demand undefined.
    pub fn set_demand_text(&mut self, input: &str) {
        self.demand = parse_int(input);
        if self.demand.is_none() {
            warn!(province = %self.name, input, "demand is not a number");
        }
    }

    pub fn set_price(&mut self, price: i64) {
        self.price = Some(price);
    }

    /// Unparseable text leaves the price undefined.
    pub fn set_price_text(&mut self, input: &str) {
        self.price = parse_int(input);
        if self.price.is_none() {
            warn!(province = %self.name, input, "price is not a number");
        }
    }

    pub fn set_cost(&mut self, id: ProducerId, cost: i64) -> DomainResult<()> {
        self.producer_mut(id)?.set_cost(Some(cost));
        Ok(())
    }

    /// Unparseable text leaves the producer's cost undefined, which makes
    /// `demand_cost` and `profit` undefined.
    pub fn set_cost_text(&mut self, id: ProducerId, input: &str) -> DomainResult<()> {
        let cost = parse_int(input);
        if cost.is_none() {
            warn!(province = %self.name, %id, input, "cost is not a number");
        }
        self.producer_mut(id)?.set_cost(cost);
        Ok(())
    }

    /// Replaces a producer's production and applies the delta to the
    /// province total. Nothing changes when the new total would overflow.
    pub fn set_production(&mut self, id: ProducerId, production: i64) -> DomainResult<()> {
        let previous = self
            .producer(id)
            .ok_or_else(|| DomainError::not_found(id.to_string()))?
            .production();
        let delta = production
            .checked_sub(previous)
            .ok_or_else(|| DomainError::invariant("production delta overflow"))?;
        let total_production = self.total_after(delta)?;

        self.producer_mut(id)?.set_production(production);
        self.total_production = total_production;
        debug!(
            province = %self.name,
            %id,
            production,
            delta,
            total_production,
            "production changed"
        );
        Ok(())
    }

    /// Unparseable text sets production to 0.
    pub fn set_production_text(&mut self, id: ProducerId, input: &str) -> DomainResult<()> {
        let production = parse_int(input).unwrap_or_else(|| {
            warn!(province = %self.name, %id, input, "production is not a number; using 0");
            0
        });
        self.set_production(id, production)
    }

    /// `demand - total_production`; negative means surplus.
    pub fn shortfall(&self) -> Option<i64> {
        self.demand?.checked_sub(self.total_production)
    }

    pub fn satisfied_demand(&self) -> Option<i64> {
        Some(self.demand?.min(self.total_production))
    }

    /// Revenue from the satisfied demand.
    pub fn demand_value(&self) -> Option<i64> {
        self.satisfied_demand()?.checked_mul(self.price?)
    }

    /// Cost of meeting demand in merit order.
    ///
    /// Producers are taken by ascending cost (equal costs keep insertion
    /// order); each supplies `min(remaining, production)` units until the
    /// remaining demand reaches zero.
    pub fn demand_cost(&self) -> Option<i64> {
        let mut remaining = self.demand?;
        let mut cost: i64 = 0;
        for producer in self.by_cost() {
            let contribution = remaining.min(producer.production());
            cost = cost.checked_add(contribution.checked_mul(producer.cost()?)?)?;
            remaining = remaining.checked_sub(contribution)?;
        }
        Some(cost)
    }

    pub fn profit(&self) -> Option<i64> {
        self.demand_value()?.checked_sub(self.demand_cost()?)
    }

    /// Producer ids in dispatch order.
    pub fn merit_order(&self) -> Vec<ProducerId> {
        self.by_cost().into_iter().map(Producer::id_typed).collect()
    }

    // Stable: equal costs keep insertion order; undefined costs sort first.
    fn by_cost(&self) -> Vec<&Producer> {
        let mut sorted: Vec<&Producer> = self.producers.iter().collect();
        sorted.sort_by_key(|p| p.cost());
        sorted
    }

    fn total_after(&self, delta: i64) -> DomainResult<i64> {
        self.total_production
            .checked_add(delta)
            .ok_or_else(|| DomainError::invariant("total production overflow"))
    }

    fn producer_mut(&mut self, id: ProducerId) -> DomainResult<&mut Producer> {
        self.producers
            .get_mut(id.index())
            .ok_or_else(|| DomainError::not_found(id.to_string()))
    }
}

impl TryFrom<ProvinceData> for Province {
    type Error = DomainError;

    fn try_from(data: ProvinceData) -> DomainResult<Self> {
        Self::new(data)
    }
}
