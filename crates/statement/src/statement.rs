use serde::Serialize;
use tracing::{debug, instrument};

use repertory_core::{Cents, ValueObject};

use crate::calculator::PerformanceCalculator;
use crate::error::StatementResult;
use crate::invoice::{Invoice, Performance};
use crate::play::{Play, PlayId, Plays};

/// A performance with its resolved play and computed charges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedPerformance {
    #[serde(rename = "playID")]
    pub play_id: PlayId,
    pub audience: u32,
    pub play: Play,
    pub amount: Cents,
    pub volume_credits: u64,
}

impl ValueObject for EnrichedPerformance {}

/// Everything a renderer needs; renderers never consult the invoice or
/// catalogue again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    pub customer: String,
    pub performances: Vec<EnrichedPerformance>,
    pub total_amount: Cents,
    pub total_volume_credits: u64,
}

/// Resolves every performance against `plays`, prices it, and totals the
/// invoice. Performance order is preserved.
#[instrument(skip_all, fields(customer = %invoice.customer))]
pub fn create_statement_data(invoice: &Invoice, plays: &Plays) -> StatementResult<Statement> {
    let performances = invoice
        .performances
        .iter()
        .map(|performance| enrich_performance(performance, plays))
        .collect::<StatementResult<Vec<_>>>()?;

    let total_amount: Cents = performances.iter().map(|p| p.amount).sum();
    let total_volume_credits: u64 = performances.iter().map(|p| p.volume_credits).sum();

    debug!(
        performances = performances.len(),
        total_amount = %total_amount,
        total_volume_credits,
        "statement assembled"
    );

    Ok(Statement {
        customer: invoice.customer.clone(),
        performances,
        total_amount,
        total_volume_credits,
    })
}

fn enrich_performance(
    performance: &Performance,
    plays: &Plays,
) -> StatementResult<EnrichedPerformance> {
    let play = plays.lookup(&performance.play_id)?;
    let calculator = PerformanceCalculator::new(performance, play)?;

    Ok(EnrichedPerformance {
        play_id: performance.play_id.clone(),
        audience: performance.audience,
        play: calculator.play().clone(),
        amount: calculator.amount(),
        volume_credits: calculator.volume_credits(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatementError;
    use proptest::prelude::*;

    fn catalogue() -> Plays {
        [
            (PlayId::new("hamlet"), Play::new("Hamlet", "tragedy")),
            (PlayId::new("as-like"), Play::new("As You Like It", "comedy")),
            (PlayId::new("othello"), Play::new("Othello", "tragedy")),
        ]
        .into_iter()
        .collect()
    }

    fn big_co() -> Invoice {
        Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
                Performance::new("othello", 40),
            ],
        )
    }

    #[test]
    fn enriches_each_performance_in_order() {
        let data = create_statement_data(&big_co(), &catalogue()).unwrap();
        assert_eq!(data.customer, "BigCo");

        let lines: Vec<_> = data
            .performances
            .iter()
            .map(|p| (p.play.name.as_str(), p.audience, p.amount, p.volume_credits))
            .collect();
        assert_eq!(
            lines,
            [
                ("Hamlet", 55, Cents(65_000), 25),
                ("As You Like It", 35, Cents(58_000), 12),
                ("Othello", 40, Cents(50_000), 10),
            ]
        );
        assert_eq!(data.total_amount, Cents(173_000));
        assert_eq!(data.total_volume_credits, 47);
    }

    #[test]
    fn empty_invoice_has_zero_totals() {
        let data = create_statement_data(&Invoice::new("Nobody", Vec::new()), &catalogue()).unwrap();
        assert!(data.performances.is_empty());
        assert_eq!(data.total_amount, Cents::ZERO);
        assert_eq!(data.total_volume_credits, 0);
    }

    #[test]
    fn missing_play_is_an_error() {
        let invoice = Invoice::new("BigCo", vec![Performance::new("macbeth", 10)]);
        let err = create_statement_data(&invoice, &catalogue()).unwrap_err();
        match err {
            StatementError::UnknownPlay(id) if id.as_str() == "macbeth" => {}
            other => panic!("Expected UnknownPlay, got {other:?}"),
        }
    }

    #[test]
    fn unknown_play_type_is_an_error() {
        let mut plays = catalogue();
        plays.insert("henry-v", Play::new("Henry V", "history"));
        let invoice = Invoice::new("BigCo", vec![Performance::new("henry-v", 10)]);
        let err = create_statement_data(&invoice, &plays).unwrap_err();
        assert!(err.to_string().contains("unknown type: history"));
    }

    #[test]
    fn serializes_with_source_field_names() {
        let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);
        let data = create_statement_data(&invoice, &catalogue()).unwrap();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["performances"][0]["playID"], "hamlet");
        assert_eq!(json["performances"][0]["play"]["type"], "tragedy");
        assert_eq!(json["total_amount"], 65_000);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: totals are the sums of the per-performance figures.
        #[test]
        fn totals_are_sums_of_lines(
            seats in prop::collection::vec((0usize..3, 0u32..500), 0..12)
        ) {
            let ids = ["hamlet", "as-like", "othello"];
            let performances = seats
                .into_iter()
                .map(|(i, audience)| Performance::new(ids[i], audience))
                .collect();
            let data = create_statement_data(&Invoice::new("Prop", performances), &catalogue()).unwrap();

            let amount: i64 = data.performances.iter().map(|p| p.amount.get()).sum();
            let credits: u64 = data.performances.iter().map(|p| p.volume_credits).sum();
            prop_assert_eq!(data.total_amount.get(), amount);
            prop_assert_eq!(data.total_volume_credits, credits);
        }

        /// Property: assembling twice yields identical statements.
        #[test]
        fn assembly_is_deterministic(audience in 0u32..1000) {
            let invoice = Invoice::new("Prop", vec![
                Performance::new("as-like", audience),
                Performance::new("hamlet", audience),
            ]);
            let first = create_statement_data(&invoice, &catalogue()).unwrap();
            let second = create_statement_data(&invoice, &catalogue()).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
