//! Bundled sample catalogue and invoices, plus JSON loaders.

use crate::error::StatementResult;
use crate::invoice::Invoice;
use crate::play::Plays;

const PLAYS_JSON: &str = include_str!("../fixtures/plays.json");
const INVOICES_JSON: &str = include_str!("../fixtures/invoices.json");

/// Decodes a catalogue object: `{ "<playID>": { "name": ..., "type": ... } }`.
pub fn plays_from_json(json: &str) -> StatementResult<Plays> {
    Ok(serde_json::from_str(json)?)
}

/// Decodes an array of invoices.
pub fn invoices_from_json(json: &str) -> StatementResult<Vec<Invoice>> {
    Ok(serde_json::from_str(json)?)
}

/// Hamlet, As You Like It and Othello.
pub fn sample_plays() -> StatementResult<Plays> {
    plays_from_json(PLAYS_JSON)
}

/// A single invoice for BigCo covering one performance of each sample play.
pub fn sample_invoices() -> StatementResult<Vec<Invoice>> {
    invoices_from_json(INVOICES_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatementError;

    #[test]
    fn bundled_fixtures_decode() {
        let plays = sample_plays().unwrap();
        assert_eq!(plays.len(), 3);

        let invoices = sample_invoices().unwrap();
        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].customer, "BigCo");
        assert_eq!(invoices[0].performances.len(), 3);
        assert_eq!(invoices[0].performances[1].play_id.as_str(), "as-like");
    }

    #[test]
    fn malformed_json_is_a_fixture_error() {
        let err = invoices_from_json(r#"[{ "customer": "BigCo" }]"#).unwrap_err();
        assert!(matches!(err, StatementError::Fixture(_)));
        assert!(err.to_string().starts_with("invalid fixture data"));
    }
}
