//! Theatre billing statements.
//!
//! Builds a [`Statement`] from an [`Invoice`] and a [`Plays`] catalogue, then
//! renders it as plain text or HTML. Everything here is deterministic domain
//! logic (no IO, no storage).

pub mod calculator;
pub mod error;
pub mod fixtures;
pub mod invoice;
pub mod play;
pub mod render;
pub mod statement;

pub use calculator::PerformanceCalculator;
pub use error::{StatementError, StatementResult};
pub use invoice::{Invoice, Performance};
pub use play::{Play, PlayId, PlayType, Plays};
pub use render::{RenderFormat, render, render_html, render_plain_text};
pub use statement::{EnrichedPerformance, Statement, create_statement_data};

/// Plain-text statement for `invoice`.
pub fn statement(invoice: &Invoice, plays: &Plays) -> StatementResult<String> {
    Ok(render_plain_text(&create_statement_data(invoice, plays)?))
}

/// HTML statement for `invoice`.
pub fn html_statement(invoice: &Invoice, plays: &Plays) -> StatementResult<String> {
    Ok(render_html(&create_statement_data(invoice, plays)?))
}
