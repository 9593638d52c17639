//! Statement renderers.
//!
//! Both renderers work from a [`Statement`] alone. Output is byte-exact; play
//! names and customers are written as-is (no HTML escaping).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use repertory_core::DomainError;

use crate::statement::Statement;

/// Output format of a rendered statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Text,
    Html,
}

impl core::fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            RenderFormat::Text => "text",
            RenderFormat::Html => "html",
        })
    }
}

impl FromStr for RenderFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(RenderFormat::Text),
            "html" => Ok(RenderFormat::Html),
            other => Err(DomainError::validation(format!(
                "unsupported render format: {other}"
            ))),
        }
    }
}

pub fn render(format: RenderFormat, data: &Statement) -> String {
    match format {
        RenderFormat::Text => render_plain_text(data),
        RenderFormat::Html => render_html(data),
    }
}

pub fn render_plain_text(data: &Statement) -> String {
    let mut result = format!("Statement for {}\n", data.customer);
    for perf in &data.performances {
        result.push_str(&format!(
            " {}: {} ({} seats)\n",
            perf.play.name, perf.amount, perf.audience
        ));
    }
    result.push_str(&format!("Amount owed is {}\n", data.total_amount));
    result.push_str(&format!("You earned {} credits\n", data.total_volume_credits));
    result
}

pub fn render_html(data: &Statement) -> String {
    let mut result = format!("<h1>Statement for {}</h1>\n", data.customer);
    result.push_str("<table>\n");
    // Header row has no line break of its own.
    result.push_str("<tr><th>play</th><th>seats</th><th>cost</th></tr>");
    for perf in &data.performances {
        result.push_str(&format!(
            " <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            perf.play.name, perf.audience, perf.amount
        ));
    }
    result.push_str("</table>\n");
    result.push_str(&format!(
        "<p>Amount owed is <em>{}</em></p>\n",
        data.total_amount
    ));
    result.push_str(&format!(
        "<p>You earned <em>{}</em> credits</p>\n",
        data.total_volume_credits
    ));
    result
}
