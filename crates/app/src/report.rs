//! Renders a [`Round`] as output lines.

use std::str::FromStr;

use serde::Deserialize;

use homerules_domain::error::HomeRulesError;

use crate::session::Round;

/// Output format for round reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable lines, one per device.
    #[default]
    Text,
    /// One JSON object per round.
    Json,
}

impl FromStr for ReportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Returned when parsing an unrecognised [`ReportFormat`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown report format {0:?}")]
pub struct UnknownFormat(pub String);

/// Render `round` in the requested format.
///
/// # Errors
///
/// Returns [`HomeRulesError::Encode`] if JSON encoding fails.
pub fn render(round: &Round, format: ReportFormat) -> Result<Vec<String>, HomeRulesError> {
    match format {
        ReportFormat::Text => Ok(render_text(round)),
        ReportFormat::Json => {
            let line =
                serde_json::to_string(round).map_err(|err| HomeRulesError::Encode(Box::new(err)))?;
            Ok(vec![line])
        }
    }
}

fn render_text(round: &Round) -> Vec<String> {
    let mut lines = Vec::with_capacity(round.devices.len() + 2);
    lines.push(format!("Current state: {}", round.current));
    lines.push(format!("Previous state: {}", round.previous));
    lines.extend(round.devices.iter().map(ToString::to_string));
    lines
}
