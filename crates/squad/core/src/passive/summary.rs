//! Team passive summary.
//!
//! Groups every passive assigned to an on-pitch slot by description, sums the
//! magnitudes and renders the description template with the total.

use std::collections::BTreeMap;

use crate::env::PassiveOracle;
use crate::squad::SlotAssignment;

/// One line of the team passive summary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CombinedPassive {
    /// Raw description template shared by every grouped passive.
    pub description: String,
    pub total_value: f64,
    /// Number of assignments folded into this line.
    pub count: usize,
    pub rendered_description: String,
}

/// Combine the passives of every non-reserve slot.
///
/// Passives with an identical description are merged, so the strong and weak
/// variant of the same ability stack into one line. Lines are ordered by
/// absolute total (largest first), then by description.
pub fn combine_team_passives<P>(
    assignments: &[SlotAssignment<'_>],
    passives: &P,
) -> Vec<CombinedPassive>
where
    P: PassiveOracle + ?Sized,
{
    let mut grouped: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for assignment in assignments.iter().filter(|assignment| !assignment.is_reserve()) {
        for entry in assignment.config.passives.iter() {
            let Some(passive_id) = entry.passive_id else {
                continue;
            };
            let Some(record) = passives.passive(&passive_id) else {
                continue;
            };
            if record.description.is_empty() {
                continue;
            }
            let line = grouped.entry(record.description.as_str()).or_insert((0.0, 0));
            line.0 += entry.value;
            line.1 += 1;
        }
    }

    let mut combined: Vec<CombinedPassive> = grouped
        .into_iter()
        .map(|(description, (total_value, count))| CombinedPassive {
            description: description.to_owned(),
            total_value,
            count,
            rendered_description: render_passive_description(description, total_value),
        })
        .collect();

    combined.sort_by(|a, b| {
        b.total_value
            .abs()
            .total_cmp(&a.total_value.abs())
            .then_with(|| a.description.cmp(&b.description))
    });
    combined
}

/// Substitute `value` into a description template.
///
/// `+%` becomes the signed value, `-%` the value with its sign flipped.
/// Templates without a placeholder are returned unchanged.
pub fn render_passive_description(template: &str, value: f64) -> String {
    let mut rendered = String::with_capacity(template.len() + 8);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if (c == '+' || c == '-') && chars.peek() == Some(&'%') {
            chars.next();
            rendered.push_str(&placeholder_percent(c, value));
        } else {
            rendered.push(c);
        }
    }
    rendered
}

/// `+%` shows the sign of `value`; `-%` shows the opposite sign. Zero counts
/// as non-negative for both, so `-%` renders a zero total as `-0%`.
fn placeholder_percent(placeholder: char, value: f64) -> String {
    let non_negative = value >= 0.0;
    let sign = match (placeholder, non_negative) {
        ('+', true) | ('-', false) => '+',
        _ => '-',
    };
    format!("{sign}{}%", format_number(value.abs()))
}

/// Format with at most two decimals, trimming trailing zeros.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}
