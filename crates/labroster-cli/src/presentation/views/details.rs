use std::fmt;

use crate::presentation::formatters::{format_number, format_ratio};
use crate::presentation::view_models::{DetailsCardViewModel, DetailsContent, LabDetailsViewModel};

use super::{CsvRows, CsvTable};

impl fmt::Display for LabDetailsViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (lab instance {})", self.title, self.lab_instance_id)?;
        writeln!(f)?;

        match &self.content {
            DetailsContent::Loading => writeln!(f, "Loading..."),
            DetailsContent::Message { text, .. } => writeln!(f, "{text}"),
            DetailsContent::Card(card) => write_card(f, card),
        }
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, card: &DetailsCardViewModel) -> fmt::Result {
    let width = card
        .fields
        .iter()
        .map(|(label, _)| label)
        .chain(card.gauges.iter().map(|g| &g.label))
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);

    for (label, value) in &card.fields {
        writeln!(f, "{label:<width$}  {value}")?;
    }

    writeln!(f)?;
    for gauge in &card.gauges {
        writeln!(
            f,
            "{:<width$}  {}/{} ({})",
            gauge.label,
            format_number(gauge.value),
            format_number(gauge.max),
            format_ratio(gauge.ratio),
        )?;
    }

    if let Some(raw) = &card.raw {
        writeln!(f)?;
        let json = serde_json::to_string_pretty(raw).map_err(|_| fmt::Error)?;
        writeln!(f, "{json}")?;
    }
    Ok(())
}

impl CsvTable for LabDetailsViewModel {
    fn csv_rows(&self) -> Option<CsvRows> {
        let DetailsContent::Card(card) = &self.content else {
            return None;
        };

        let mut rows: Vec<Vec<String>> = card
            .fields
            .iter()
            .map(|(label, value)| vec![label.clone(), value.clone()])
            .collect();
        rows.extend(card.gauges.iter().map(|g| {
            vec![
                g.label.clone(),
                format!("{}/{}", format_number(g.value), format_number(g.max)),
            ]
        }));

        Some(CsvRows {
            headers: vec!["field".to_string(), "value".to_string()],
            rows,
        })
    }
}
