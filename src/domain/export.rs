//! Groups the cart into a plain-text portfolio summary.

use std::{collections::HashMap, fmt::Write};

use super::{
    entities::{Cart, Catalog},
    evaluation::compute_value,
};
use crate::{config::ReportConfig, util::format::format_number};

/// Copies of one station held under one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportGroup {
    pub station_name: String,
    pub event_id: String,
    /// Display name of the resolved event; `None` for the baseline.
    pub event_name: Option<String>,
    pub unit_value: i64,
    pub count: usize,
    pub total: i64,
}

impl ReportGroup {
    fn line(&self) -> String {
        let tag = self
            .event_name
            .as_ref()
            .map(|name| format!("[{name}] "))
            .unwrap_or_default();
        format!(
            "{}x {tag}{} - {}",
            self.count,
            self.station_name,
            format_number(self.total)
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioReport {
    /// In the order each (station, event) pair first appears in the cart.
    pub groups: Vec<ReportGroup>,
    pub grand_total: i64,
}

impl PortfolioReport {
    pub fn render(&self, config: &ReportConfig) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "{}", config.title);
        for group in &self.groups {
            let _ = writeln!(text, "{}", group.line());
        }
        let _ = write!(
            text,
            "{}{}{}",
            config.total_label,
            format_number(self.grand_total),
            config.attribution
        );
        text
    }
}

/// Builds the export summary, or `None` for an empty cart.
///
/// Items whose station is no longer in the catalog are left out, as are
/// items whose event cannot be valued. Unknown event ids count as baseline.
pub fn portfolio_report(cart: &Cart, catalog: &Catalog) -> Option<PortfolioReport> {
    if cart.is_empty() {
        return None;
    }

    let mut groups: Vec<ReportGroup> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for item in cart {
        let key = (item.station_name.as_str(), item.event_id.as_str());
        if let Some(&slot) = index.get(&key) {
            groups[slot].count += 1;
            continue;
        }

        let Some(station) = catalog.station(&item.station_name) else {
            log::debug!("[export] Skipping orphaned item {} ({})", item.id, item.station_name);
            continue;
        };
        let event = catalog.resolve_event(&item.event_id);
        let unit_value = match compute_value(station.rarity, event) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("[export] Skipping {}: {err}", item.station_name);
                continue;
            }
        };

        index.insert(key, groups.len());
        groups.push(ReportGroup {
            station_name: item.station_name.clone(),
            event_id: item.event_id.clone(),
            event_name: (!event.is_baseline()).then(|| event.name.clone()),
            unit_value,
            count: 1,
            total: 0,
        });
    }

    let mut grand_total: i64 = 0;
    let mut totalled = Vec::with_capacity(groups.len());
    for mut group in groups {
        let totals = i64::try_from(group.count)
            .ok()
            .and_then(|count| group.unit_value.checked_mul(count))
            .and_then(|total| Some((total, grand_total.checked_add(total)?)));
        let Some((total, next_grand_total)) = totals else {
            log::warn!(
                "[export] Skipping {}x {}: total overflows",
                group.count,
                group.station_name
            );
            continue;
        };
        group.total = total;
        grand_total = next_grand_total;
        totalled.push(group);
    }

    Some(PortfolioReport {
        groups: totalled,
        grand_total,
    })
}
