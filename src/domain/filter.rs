use super::entities::Station;

/// Regime filter value that matches every station.
pub const ALL_REGIMES: &str = "all";

/// Search term and line filter currently chosen by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Stored lowercased.
    search_term: String,
    pub regime: String,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            regime: ALL_REGIMES.to_string(),
        }
    }
}

impl CatalogQuery {
    pub fn new(search_term: &str, regime: impl Into<String>) -> Self {
        Self {
            search_term: search_term.to_lowercase(),
            regime: regime.into(),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
    }

    pub fn matches(&self, station: &Station) -> bool {
        let matches_search = self.search_term.is_empty()
            || station.name.to_lowercase().contains(&self.search_term);
        // Regimes of transfer stations list several lines, so this is a
        // substring match rather than equality.
        let matches_regime = self.regime == ALL_REGIMES || station.regime.contains(&self.regime);
        matches_search && matches_regime
    }

    pub fn apply<'a>(&self, stations: &'a [Station]) -> Vec<&'a Station> {
        stations.iter().filter(|station| self.matches(station)).collect()
    }
}

/// Stations matching `search_term` (case-insensitive, by name) and
/// `regime_filter`, in catalog order.
pub fn filter_catalog<'a>(
    stations: &'a [Station],
    search_term: &str,
    regime_filter: &str,
) -> Vec<&'a Station> {
    CatalogQuery::new(search_term, regime_filter).apply(stations)
}
