//! Pure view models for the host UI, recomputed on every render.

use super::{
    entities::{Cart, Catalog, Event, Line},
    evaluation::compute_value,
    filter::CatalogQuery,
};

/// One station in the browse grid.
#[derive(Clone, Debug, PartialEq)]
pub struct StationCard {
    pub name: String,
    pub regime: String,
    pub kind: String,
    pub rarity: f64,
    pub line: Line,
    /// Score under the default event.
    pub current_score: i64,
    pub baseline_score: i64,
    /// Whether the default event differs from the baseline, so the baseline
    /// score should be shown struck through next to the current one.
    pub show_baseline: bool,
    /// Copies of this station already in the cart.
    pub in_cart: usize,
}

impl StationCard {
    pub fn is_selected(&self) -> bool {
        self.in_cart > 0
    }
}

/// Station cards for the filtered catalog, valued under `default_event_id`.
pub fn station_cards(
    catalog: &Catalog,
    cart: &Cart,
    query: &CatalogQuery,
    default_event_id: &str,
) -> Vec<StationCard> {
    let current = catalog.resolve_event(default_event_id);
    let baseline = catalog.baseline();

    query
        .apply(catalog.stations())
        .into_iter()
        .filter_map(|station| {
            let scores = compute_value(station.rarity, current)
                .and_then(|score| Ok((score, compute_value(station.rarity, baseline)?)));
            let (current_score, baseline_score) = match scores {
                Ok(scores) => scores,
                Err(err) => {
                    log::warn!("[view] Skipping station {}: {err}", station.name);
                    return None;
                }
            };
            Some(StationCard {
                name: station.name.clone(),
                regime: station.regime.clone(),
                kind: station.kind.clone(),
                rarity: station.rarity,
                line: station.line(),
                current_score,
                baseline_score,
                show_baseline: !current.is_baseline(),
                in_cart: cart.count_of(&station.name),
            })
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartRow {
    pub item_id: String,
    pub station_name: String,
    pub line: Line,
    /// Event id as stored on the item, used to preselect the event picker.
    pub event_id: String,
    pub score: i64,
    /// Item's event resolves to something other than the baseline.
    pub special: bool,
}

/// Direction the cart total moved since the previous render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TotalTrend {
    Up,
    Down,
    #[default]
    Flat,
}

impl TotalTrend {
    pub fn between(previous: i64, current: i64) -> Self {
        match current.cmp(&previous) {
            std::cmp::Ordering::Greater => TotalTrend::Up,
            std::cmp::Ordering::Less => TotalTrend::Down,
            std::cmp::Ordering::Equal => TotalTrend::Flat,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub total: i64,
    /// Every item in the cart, orphans included.
    pub count: usize,
    /// Distinct non-baseline event names, in first-seen order.
    pub active_events: Vec<String>,
    pub trend: TotalTrend,
}

/// The cart panel. `previous_total` is the total shown by the last render.
pub fn cart_view(cart: &Cart, catalog: &Catalog, previous_total: i64) -> CartView {
    let mut rows = Vec::with_capacity(cart.len());
    let mut total: i64 = 0;

    for item in cart {
        let Some(station) = catalog.station(&item.station_name) else {
            continue;
        };
        let event = catalog.resolve_event(&item.event_id);
        let score = match compute_value(station.rarity, event) {
            Ok(score) => score,
            Err(err) => {
                log::warn!("[view] Skipping cart item {}: {err}", item.id);
                continue;
            }
        };
        let Some(next_total) = total.checked_add(score) else {
            log::warn!("[view] Skipping cart item {}: total overflows", item.id);
            continue;
        };
        total = next_total;
        rows.push(CartRow {
            item_id: item.id.clone(),
            station_name: station.name.clone(),
            line: station.line(),
            event_id: item.event_id.clone(),
            score,
            special: !event.is_baseline(),
        });
    }

    CartView {
        rows,
        total,
        count: cart.len(),
        active_events: active_event_names(cart, catalog),
        trend: TotalTrend::between(previous_total, total),
    }
}

/// Names of the non-baseline events present in the cart, without repeats.
/// Unknown event ids count as baseline.
pub fn active_event_names(cart: &Cart, catalog: &Catalog) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for item in cart {
        let event = catalog.resolve_event(&item.event_id);
        if !event.is_baseline() && !names.contains(&event.name) {
            names.push(event.name.clone());
        }
    }
    names
}

/// Options for an event picker, in catalog order.
pub fn event_options(catalog: &Catalog) -> impl Iterator<Item = (&str, &str)> {
    catalog
        .events()
        .iter()
        .map(|event: &Event| (event.id.as_str(), event.name.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{
            tests::{baseline, event, sample_catalog, station},
            CartItem,
        },
        filter::ALL_REGIMES,
    };

    fn item(id: &str, station_name: &str, event_id: &str) -> CartItem {
        CartItem {
            id: id.to_string(),
            station_name: station_name.to_string(),
            event_id: event_id.to_string(),
        }
    }

    #[test]
    fn cards_show_current_and_baseline_scores() {
        let catalog = sample_catalog();
        let cart = Cart::from(vec![item("1", "TaipeiMain", "none"), item("2", "TaipeiMain", "E1")]);
        let query = CatalogQuery::new("", ALL_REGIMES);

        let cards = station_cards(&catalog, &cart, &query, "E1");
        let main = &cards[0];
        assert_eq!(main.name, "TaipeiMain");
        assert_eq!((main.current_score, main.baseline_score), (4933, 2000));
        assert!(main.show_baseline);
        assert_eq!(main.in_cart, 2);
        assert_eq!(main.line, Line::Blue);
        assert!(!cards[1].is_selected());

        let plain = station_cards(&catalog, &cart, &query, "none");
        assert!(!plain[0].show_baseline);
        assert_eq!(plain[0].current_score, plain[0].baseline_score);
        // Zero rarity is shown, worth nothing.
        assert_eq!(plain[3].current_score, 0);
    }

    #[test]
    fn cards_follow_query() {
        let catalog = sample_catalog();
        let cards = station_cards(&catalog, &Cart::new(), &CatalogQuery::new("zhong", ALL_REGIMES), "none");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "Zhongshan");
    }

    #[test]
    fn cards_skip_stations_that_cannot_be_valued() {
        let catalog = Catalog::new(
            vec![station("A", "文湖線", 2.0)],
            vec![baseline(), event("broken", "Broken", 1.0, 0.0)],
        )
        .unwrap();
        let cards = station_cards(&catalog, &Cart::new(), &CatalogQuery::default(), "broken");
        assert!(cards.is_empty());
    }

    #[test]
    fn cart_view_totals_resolvable_items() {
        let catalog = sample_catalog();
        let cart = Cart::from(vec![
            item("1", "TaipeiMain", "E1"),
            item("2", "Gone", "none"),
            item("3", "Taipei101", "none"),
            item("4", "Zhongshan", "E1"),
        ]);
        let view = cart_view(&cart, &catalog, 10_000);
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.count, 4);
        // 4933 + 500 + 3083
        assert_eq!(view.total, 8516);
        assert_eq!(view.trend, TotalTrend::Down);
        assert_eq!(view.active_events, ["Anniversary"]);
        assert!(view.rows[0].special);
        assert!(!view.rows[1].special);
    }

    #[test]
    fn trend_compares_with_previous_total() {
        assert_eq!(TotalTrend::between(0, 10), TotalTrend::Up);
        assert_eq!(TotalTrend::between(10, 10), TotalTrend::Flat);
        assert_eq!(TotalTrend::between(10, 0), TotalTrend::Down);
    }

    #[test]
    fn event_options_in_catalog_order() {
        let catalog = sample_catalog();
        let options: Vec<_> = event_options(&catalog).collect();
        assert_eq!(options, [("none", "無活動"), ("E1", "Anniversary")]);
    }

    #[test]
    fn unknown_event_is_not_an_active_event() {
        let catalog = sample_catalog();
        let cart = Cart::from(vec![
            item("1", "TaipeiMain", "retired"),
            item("2", "Zhongshan", "E1"),
            item("3", "Taipei101", "E1"),
        ]);
        let view = cart_view(&cart, &catalog, 0);
        assert_eq!(view.active_events, ["Anniversary"]);
        assert!(!view.rows[0].special);
        assert_eq!(view.rows[0].score, 2000);
        assert!(view.rows[1].special);

        let retired_only = Cart::from(vec![item("1", "TaipeiMain", "retired")]);
        assert!(active_event_names(&retired_only, &catalog).is_empty());
    }

    #[test]
    fn cart_total_skips_items_that_would_overflow() {
        let catalog = Catalog::new(
            vec![station("Huge", "文湖線", 1.6e-15), station("A", "文湖線", 5.0)],
            vec![baseline()],
        )
        .unwrap();
        let cart = Cart::from(vec![
            item("1", "Huge", "none"),
            item("2", "A", "none"),
            item("3", "Huge", "none"),
        ]);
        let view = cart_view(&cart, &catalog, 0);
        let ids: Vec<_> = view.rows.iter().map(|row| row.item_id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(view.total, view.rows[0].score + 2000);
        assert_eq!(view.count, 3);
    }
}
