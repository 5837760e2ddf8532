use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Id of the event that carries no special effect.
pub const BASELINE_EVENT_ID: &str = "none";

/// A collectible station from the host catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    /// Line (or lines, for transfer stations) the station belongs to.
    pub regime: String,
    pub rarity: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Station {
    pub fn line(&self) -> Line {
        Line::from_regime(&self.regime)
    }
}

/// Time-limited modifier applied on top of a station's rarity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    /// Special rarity factor.
    pub rarity: f64,
    /// Duration in days.
    pub duration: f64,
}

impl Event {
    pub fn is_baseline(&self) -> bool {
        self.id == BASELINE_EVENT_ID
    }
}

/// One owned copy in the portfolio.
///
/// Serialized as `{id, name, eventId}`, which is the persisted cart format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    #[serde(rename = "name")]
    pub station_name: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
}

/// Ordered list of owned copies. Order only matters for display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    pub fn find(&self, item_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Number of copies held of the given station, under any event.
    pub fn count_of(&self, station_name: &str) -> usize {
        self.items
            .iter()
            .filter(|item| item.station_name == station_name)
            .count()
    }

    pub(crate) fn push(&mut self, item: CartItem) {
        self.items.push(item);
    }

    pub(crate) fn find_mut(&mut self, item_id: &str) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    /// Returns true when an item was removed.
    pub(crate) fn remove(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        self.items.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no baseline event (id \"none\")")]
    MissingBaseline,
    #[error("duplicate station name: {0}")]
    DuplicateStation(String),
    #[error("duplicate event id: {0}")]
    DuplicateEvent(String),
    #[error("station {name} has invalid rarity {rarity}")]
    InvalidRarity { name: String, rarity: f64 },
    #[error("malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Immutable stations and events supplied by the host.
#[derive(Clone, Debug)]
pub struct Catalog {
    stations: Vec<Station>,
    events: Vec<Event>,
    baseline: usize,
}

impl Catalog {
    /// Builds a catalog, checking that names and ids are unique, that station
    /// rarities are finite and not negative, and that the baseline event is
    /// present.
    pub fn new(stations: Vec<Station>, events: Vec<Event>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        for station in &stations {
            if !names.insert(station.name.as_str()) {
                return Err(CatalogError::DuplicateStation(station.name.clone()));
            }
            if !station.rarity.is_finite() || station.rarity < 0.0 {
                return Err(CatalogError::InvalidRarity {
                    name: station.name.clone(),
                    rarity: station.rarity,
                });
            }
        }

        let mut ids = HashSet::new();
        for event in &events {
            if !ids.insert(event.id.as_str()) {
                return Err(CatalogError::DuplicateEvent(event.id.clone()));
            }
        }

        let baseline = events
            .iter()
            .position(Event::is_baseline)
            .ok_or(CatalogError::MissingBaseline)?;

        Ok(Self {
            stations,
            events,
            baseline,
        })
    }

    pub fn from_json(stations_json: &str, events_json: &str) -> Result<Self, CatalogError> {
        let stations: Vec<Station> = serde_json::from_str(stations_json)?;
        let events: Vec<Event> = serde_json::from_str(events_json)?;
        Self::new(stations, events)
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Events in catalog order, as offered to the user.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn baseline(&self) -> &Event {
        &self.events[self.baseline]
    }

    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|station| station.name == name)
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Looks up an event, falling back to the baseline for unknown ids.
    pub fn resolve_event(&self, id: &str) -> &Event {
        self.event(id).unwrap_or_else(|| {
            log::debug!("[catalog] unknown event id {id:?}, using baseline");
            self.baseline()
        })
    }
}

/// Metro line a station is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    Blue,
    Red,
    Brown,
    Orange,
    Green,
    Yellow,
    Purple,
    Other,
}

impl Line {
    /// Checked in this order; transfer stations take the first line found.
    const BY_NAME: [(&'static str, Line); 7] = [
        ("板南線", Line::Blue),
        ("淡水信義線", Line::Red),
        ("文湖線", Line::Brown),
        ("中和新蘆線", Line::Orange),
        ("松山新店線", Line::Green),
        ("環狀線", Line::Yellow),
        ("桃園機場捷運", Line::Purple),
    ];

    pub fn from_regime(regime: &str) -> Self {
        Self::BY_NAME
            .iter()
            .find(|(name, _)| regime.contains(*name))
            .map(|(_, line)| *line)
            .unwrap_or(Line::Other)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Line::Blue => "line-blue",
            Line::Red => "line-red",
            Line::Brown => "line-brown",
            Line::Orange => "line-orange",
            Line::Green => "line-green",
            Line::Yellow => "line-yellow",
            Line::Purple => "line-purple",
            Line::Other => "bg-gray-700",
        }
    }
}
