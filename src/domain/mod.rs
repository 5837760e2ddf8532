//! Valuation, portfolio and catalog logic lives here.

pub mod app_state;
pub mod entities;
pub mod evaluation;
pub mod export;
pub mod filter;
pub mod portfolio;
pub mod view;

pub use app_state::{Action, AppState, View};
pub use entities::{Cart, CartItem, Catalog, CatalogError, Event, Line, Station, BASELINE_EVENT_ID};
pub use evaluation::{compute_value, event_multiplier, ValuationError};
pub use export::{portfolio_report, PortfolioReport, ReportGroup};
pub use filter::{filter_catalog, CatalogQuery, ALL_REGIMES};
pub use portfolio::Portfolio;
pub use view::{
    active_event_names, cart_view, station_cards, CartRow, CartView, StationCard, TotalTrend,
};
