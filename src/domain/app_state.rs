use crate::{
    config::{CopyConfig, ReportConfig},
    infra::clipboard::{copy_text, ClipboardTransport},
    util::{
        notice::{Notice, Notices},
        persistence::CartStore,
    },
};

use super::{
    entities::{Cart, CartItem, Catalog},
    export::{portfolio_report, PortfolioReport},
    filter::CatalogQuery,
    portfolio::Portfolio,
    view::{cart_view, event_options, station_cards, CartView, StationCard},
};

/// One user gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SelectEvent(String),
    Search(String),
    FilterRegime(String),
    Add(String),
    Remove(String),
    ReassignEvent { item_id: String, event_id: String },
    Clear,
}

/// Everything the host UI renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub cards: Vec<StationCard>,
    pub cart: CartView,
}

/// Catalog, portfolio and browse criteria for one session.
pub struct AppState<S: CartStore> {
    catalog: Catalog,
    portfolio: Portfolio<S>,
    pub query: CatalogQuery,
    pub report_config: ReportConfig,
    pub copy_config: CopyConfig,
    pub notices: Notices,
    previous_total: i64,
}

impl<S: CartStore> AppState<S> {
    /// Loads the saved cart from `store`.
    pub fn new(catalog: Catalog, store: S) -> Self {
        Self {
            catalog,
            portfolio: Portfolio::load(store),
            query: CatalogQuery::default(),
            report_config: ReportConfig::default(),
            copy_config: CopyConfig::default(),
            notices: Notices::default(),
            previous_total: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn portfolio(&self) -> &Portfolio<S> {
        &self.portfolio
    }

    pub fn cart(&self) -> &Cart {
        self.portfolio.cart()
    }

    /// Applies one action. Returns the new item for [`Action::Add`].
    pub fn dispatch(&mut self, action: Action) -> Option<CartItem> {
        match action {
            Action::SelectEvent(event_id) => self.portfolio.select_event(event_id),
            Action::Search(term) => self.query.set_search_term(&term),
            Action::FilterRegime(regime) => self.query.regime = regime,
            Action::Add(station_name) => {
                return Some(self.portfolio.add_with_current_event(station_name));
            }
            Action::Remove(item_id) => self.portfolio.remove(&item_id),
            Action::ReassignEvent { item_id, event_id } => {
                self.portfolio.reassign_event(&item_id, event_id)
            }
            Action::Clear => self.portfolio.clear(),
        }
        None
    }

    /// Builds the view and remembers its total for the next trend.
    pub fn render(&mut self) -> View {
        let cart = self.portfolio.cart();
        let cards = station_cards(
            &self.catalog,
            cart,
            &self.query,
            self.portfolio.current_event_id(),
        );
        let cart = cart_view(cart, &self.catalog, self.previous_total);
        self.previous_total = cart.total;
        View { cards, cart }
    }

    pub fn event_options(&self) -> Vec<(&str, &str)> {
        event_options(&self.catalog).collect()
    }

    pub fn report(&self) -> Option<PortfolioReport> {
        portfolio_report(self.portfolio.cart(), &self.catalog)
    }

    /// Copies the portfolio summary. Does nothing for an empty cart.
    pub async fn copy_portfolio<T: ClipboardTransport>(&mut self, transport: &T) -> Option<Notice> {
        let text = self.report()?.render(&self.report_config);
        let notice = copy_text(transport, &text, &self.copy_config).await;
        self.notices.push(notice.clone());
        Some(notice)
    }
}
