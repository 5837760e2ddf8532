//! The cart state manager: owns the cart and the default event, persists
//! after every mutation.

use crate::{
    domain::entities::{Cart, CartItem, BASELINE_EVENT_ID},
    util::{generate_item_id, persistence::CartStore},
};

pub struct Portfolio<S: CartStore> {
    cart: Cart,
    /// Event given to newly added items.
    current_event_id: String,
    store: S,
}

impl<S: CartStore> Portfolio<S> {
    /// Loads the saved cart. Call once at startup.
    pub fn load(store: S) -> Self {
        let cart = store.load();
        log::debug!("[portfolio] Starting with {} cart items", cart.len());
        Self {
            cart,
            current_event_id: BASELINE_EVENT_ID.to_string(),
            store,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn current_event_id(&self) -> &str {
        &self.current_event_id
    }

    /// Changes the default event. Existing items keep their own event.
    pub fn select_event(&mut self, event_id: impl Into<String>) {
        self.current_event_id = event_id.into();
    }

    /// Appends a copy of `station_name` held under `event_id`.
    ///
    /// The station is not checked against the catalog here; unknown names are
    /// skipped when the cart is valued.
    pub fn add(&mut self, station_name: impl Into<String>, event_id: impl Into<String>) -> CartItem {
        let item = CartItem {
            id: generate_item_id(),
            station_name: station_name.into(),
            event_id: event_id.into(),
        };
        self.cart.push(item.clone());
        self.sync();
        item
    }

    /// Appends a copy under the current default event.
    pub fn add_with_current_event(&mut self, station_name: impl Into<String>) -> CartItem {
        let event_id = self.current_event_id.clone();
        self.add(station_name, event_id)
    }

    /// Removes the item with `item_id`; unknown ids are ignored.
    pub fn remove(&mut self, item_id: &str) {
        if !self.cart.remove(item_id) {
            log::debug!("[portfolio] remove: no item {item_id:?}");
        }
        self.sync();
    }

    /// Moves an item to another event. Unknown ids leave the cart untouched
    /// and nothing is saved.
    pub fn reassign_event(&mut self, item_id: &str, event_id: impl Into<String>) {
        let Some(item) = self.cart.find_mut(item_id) else {
            log::debug!("[portfolio] reassign: no item {item_id:?}");
            return;
        };
        item.event_id = event_id.into();
        self.sync();
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        self.sync();
    }

    /// A failed save is logged; the in-memory cart stays authoritative.
    fn sync(&self) {
        if let Err(err) = self.store.save(&self.cart) {
            log::error!("[portfolio] Failed to persist cart: {err}");
        }
    }
}
