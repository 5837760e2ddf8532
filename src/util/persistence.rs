//! Load/save of the cart snapshot.

use std::{
    cell::RefCell,
    collections::HashMap,
    fs, io,
    path::PathBuf,
    rc::Rc,
};

use serde_json::Error as SerdeError;

use crate::{config::StoreConfig, domain::entities::Cart};

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

/// Durable home of the cart.
///
/// `load` never fails: a missing or unreadable snapshot is an empty cart.
pub trait CartStore {
    fn load(&self) -> Cart;
    fn save(&self, cart: &Cart) -> Result<(), PersistSaveError>;
}

fn decode(source: &str, data: &str) -> Cart {
    match serde_json::from_str(data) {
        Ok(cart) => cart,
        Err(err) => {
            log::warn!("[persistence] Discarding unreadable cart from {source}: {err}");
            Cart::new()
        }
    }
}

/// Stores the cart as JSON in `<data_dir>/<storage_key>.json`.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    config: StoreConfig,
}

impl JsonFileStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.config.data_file()
    }
}

impl CartStore for JsonFileStore {
    fn load(&self) -> Cart {
        let Some(path) = self.path() else {
            log::warn!("[persistence] No storage directory, starting with an empty cart");
            return Cart::new();
        };

        match fs::read_to_string(&path) {
            Ok(data) => {
                let cart = decode(&path.display().to_string(), &data);
                log::debug!(
                    "[persistence] Loaded {} cart items from {}",
                    cart.len(),
                    path.display()
                );
                cart
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("[persistence] No saved cart at {}", path.display());
                Cart::new()
            }
            Err(err) => {
                log::warn!("[persistence] Failed to read {}: {err}", path.display());
                Cart::new()
            }
        }
    }

    fn save(&self, cart: &Cart) -> Result<(), PersistSaveError> {
        let path = self.path().ok_or(PersistSaveError::StorageUnavailable)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(cart)?;
        fs::write(&path, json)?;
        log::debug!(
            "[persistence] Saved {} cart items to {}",
            cart.len(),
            path.display()
        );
        Ok(())
    }
}

/// Key-value store kept in memory, shared between clones.
///
/// Mirrors browser-style local storage: values are serialized text under a key.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    key: String,
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            key: config.storage_key.clone(),
            entries: Rc::default(),
        }
    }

    /// Raw stored text, if any.
    pub fn raw(&self) -> Option<String> {
        self.entries.borrow().get(&self.key).cloned()
    }

    pub fn set_raw(&self, value: impl Into<String>) {
        self.entries.borrow_mut().insert(self.key.clone(), value.into());
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}

impl CartStore for MemoryStore {
    fn load(&self) -> Cart {
        self.raw()
            .map(|data| decode("memory", &data))
            .unwrap_or_default()
    }

    fn save(&self, cart: &Cart) -> Result<(), PersistSaveError> {
        let json = serde_json::to_string(cart)?;
        self.set_raw(json);
        Ok(())
    }
}
