//! Display mode store
//!
//! ThemeStore is the only piece of mutable state in the theme system. It is
//! an explicit object: callers construct it with a persistence backend and
//! pass it to whatever needs it.
//!
//! - The mode is read from storage once, at construction
//! - `toggle`/`set_mode` write through to storage and notify subscribers
//!   synchronously before returning
//! - Storage failures never block a mode change

use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

use rustc_hash::FxHashMap;

use crate::mode::Mode;
use crate::storage::{ModeStorage, STORAGE_KEY};

/// Callback invoked with the new mode after every change
pub type Listener = Arc<dyn Fn(Mode) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: FxHashMap<u64, Listener>,
}

type SharedListeners = Arc<Mutex<Listeners>>;

/// Current display mode plus persistence and subscribers
pub struct ThemeStore {
    mode: RwLock<Mode>,
    storage: Box<dyn ModeStorage>,
    listeners: SharedListeners,
}

impl ThemeStore {
    /// Create a store, restoring the last persisted mode.
    ///
    /// Missing, invalid or unreadable values start in [`Mode::Dark`].
    pub fn new(storage: impl ModeStorage + 'static) -> Self {
        Self::with_storage(Box::new(storage))
    }

    /// Create a store from an already boxed backend
    pub fn with_storage(storage: Box<dyn ModeStorage>) -> Self {
        let stored = match storage.read(STORAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("Could not read persisted theme, using dark: {}", err);
                None
            }
        };
        let mode = Mode::from_stored(stored.as_deref());
        tracing::debug!("ThemeStore::new - initial mode {:?} (stored {:?})", mode, stored);

        Self {
            mode: RwLock::new(mode),
            storage,
            listeners: SharedListeners::default(),
        }
    }

    /// Get the current mode
    pub fn mode(&self) -> Mode {
        *self.mode.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Flip between dark and light, returning the new mode
    pub fn toggle(&self) -> Mode {
        let (next, snapshot) = {
            let mut current = self.mode.write().unwrap_or_else(PoisonError::into_inner);
            *current = current.toggle();
            (*current, self.persist(*current))
        };
        Self::notify(next, snapshot);
        next
    }

    /// Switch to a specific mode.
    ///
    /// Setting the mode that is already active does nothing: no write, no
    /// notification.
    pub fn set_mode(&self, mode: Mode) -> Mode {
        let snapshot = {
            let mut current = self.mode.write().unwrap_or_else(PoisonError::into_inner);
            if *current == mode {
                return mode;
            }
            *current = mode;
            self.persist(mode)
        };
        Self::notify(mode, snapshot);
        mode
    }

    /// Register a listener called once per mode change.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped. Invocation order across listeners is unspecified.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Mode) + Send + Sync + 'static,
    {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.insert(id, Arc::new(listener));

        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    /// Save the new mode and snapshot the listeners.
    ///
    /// Called with the mode write lock held, so concurrent changes are saved
    /// in the order they were made.
    fn persist(&self, mode: Mode) -> Vec<Listener> {
        tracing::debug!("ThemeStore - switched to {:?}", mode);

        if let Err(err) = self.storage.write(STORAGE_KEY, mode.as_str()) {
            tracing::warn!("Could not persist theme {:?}: {}", mode, err);
        }

        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .values()
            .cloned()
            .collect()
    }

    /// Listeners run outside the mode lock so they may read the store or
    /// subscribe again.
    fn notify(mode: Mode, snapshot: Vec<Listener>) {
        tracing::trace!("ThemeStore - notifying {} listeners", snapshot.len());
        for listener in snapshot {
            listener(mode);
        }
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Scoped listener registration
///
/// Dropping the handle removes the listener.
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl Subscription {
    /// Remove the listener now
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .entries
                .remove(&self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
