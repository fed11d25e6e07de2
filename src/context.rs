//! Application Context
//!
//! Backend gateways shared via the Leptos Context API, and the refresh slot
//! the page uses to let a form ask the item table to reload.

use std::sync::{Arc, Mutex, PoisonError};

use crate::api::{ApiClient, InsumoGateway, ReceitaGateway};

/// Gateways provided to every component
#[derive(Clone)]
pub struct AppContext {
    pub insumos: Arc<dyn InsumoGateway>,
    pub receitas: Arc<dyn ReceitaGateway>,
}

impl AppContext {
    pub fn new(client: ApiClient) -> Self {
        let client = Arc::new(client);
        Self {
            insumos: client.clone(),
            receitas: client,
        }
    }
}

/// A registered refetch function
pub type RefreshFn = Arc<dyn Fn() + Send + Sync>;

/// Holds at most one refresh target.
#[derive(Clone, Default)]
pub struct RefreshSlot {
    target: Arc<Mutex<Option<RefreshFn>>>,
}

impl RefreshSlot {
    /// Register `target`, replacing any earlier one. Returns true if one was replaced.
    pub fn register(&self, target: RefreshFn) -> bool {
        let mut slot = self.target.lock().unwrap_or_else(PoisonError::into_inner);
        slot.replace(target).is_some()
    }

    /// Run the registered target. Returns false when nothing is registered.
    pub fn notify(&self) -> bool {
        // Lock released before running so the target may re-register.
        let target = self
            .target
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match target {
            Some(refresh) => {
                refresh();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, RefreshFn) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let refresh: RefreshFn = Arc::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (count, refresh)
    }

    #[test]
    fn test_notify_without_target() {
        let slot = RefreshSlot::default();
        assert!(!slot.notify());
    }

    #[test]
    fn test_notify_runs_target_once() {
        let slot = RefreshSlot::default();
        let (count, refresh) = counter();
        assert!(!slot.register(refresh));
        assert!(slot.notify());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_register_replaces_previous_target() {
        let slot = RefreshSlot::default();
        let (first, first_fn) = counter();
        let (second, second_fn) = counter();
        slot.register(first_fn);
        assert!(slot.register(second_fn));

        slot.clone().notify();
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }
}
