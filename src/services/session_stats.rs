// src/services/session_stats.rs
//
// Session Statistics - activity counters fed by domain events
//
// RULES:
// - Counters only move in event handlers
// - Nothing here is persisted; counts start at zero every launch

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::events::{
    DetailLoaded, EventBus, FavoriteToggled, PageLoadFailed, PageLoaded, StaleResponseDiscarded,
};

#[derive(Debug, Default)]
struct Counters {
    pages_loaded: AtomicU64,
    games_loaded: AtomicU64,
    load_failures: AtomicU64,
    stale_discarded: AtomicU64,
    favorites_toggled: AtomicU64,
    details_opened: AtomicU64,
    detail_section_failures: AtomicU64,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionStatsSnapshot {
    pub pages_loaded: u64,
    pub games_loaded: u64,
    pub load_failures: u64,
    pub stale_discarded: u64,
    pub favorites_toggled: u64,
    pub details_opened: u64,
    pub detail_section_failures: u64,
}

pub struct SessionStats {
    counters: Arc<Counters>,
    event_bus: Arc<EventBus>,
}

impl SessionStats {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self {
            counters: Arc::new(Counters::default()),
            event_bus,
        }
    }

    /// Subscribe the counters to the bus. Call once at startup.
    pub fn register_event_handlers(&self) {
        let counters = Arc::clone(&self.counters);
        self.event_bus.subscribe::<PageLoaded, _>(move |event| {
            counters.pages_loaded.fetch_add(1, Ordering::Relaxed);
            counters
                .games_loaded
                .fetch_add(event.item_count as u64, Ordering::Relaxed);
        });

        let counters = Arc::clone(&self.counters);
        self.event_bus.subscribe::<PageLoadFailed, _>(move |_| {
            counters.load_failures.fetch_add(1, Ordering::Relaxed);
        });

        let counters = Arc::clone(&self.counters);
        self.event_bus
            .subscribe::<StaleResponseDiscarded, _>(move |event| {
                log::trace!("Stale {} response discarded", event.source);
                counters.stale_discarded.fetch_add(1, Ordering::Relaxed);
            });

        let counters = Arc::clone(&self.counters);
        self.event_bus.subscribe::<FavoriteToggled, _>(move |_| {
            counters.favorites_toggled.fetch_add(1, Ordering::Relaxed);
        });

        let counters = Arc::clone(&self.counters);
        self.event_bus.subscribe::<DetailLoaded, _>(move |event| {
            counters.details_opened.fetch_add(1, Ordering::Relaxed);
            counters
                .detail_section_failures
                .fetch_add(event.failed_sections as u64, Ordering::Relaxed);
        });

        log::debug!("Session statistics handlers registered");
    }

    pub fn snapshot(&self) -> SessionStatsSnapshot {
        let c = &self.counters;
        SessionStatsSnapshot {
            pages_loaded: c.pages_loaded.load(Ordering::Relaxed),
            games_loaded: c.games_loaded.load(Ordering::Relaxed),
            load_failures: c.load_failures.load(Ordering::Relaxed),
            stale_discarded: c.stale_discarded.load(Ordering::Relaxed),
            favorites_toggled: c.favorites_toggled.load(Ordering::Relaxed),
            details_opened: c.details_opened.load(Ordering::Relaxed),
            detail_section_failures: c.detail_section_failures.load(Ordering::Relaxed),
        }
    }
}
