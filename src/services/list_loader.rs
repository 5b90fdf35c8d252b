// src/services/list_loader.rs
//
// List Loader - paginated, append-only loading for one descriptor at a time
//
// RULES:
// - Exactly one fetch in flight per descriptor lineage
// - Triggers while loading, exhausted or errored are no-ops
// - A response is applied only if its generation is still current;
//   anything older is dropped on arrival
// - The state lock is never held across an await

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{ListPhase, ListState, Page, RequestDescriptor};
use crate::error::AppResult;
use crate::events::{EventBus, ListReset, PageLoadFailed, PageLoaded, StaleResponseDiscarded};
use crate::integrations::GameCatalog;

/// What happened to a load request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page was applied to the list
    Applied { added: usize },
    /// The request failed; the error is recorded in the state
    Failed { message: String },
    /// A newer descriptor took over before the response arrived
    Discarded,
    /// Nothing was requested (guard not satisfied)
    Skipped,
}

struct LoaderInner {
    descriptor: RequestDescriptor,
    generation: u64,
    state: ListState,
}

/// A request that passed the guard and must now be fetched
struct Ticket {
    descriptor: RequestDescriptor,
    generation: u64,
    page: u32,
}

pub struct ListLoader {
    catalog: Arc<dyn GameCatalog>,
    event_bus: Arc<EventBus>,
    page_size: u32,
    inner: Mutex<LoaderInner>,
}

impl ListLoader {
    pub fn new(catalog: Arc<dyn GameCatalog>, event_bus: Arc<EventBus>, page_size: u32) -> Self {
        Self {
            catalog,
            event_bus,
            page_size,
            inner: Mutex::new(LoaderInner {
                descriptor: RequestDescriptor::default(),
                generation: 0,
                state: ListState::default(),
            }),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Snapshot of the current list state
    pub fn state(&self) -> ListState {
        self.lock().state.clone()
    }

    pub fn descriptor(&self) -> RequestDescriptor {
        self.lock().descriptor.clone()
    }

    /// Switch to a new descriptor and load its first page
    ///
    /// The list is emptied before the request goes out. Whatever is still
    /// in flight for the previous descriptor will be discarded.
    pub async fn start(&self, descriptor: RequestDescriptor) -> LoadOutcome {
        match self.begin_initial(Some(descriptor)) {
            Some(ticket) => self.run_initial(ticket).await,
            None => LoadOutcome::Skipped,
        }
    }

    /// Reload the first page of the current descriptor after a failure
    pub async fn retry(&self) -> LoadOutcome {
        match self.begin_initial(None) {
            Some(ticket) => self.run_initial(ticket).await,
            None => LoadOutcome::Skipped,
        }
    }

    /// Request the next page if the list is ready for one
    pub async fn load_more(&self) -> LoadOutcome {
        let ticket = {
            let mut inner = self.lock();
            if !inner.state.can_load_more() {
                log::trace!(
                    "Load more ignored (phase {:?}, has_more {})",
                    inner.state.phase,
                    inner.state.has_more
                );
                return LoadOutcome::Skipped;
            }
            let page = inner.state.begin_more();
            Ticket {
                descriptor: inner.descriptor.clone(),
                generation: inner.generation,
                page,
            }
        };

        let result = self.fetch(&ticket).await;
        self.apply(ticket, result)
    }

    /// Reset the list and open a new generation
    ///
    /// With a descriptor this always succeeds. Without one it is a retry
    /// and only proceeds from `Errored`.
    fn begin_initial(&self, descriptor: Option<RequestDescriptor>) -> Option<Ticket> {
        let (ticket, query) = {
            let mut inner = self.lock();
            match descriptor {
                Some(descriptor) => inner.descriptor = descriptor,
                None if inner.state.phase != ListPhase::Errored => {
                    log::debug!("Retry ignored in phase {:?}", inner.state.phase);
                    return None;
                }
                None => {}
            }
            inner.generation += 1;
            inner.state.begin_initial();
            let ticket = Ticket {
                descriptor: inner.descriptor.clone(),
                generation: inner.generation,
                page: 1,
            };
            (ticket, inner.descriptor.query.clone())
        };
        self.event_bus.emit(ListReset::new(ticket.generation, query));
        Some(ticket)
    }

    async fn run_initial(&self, ticket: Ticket) -> LoadOutcome {
        let result = self.fetch(&ticket).await;
        self.apply(ticket, result)
    }

    async fn fetch(&self, ticket: &Ticket) -> AppResult<Page> {
        self.catalog
            .list_games(&ticket.descriptor, ticket.page, self.page_size)
            .await
    }

    /// Apply a response if its generation is still current
    ///
    /// Events go out after the lock is released so handlers may read
    /// the loader.
    fn apply(&self, ticket: Ticket, result: AppResult<Page>) -> LoadOutcome {
        let initial = ticket.page == 1;
        let mut inner = self.lock();

        if inner.generation != ticket.generation {
            let current = inner.generation;
            drop(inner);
            log::debug!(
                "Discarding page {} of generation {} (current {})",
                ticket.page,
                ticket.generation,
                current
            );
            self.event_bus
                .emit(StaleResponseDiscarded::new("list", ticket.generation, current));
            return LoadOutcome::Discarded;
        }

        match result {
            Ok(page) => {
                let added = page.items.len();
                if initial {
                    inner.state.apply_first_page(page);
                } else {
                    inner.state.apply_next_page(ticket.page, page);
                }
                let has_more = inner.state.has_more;
                drop(inner);

                self.event_bus
                    .emit(PageLoaded::new(ticket.generation, ticket.page, added, has_more));
                LoadOutcome::Applied { added }
            }
            Err(e) => {
                let message = e.to_string();
                if initial {
                    inner.state.fail_initial(message.clone());
                } else {
                    inner.state.fail_more(message.clone());
                }
                drop(inner);

                if initial {
                    log::error!("Loading first page failed: {}", message);
                } else {
                    log::warn!("Loading page {} failed: {}", ticket.page, message);
                }
                self.event_bus
                    .emit(PageLoadFailed::new(ticket.generation, ticket.page, message.clone()));
                LoadOutcome::Failed { message }
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, LoaderInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
