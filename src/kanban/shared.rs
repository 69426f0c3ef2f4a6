//! Thread-safe handle over a [`KanbanApi`].
//!
//! Every operation holds one mutex for its whole duration, so no caller ever observes
//! another operation half-applied. Operations are short and never block, which is why
//! there is a single lock and no read/write split.

use std::sync::{Arc, Mutex, PoisonError};

use crate::api::{CardFilter, CardPatch, CmdResult, KanbanApi, NewCard, StatusChange};
use crate::error::Result;
use crate::store::CardStore;

pub struct SharedKanban<S: CardStore> {
    inner: Arc<Mutex<KanbanApi<S>>>,
}

impl<S: CardStore> Clone for SharedKanban<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: CardStore> SharedKanban<S> {
    pub fn new(api: KanbanApi<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(api)),
        }
    }

    /// Runs `f` with exclusive access to the api.
    ///
    /// A panic in another holder poisons the mutex; the store itself is never left
    /// half-written by a command, so the guard is recovered and used as is.
    pub fn with<R>(&self, f: impl FnOnce(&mut KanbanApi<S>) -> R) -> R {
        let mut api = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *api)
    }

    pub fn list_cards(&self, filter: CardFilter) -> Result<CmdResult> {
        self.with(|api| api.list_cards(filter))
    }

    pub fn get_card(&self, id: &str) -> Result<CmdResult> {
        self.with(|api| api.get_card(id))
    }

    pub fn create_card(&self, new_card: NewCard) -> Result<CmdResult> {
        self.with(|api| api.create_card(new_card))
    }

    pub fn update_card(&self, id: &str, patch: &CardPatch) -> Result<CmdResult> {
        self.with(|api| api.update_card(id, patch))
    }

    pub fn delete_card(&self, id: &str) -> Result<CmdResult> {
        self.with(|api| api.delete_card(id))
    }

    pub fn batch_update_status(&self, changes: &[StatusChange]) -> Result<CmdResult> {
        self.with(|api| api.batch_update_status(changes))
    }
}
