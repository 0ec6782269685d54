//! Per-list ranking state with generation tagging.
//!
//! A user can switch sort modes faster than the backend answers. Every
//! request takes a ticket from a monotonically increasing counter, and a
//! result is only applied if its ticket is still the latest one issued, so
//! a slow earlier request can never overwrite a newer ordering.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use arabul_core::{SortMode, Supplier};

use crate::ranker::{RankBasis, Ranking, SupplierRanker};

/// Identifies one ranking request within a [`RankSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankTicket {
    pub generation: u64,
    pub mode: SortMode,
}

#[derive(Debug, Default)]
struct Applied {
    generation: u64,
    mode: Option<SortMode>,
    /// Order currently shown; `None` until the first ranking is applied.
    order: Option<Vec<Supplier>>,
}

/// Ranking state for one supplier list, e.g. one result screen.
#[derive(Debug)]
pub struct RankSession {
    ranker: Arc<SupplierRanker>,
    suppliers: Vec<Supplier>,
    latest: AtomicU64,
    applied: Mutex<Applied>,
}

impl RankSession {
    #[must_use]
    pub fn new(ranker: Arc<SupplierRanker>, suppliers: Vec<Supplier>) -> Self {
        Self {
            ranker,
            suppliers,
            latest: AtomicU64::new(0),
            applied: Mutex::new(Applied::default()),
        }
    }

    /// The list as originally received; every ranking starts from it.
    #[must_use]
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Issues a new ticket, superseding every earlier one.
    pub fn begin(&self, mode: SortMode) -> RankTicket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RankTicket { generation, mode }
    }

    #[must_use]
    pub fn is_current(&self, ticket: RankTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.generation
    }

    /// Mode of the most recently applied ranking, if any.
    #[must_use]
    pub fn last_applied(&self) -> Option<SortMode> {
        self.applied
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .mode
    }

    /// The order most recently applied, or the original list if nothing has
    /// been applied yet.
    #[must_use]
    pub fn current_order(&self) -> Vec<Supplier> {
        self.applied
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .clone()
            .unwrap_or_else(|| self.suppliers.clone())
    }

    /// Ranks the original list by `mode`. Returns `None` if another request
    /// was started before this one finished.
    pub async fn rank(&self, mode: SortMode) -> Option<Ranking> {
        let ticket = self.begin(mode);
        let ranking = self.ranker.rank_detailed(&self.suppliers, mode).await;
        self.apply(ticket, ranking)
    }

    /// Accepts `ranking` only if `ticket` is still the latest and newer than
    /// whatever was applied before.
    ///
    /// A ranking with [`RankBasis::Unchanged`] keeps the order currently
    /// shown instead of the original list.
    pub fn apply(&self, ticket: RankTicket, mut ranking: Ranking) -> Option<Ranking> {
        let mut applied = self.applied.lock().unwrap_or_else(PoisonError::into_inner);
        if !self.is_current(ticket) || ticket.generation <= applied.generation {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.latest.load(Ordering::SeqCst),
                mode = %ticket.mode,
                "discarding superseded ranking"
            );
            return None;
        }

        if ranking.basis == RankBasis::Unchanged {
            if let Some(shown) = &applied.order {
                ranking.suppliers.clone_from(shown);
            }
        }

        applied.generation = ticket.generation;
        applied.mode = Some(ticket.mode);
        applied.order = Some(ranking.suppliers.clone());
        Some(ranking)
    }
}
