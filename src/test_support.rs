//! In-memory question source for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::board_engine::{
    error::{BoardError, Result},
    models::CategoryId,
};
use crate::source::{QuestionSource, RawCategory, RawClue};

#[derive(Default)]
pub(crate) struct StaticSource {
    categories: HashMap<CategoryId, RawCategory>,
    order: Vec<CategoryId>,
    failing: Vec<CategoryId>,
    listing_gate: Mutex<Option<Arc<Notify>>>,
    fetched: Mutex<Vec<CategoryId>>,
    listing_requests: Mutex<Vec<usize>>,
}

impl StaticSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Categories `1..=count`, each with `clues` clues named `c{id} q{n}` / `c{id} a{n}`.
    pub(crate) fn generated(count: CategoryId, clues: usize) -> Self {
        let mut source = Self::new();
        for id in 1..=count {
            let raw = (0..clues)
                .map(|n| RawClue {
                    question: format!("c{id} q{n}"),
                    answer: format!("c{id} a{n}"),
                })
                .collect();
            source = source.with_category(id, format!("category {id}"), raw);
        }
        source
    }

    pub(crate) fn with_category(
        mut self,
        id: CategoryId,
        title: impl Into<String>,
        clues: Vec<RawClue>,
    ) -> Self {
        self.order.push(id);
        self.categories.insert(id, RawCategory { title: title.into(), clues });
        self
    }

    pub(crate) fn failing_on(mut self, ids: &[CategoryId]) -> Self {
        self.failing.extend_from_slice(ids);
        self
    }

    /// The next listing call waits until `gate` is notified.
    pub(crate) fn hold_next_listing(&self, gate: Arc<Notify>) {
        *self.listing_gate.lock().unwrap() = Some(gate);
    }

    pub(crate) fn fetched(&self) -> Vec<CategoryId> {
        self.fetched.lock().unwrap().clone()
    }

    pub(crate) fn listing_requests(&self) -> Vec<usize> {
        self.listing_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionSource for StaticSource {
    async fn list_category_ids(&self, min_count: usize) -> Result<Vec<CategoryId>> {
        self.listing_requests.lock().unwrap().push(min_count);
        let gate = self.listing_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        Ok(self.order.clone())
    }

    async fn fetch_category(&self, id: CategoryId) -> Result<RawCategory> {
        self.fetched.lock().unwrap().push(id);
        if self.failing.contains(&id) {
            return Err(BoardError::SourceUnavailable(format!("category {id} offline")));
        }
        self.categories.get(&id).cloned().ok_or(BoardError::NotFound(id))
    }
}
