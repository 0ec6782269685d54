//! In-memory collaborators and fixtures for ranker tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use arabul_core::{
    AggregationError, PopularityAggregate, PopularityAggregation, RatingAggregate,
    RatingAggregation, Supplier,
};
use async_trait::async_trait;

pub(crate) fn supplier(id: &str, distance_km: Option<f64>) -> Supplier {
    Supplier {
        id: id.to_string(),
        name: format!("Supplier {id}"),
        address: String::new(),
        city: "Ankara".to_string(),
        region: String::new(),
        phone_number: String::new(),
        contact_person: None,
        distance_km,
        duration: None,
        latitude: None,
        longitude: None,
        created_at: None,
    }
}

pub(crate) fn ids(suppliers: &[Supplier]) -> Vec<&str> {
    suppliers.iter().map(|s| s.id.as_str()).collect()
}

pub(crate) fn rating(id: &str, average_rating: f64) -> RatingAggregate {
    RatingAggregate {
        supplier_id: id.to_string(),
        average_rating,
        count: 1,
    }
}

pub(crate) fn favorites(id: &str, favorite_count: u64) -> PopularityAggregate {
    PopularityAggregate {
        supplier_id: id.to_string(),
        favorite_count,
    }
}

/// Scripted response of a stub collaborator.
#[derive(Debug, Clone)]
pub(crate) enum Reply<T> {
    Data(Vec<T>),
    Fail,
    Malformed,
    /// Sleeps before answering with the data.
    Delayed(Duration, Vec<T>),
}

/// Collaborator stub that records every batch of ids it is asked for.
#[derive(Debug)]
pub(crate) struct Stub<T> {
    reply: Reply<T>,
    calls: AtomicUsize,
    requested: Mutex<Vec<Vec<String>>>,
}

impl<T: Clone> Stub<T> {
    pub(crate) fn new(reply: Reply<T>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn requested(&self) -> Vec<Vec<String>> {
        self.requested.lock().unwrap().clone()
    }

    async fn respond(&self, supplier_ids: &[String]) -> Result<Vec<T>, AggregationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(supplier_ids.to_vec());
        match &self.reply {
            Reply::Data(data) => Ok(data.clone()),
            Reply::Fail => Err(AggregationError::Request("connection refused".into())),
            Reply::Malformed => Err(AggregationError::Malformed("expected array".to_string())),
            Reply::Delayed(delay, data) => {
                tokio::time::sleep(*delay).await;
                Ok(data.clone())
            }
        }
    }
}

#[async_trait]
impl RatingAggregation for Stub<RatingAggregate> {
    async fn bulk_ratings(
        &self,
        supplier_ids: &[String],
    ) -> Result<Vec<RatingAggregate>, AggregationError> {
        self.respond(supplier_ids).await
    }
}

#[async_trait]
impl PopularityAggregation for Stub<PopularityAggregate> {
    async fn favorite_counts(
        &self,
        supplier_ids: &[String],
    ) -> Result<Vec<PopularityAggregate>, AggregationError> {
        self.respond(supplier_ids).await
    }
}
