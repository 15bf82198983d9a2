//! Insert-only valuation record repository.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::StoreError;
use worthwell_core::input::ValuationInput;
use worthwell_core::valuation::ValuationResult;
use worthwell_shared::types::{PageRequest, PageResponse, ValuationId};

/// One persisted valuation: the input snapshot and its computed result.
///
/// Records are insert-only. A new questionnaire submission creates a new
/// record; existing records are never mutated, which is what makes the
/// dashboard's history and comparison features trustworthy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRecord {
    /// Record ID, time-ordered.
    pub id: ValuationId,
    /// When the record was stored.
    pub created_at: DateTime<Utc>,
    /// The normalized input snapshot.
    pub input: ValuationInput,
    /// The computed result.
    pub result: ValuationResult,
}

/// Repository for valuation records.
#[derive(Debug, Clone, Default)]
pub struct ValuationRepository {
    records: Arc<DashMap<Uuid, ValuationRecord>>,
}

impl ValuationRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new valuation, returning the created record.
    ///
    /// The insert completes before the method returns, so a caller that
    /// awaits it can rely on the record being visible to subsequent reads.
    /// Submissions within one workflow stay strictly sequential.
    pub async fn insert(
        &self,
        input: ValuationInput,
        result: ValuationResult,
    ) -> ValuationRecord {
        let record = ValuationRecord {
            id: ValuationId::new(),
            created_at: Utc::now(),
            input,
            result,
        };

        self.records.insert(record.id.into_inner(), record.clone());
        record
    }

    /// Loads one record by ID.
    pub async fn get(&self, id: ValuationId) -> Result<ValuationRecord, StoreError> {
        self.records
            .get(&id.into_inner())
            .map(|entry| entry.clone())
            .ok_or(StoreError::NotFound(id))
    }

    /// Lists records, most recent first.
    pub async fn list(&self, page: &PageRequest) -> PageResponse<ValuationRecord> {
        let mut records: Vec<ValuationRecord> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.into_inner().cmp(&a.id.into_inner())));

        let total = records.len() as u64;
        let data: Vec<ValuationRecord> = records
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .collect();

        PageResponse::new(data, page.page, page.per_page, total)
    }

    /// Number of stored records.
    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }
}
