//! Typed content retrieval over a [`ContentStore`].

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{ContentItem, ContentType, ListOrder, Relation, RelationDepth};
use crate::domain::normalize::normalize_object;
use crate::domain::repositories::{ContentStore, ObjectQuery, StoreError};
use crate::error::{ContentError, Operation};

/// Read-through façade over the content store.
///
/// Each operation issues exactly one store call, normalizes the result, and
/// applies the type's list order. A store-side not-found becomes an empty list
/// or `None`; every other store failure becomes [`ContentError::FetchFailure`].
///
/// Relation depth is resolved per type: [`ContentType::default_depth`] unless
/// overridden with [`ContentRepository::with_depth`].
pub struct ContentRepository<S: ContentStore + ?Sized> {
    store: Arc<S>,
    depth_overrides: HashMap<ContentType, RelationDepth>,
}

impl<S: ContentStore + ?Sized> ContentRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            depth_overrides: HashMap::new(),
        }
    }

    /// Overrides the relation depth requested for one content type.
    pub fn with_depth(mut self, content_type: ContentType, depth: RelationDepth) -> Self {
        self.depth_overrides.insert(content_type, depth);
        self
    }

    pub fn depth_for(&self, content_type: ContentType) -> RelationDepth {
        self.depth_overrides
            .get(&content_type)
            .copied()
            .unwrap_or_else(|| content_type.default_depth())
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Lists every item of a type.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::FetchFailure`] on any store failure other than
    /// not-found.
    pub async fn list_all(&self, content_type: ContentType) -> Result<Vec<ContentItem>, ContentError> {
        let query = ObjectQuery::all(content_type, self.depth_for(content_type));
        self.collect(Operation::ListAll, query).await
    }

    /// Looks up one item by slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(item))` if found
    /// - `Ok(None)` if the store has no such slug
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidRequest`] for an empty slug and
    /// [`ContentError::FetchFailure`] on other store failures.
    pub async fn get_one(
        &self,
        content_type: ContentType,
        slug: &str,
    ) -> Result<Option<ContentItem>, ContentError> {
        if slug.trim().is_empty() {
            return Err(ContentError::InvalidRequest(
                "slug must not be empty".to_string(),
            ));
        }

        let depth = self.depth_for(content_type);
        let query = ObjectQuery::by_slug(content_type, slug, depth);

        let raw = match self.store.find_one(&query).await {
            Ok(raw) => raw,
            Err(e) if e.is_not_found() => {
                debug!(content_type = %content_type, slug, "No item with slug");
                record(Operation::GetOne, content_type, "absent");
                return Ok(None);
            }
            Err(e) => return Err(self.failure(Operation::GetOne, content_type, e)),
        };

        let item = normalize_object(raw, content_type, depth).map_err(|e| {
            self.failure(
                Operation::GetOne,
                content_type,
                StoreError::Decode(e.to_string()),
            )
        })?;

        record(Operation::GetOne, content_type, "found");
        Ok(Some(item))
    }

    /// Lists items of a type whose `relation` field references `related_id`.
    ///
    /// Relations are expanded at least one level deep. An id that matches
    /// nothing yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidRequest`] if the type does not declare
    /// `relation`, and [`ContentError::FetchFailure`] on other store failures.
    pub async fn list_by_relation(
        &self,
        content_type: ContentType,
        relation: Relation,
        related_id: &str,
    ) -> Result<Vec<ContentItem>, ContentError> {
        if !content_type.declares(relation) {
            return Err(ContentError::InvalidRequest(format!(
                "{content_type} has no {relation} relation"
            )));
        }

        let depth = self.depth_for(content_type).max(RelationDepth::ONE);
        let query = ObjectQuery::by_relation(content_type, relation, related_id, depth);
        self.collect(Operation::ListByRelation, query).await
    }

    async fn collect(
        &self,
        operation: Operation,
        query: ObjectQuery,
    ) -> Result<Vec<ContentItem>, ContentError> {
        let content_type = query.content_type;

        let page = match self.store.find(&query).await {
            Ok(page) => page,
            Err(e) if e.is_not_found() => {
                debug!(content_type = %content_type, %operation, "Store reported no items");
                record(operation, content_type, "empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.failure(operation, content_type, e)),
        };

        let received = page.objects.len();
        let mut items = page
            .objects
            .into_iter()
            .filter(|raw| query.matches(raw))
            .map(|raw| normalize_object(raw, content_type, query.depth))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                self.failure(operation, content_type, StoreError::Decode(e.to_string()))
            })?;

        // Every returned item must still carry the filtered relation after
        // normalization.
        if let Some(ref filter) = query.relation {
            items.retain(|item| {
                item.related_id(filter.relation) == Some(filter.related_id.as_str())
            });
        }

        if items.len() != received {
            debug!(
                content_type = %content_type,
                %operation,
                dropped = received - items.len(),
                "Discarded objects outside the query"
            );
        }

        apply_order(&mut items, content_type.list_order());
        record(operation, content_type, "ok");
        Ok(items)
    }

    fn failure(&self, operation: Operation, content_type: ContentType, e: StoreError) -> ContentError {
        warn!(
            content_type = %content_type,
            %operation,
            backend = self.store.backend_name(),
            code = e.code(),
            "Content fetch failed: {}",
            e
        );
        record(operation, content_type, "failure");
        ContentError::fetch(operation, content_type, e)
    }
}

/// Sorts in place; `sort_by` is stable, so ties keep store order.
fn apply_order(items: &mut [ContentItem], order: ListOrder) {
    match order {
        ListOrder::StoreDefault => {}
        ListOrder::AscendingBy(field) => items.sort_by(|a, b| {
            let a = a.number(field).unwrap_or(0.0);
            let b = b.number(field).unwrap_or(0.0);
            a.total_cmp(&b)
        }),
    }
}

fn record(operation: Operation, content_type: ContentType, outcome: &'static str) {
    metrics::counter!(
        "content_fetch_total",
        "operation" => operation.as_str(),
        "content_type" => content_type.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}
