// src/repositories/repository.rs
//
// Generic document repository - one instantiation per entity collection

use std::marker::PhantomData;
use std::sync::Arc;

use rusqlite::{params, params_from_iter};
use uuid::Uuid;

use super::document::Document;
use super::query;
use crate::db::ConnectionPool;
use crate::dto::{ActionOutput, ListInput, ListOutput, QueryFilters};
use crate::error::{AppError, AppResult};

/// Message of the one in-band storage failure: a write the store did not
/// confirm. Everything worse is an AppError.
pub const MSG_STORAGE_WRITE_FAILED: &str = "Could not save the record";

pub struct Repository<E: Document> {
    pool: Arc<ConnectionPool>,
    _entity: PhantomData<E>,
}

impl<E: Document> Repository<E> {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// Persist a new document under a freshly assigned id.
    /// The caller's value keeps its (empty) id; the generated id comes
    /// back in the output.
    pub fn insert(&self, entity: &E) -> AppResult<ActionOutput> {
        let mut record = entity.clone();
        record.set_id(Uuid::new_v4().to_string());

        let doc = serde_json::to_string(&record)?;
        let conn = self.pool.get()?;
        let affected = conn.execute(
            &format!("INSERT INTO {} (id, doc) VALUES (?1, ?2)", E::COLLECTION),
            params![record.id(), doc],
        )?;

        if affected != 1 {
            log::warn!("insert into {} affected {} rows", E::COLLECTION, affected);
            return Ok(ActionOutput::fail(MSG_STORAGE_WRITE_FAILED));
        }

        Ok(ActionOutput::saved(record.id()))
    }

    /// Full-document replace under the entity's existing id
    pub fn update(&self, entity: &E) -> AppResult<ActionOutput> {
        let doc = serde_json::to_string(entity)?;
        let conn = self.pool.get()?;
        let affected = conn.execute(
            &format!("UPDATE {} SET doc = ?2 WHERE id = ?1", E::COLLECTION),
            params![entity.id(), doc],
        )?;

        if affected != 1 {
            log::warn!(
                "update of {} id {} affected {} rows",
                E::COLLECTION,
                entity.id(),
                affected
            );
            return Ok(ActionOutput::fail(MSG_STORAGE_WRITE_FAILED));
        }

        Ok(ActionOutput::saved(entity.id()))
    }

    /// Insert when the id is still empty, replace otherwise
    pub fn upsert(&self, entity: &E) -> AppResult<ActionOutput> {
        if entity.id().is_empty() {
            self.insert(entity)
        } else {
            self.update(entity)
        }
    }

    /// Delete by id. Deleting an absent id is not an error at this layer;
    /// existence is the validator's concern.
    pub fn remove_by_id(&self, id: &str) -> AppResult<ActionOutput> {
        let conn = self.pool.get()?;
        conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1", E::COLLECTION),
            params![id],
        )?;

        Ok(ActionOutput::ok())
    }

    pub fn remove(&self, entity: &E) -> AppResult<ActionOutput> {
        self.remove_by_id(entity.id())
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Option<E>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("SELECT doc FROM {} WHERE id = ?1", E::COLLECTION))?;

        match stmt.query_row(params![id], |row| row.get::<_, String>(0)) {
            Ok(doc) => Ok(Some(serde_json::from_str(&doc)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    /// First record in ascending-id order
    pub fn find_one(&self) -> AppResult<Option<E>> {
        self.find_one_where(|_| true)
    }

    /// First match in ascending-id order; stops scanning at the first hit
    pub fn find_one_where(&self, predicate: impl Fn(&E) -> bool) -> AppResult<Option<E>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("SELECT doc FROM {} ORDER BY id ASC", E::COLLECTION))?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        for row in rows {
            let entity: E = serde_json::from_str(&row?)?;
            if predicate(&entity) {
                return Ok(Some(entity));
            }
        }

        Ok(None)
    }

    /// All matches in ascending-id order, recomputed per call
    pub fn find_where(&self, predicate: impl Fn(&E) -> bool) -> AppResult<Vec<E>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("SELECT doc FROM {} ORDER BY id ASC", E::COLLECTION))?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut matches = Vec::new();
        for row in rows {
            let entity: E = serde_json::from_str(&row?)?;
            if predicate(&entity) {
                matches.push(entity);
            }
        }

        Ok(matches)
    }

    pub fn find_all(&self) -> AppResult<Vec<E>> {
        self.find_where(|_| true)
    }

    /// Filtered, paginated listing in ascending-id order.
    ///
    /// `total` counts the records matching the filter before skip/limit,
    /// so callers can compute page counts from any page. Without a
    /// paginator the full filtered set comes back.
    pub fn list<F: QueryFilters>(&self, input: Option<&ListInput<F>>) -> AppResult<ListOutput<E>> {
        let conditions = input
            .and_then(|i| i.filters.as_ref())
            .map(|f| f.conditions())
            .unwrap_or_default();
        let (where_sql, where_params) = query::build_where(&conditions);

        let conn = self.pool.get()?;

        let total = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}{}", E::COLLECTION, where_sql),
            params_from_iter(where_params.iter()),
            |row| row.get::<_, i64>(0),
        )? as u64;

        let mut sql = format!("SELECT doc FROM {}{} ORDER BY id ASC", E::COLLECTION, where_sql);
        if let Some(paginator) = input.and_then(|i| i.paginator.as_ref()) {
            let (skip, limit) = query::build_page(paginator);
            sql.push_str(&format!(" LIMIT {} OFFSET {}", limit, skip));
        }

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(where_params.iter()), |row| {
            row.get::<_, String>(0)
        })?;

        let mut items = Vec::new();
        for row in rows {
            items.push(serde_json::from_str(&row?)?);
        }

        Ok(ListOutput::found(items, total))
    }
}
