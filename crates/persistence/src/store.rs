//! Generic entity store.
//!
//! Every collection shares one CRUD implementation; there is no per-table
//! query code. Two conventions drive it:
//!
//! - **Order spec**: a column name, prefixed with `-` for descending
//!   (`"-created_at"` is newest first, `"company_name"` is A to Z).
//! - **Criteria**: column/value pairs combined with AND; a null value
//!   compiles to `IS NULL`, anything else to an equality predicate.
//!
//! Identifiers (column names, order columns) are validated before any SQL
//! is built; values are always bound, never interpolated.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use thiserror::Error;
use uuid::Uuid;

use shared::validation::is_identifier;

use crate::metrics::QueryTimer;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A column or order identifier failed validation.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// An update was issued with no fields to set.
    #[error("Update document has no fields")]
    EmptyDocument,

    /// The backing store reported a failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// A database row type tied to its collection.
pub trait Row: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    /// Collection (table) name.
    const TABLE: &'static str;
}

/// A value bound into a generated statement, carrying its SQL type.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
    Uuid(Uuid),
    /// Bound as JSONB; used for structured sub-records (tags, navigation
    /// items, external tools).
    Json(JsonValue),
}

impl From<bool> for BindValue {
    fn from(v: bool) -> Self {
        BindValue::Bool(v)
    }
}

impl From<i32> for BindValue {
    fn from(v: i32) -> Self {
        BindValue::Int(v as i64)
    }
}

impl From<i64> for BindValue {
    fn from(v: i64) -> Self {
        BindValue::Int(v)
    }
}

impl From<f64> for BindValue {
    fn from(v: f64) -> Self {
        BindValue::Float(v)
    }
}

impl From<&str> for BindValue {
    fn from(v: &str) -> Self {
        BindValue::Text(v.to_string())
    }
}

impl From<String> for BindValue {
    fn from(v: String) -> Self {
        BindValue::Text(v)
    }
}

impl From<DateTime<Utc>> for BindValue {
    fn from(v: DateTime<Utc>) -> Self {
        BindValue::Timestamp(v)
    }
}

impl From<Uuid> for BindValue {
    fn from(v: Uuid) -> Self {
        BindValue::Uuid(v)
    }
}

impl From<JsonValue> for BindValue {
    fn from(v: JsonValue) -> Self {
        BindValue::Json(v)
    }
}

impl<T: Into<BindValue>> From<Option<T>> for BindValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => BindValue::Null,
        }
    }
}

/// Column values for a create or update call.
#[derive(Debug, Clone, Default)]
pub struct Document {
    fields: Vec<(String, BindValue)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column value; later sets of the same column win.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<BindValue>) -> Self {
        let column = column.into();
        self.fields.retain(|(existing, _)| *existing != column);
        self.fields.push((column, value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BindValue)> {
        self.fields.iter().map(|(c, v)| (c.as_str(), v))
    }
}

/// Equality/null filter applied as a conjunction across columns.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    fields: Vec<(String, BindValue)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a predicate: `BindValue::Null` matches `IS NULL`, anything
    /// else matches equality.
    pub fn field(mut self, column: impl Into<String>, value: impl Into<BindValue>) -> Self {
        self.fields.push((column.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BindValue)> {
        self.fields.iter().map(|(c, v)| (c.as_str(), v))
    }
}

/// Parsed order convention: `-column` sorts descending, a bare column
/// name ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpec {
    column: String,
    descending: bool,
}

impl OrderSpec {
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        let (column, descending) = match raw.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (raw, false),
        };
        if !is_identifier(column) {
            return Err(StoreError::InvalidIdentifier(column.to_string()));
        }
        Ok(Self {
            column: column.to_string(),
            descending,
        })
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }

    fn push_onto(&self, qb: &mut QueryBuilder<'static, Postgres>) {
        qb.push(" ORDER BY ");
        qb.push(&self.column);
        qb.push(if self.descending { " DESC" } else { " ASC" });
    }
}

fn ensure_identifier(column: &str) -> Result<(), StoreError> {
    if is_identifier(column) {
        Ok(())
    } else {
        Err(StoreError::InvalidIdentifier(column.to_string()))
    }
}

fn push_bound(qb: &mut QueryBuilder<'static, Postgres>, value: &BindValue) {
    match value {
        BindValue::Null => {
            qb.push("NULL");
        }
        BindValue::Bool(v) => {
            qb.push_bind(*v);
        }
        BindValue::Int(v) => {
            qb.push_bind(*v);
        }
        BindValue::Float(v) => {
            qb.push_bind(*v);
        }
        BindValue::Text(v) => {
            qb.push_bind(v.clone());
        }
        BindValue::Timestamp(v) => {
            qb.push_bind(*v);
        }
        BindValue::Uuid(v) => {
            qb.push_bind(*v);
        }
        BindValue::Json(v) => {
            qb.push_bind(sqlx::types::Json(v.clone()));
        }
    }
}

fn push_where(
    qb: &mut QueryBuilder<'static, Postgres>,
    criteria: &Criteria,
) -> Result<(), StoreError> {
    if criteria.is_empty() {
        return Ok(());
    }
    qb.push(" WHERE ");
    for (i, (column, value)) in criteria.iter().enumerate() {
        ensure_identifier(column)?;
        if i > 0 {
            qb.push(" AND ");
        }
        qb.push(column);
        match value {
            BindValue::Null => {
                qb.push(" IS NULL");
            }
            other => {
                qb.push(" = ");
                push_bound(qb, other);
            }
        }
    }
    Ok(())
}

fn select_query(
    table: &str,
    criteria: &Criteria,
    order: Option<&OrderSpec>,
) -> Result<QueryBuilder<'static, Postgres>, StoreError> {
    let mut qb = QueryBuilder::new(format!("SELECT * FROM {}", table));
    push_where(&mut qb, criteria)?;
    if let Some(order) = order {
        order.push_onto(&mut qb);
    }
    Ok(qb)
}

fn insert_query(
    table: &str,
    values: &Document,
) -> Result<QueryBuilder<'static, Postgres>, StoreError> {
    let mut qb = QueryBuilder::new(format!("INSERT INTO {}", table));
    if values.is_empty() {
        qb.push(" DEFAULT VALUES");
    } else {
        qb.push(" (");
        for (i, (column, _)) in values.iter().enumerate() {
            ensure_identifier(column)?;
            if i > 0 {
                qb.push(", ");
            }
            qb.push(column);
        }
        qb.push(") VALUES (");
        for (i, (_, value)) in values.iter().enumerate() {
            if i > 0 {
                qb.push(", ");
            }
            push_bound(&mut qb, value);
        }
        qb.push(")");
    }
    qb.push(" RETURNING *");
    Ok(qb)
}

fn update_query(
    table: &str,
    id: Uuid,
    values: &Document,
) -> Result<QueryBuilder<'static, Postgres>, StoreError> {
    if values.is_empty() {
        return Err(StoreError::EmptyDocument);
    }
    let mut qb = QueryBuilder::new(format!("UPDATE {} SET ", table));
    for (i, (column, value)) in values.iter().enumerate() {
        ensure_identifier(column)?;
        if i > 0 {
            qb.push(", ");
        }
        qb.push(column);
        qb.push(" = ");
        push_bound(&mut qb, value);
    }
    qb.push(" WHERE id = ");
    qb.push_bind(id);
    qb.push(" RETURNING *");
    Ok(qb)
}

fn delete_query(table: &str, id: Uuid) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("DELETE FROM {} WHERE id = ", table));
    qb.push_bind(id);
    qb
}

/// Uniform CRUD access to one collection.
pub struct Store<R> {
    pool: PgPool,
    _row: PhantomData<R>,
}

impl<R> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _row: PhantomData,
        }
    }
}

impl<R: Row> Store<R> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _row: PhantomData,
        }
    }

    /// Returns all rows, optionally ordered. No rows is an empty vec,
    /// never an error.
    pub async fn list(&self, order: Option<&str>) -> Result<Vec<R>, StoreError> {
        self.filter(&Criteria::new(), order).await
    }

    /// Returns the rows matching every criterion. Empty criteria behaves
    /// exactly like [`Store::list`].
    pub async fn filter(
        &self,
        criteria: &Criteria,
        order: Option<&str>,
    ) -> Result<Vec<R>, StoreError> {
        let order = order.map(OrderSpec::parse).transpose()?;
        let mut qb = select_query(R::TABLE, criteria, order.as_ref())?;
        let timer = QueryTimer::new(R::TABLE, "filter");
        let rows = qb.build_query_as::<R>().fetch_all(&self.pool).await;
        timer.record();
        Ok(rows?)
    }

    /// Inserts one row and returns it with store-assigned fields. A
    /// success without a returned row yields `None`; callers treat that
    /// as a recoverable empty state.
    pub async fn create(&self, values: &Document) -> Result<Option<R>, StoreError> {
        let mut qb = insert_query(R::TABLE, values)?;
        let timer = QueryTimer::new(R::TABLE, "create");
        let row = qb.build_query_as::<R>().fetch_optional(&self.pool).await;
        timer.record();
        Ok(row?)
    }

    /// Updates the row with the given id and returns it. A missing id is
    /// not an error: the result is `None` and the call is a no-op.
    pub async fn update(&self, id: Uuid, values: &Document) -> Result<Option<R>, StoreError> {
        let mut qb = update_query(R::TABLE, id, values)?;
        let timer = QueryTimer::new(R::TABLE, "update");
        let row = qb.build_query_as::<R>().fetch_optional(&self.pool).await;
        timer.record();
        Ok(row?)
    }

    /// Deletes the row with the given id. Returns whether a row was
    /// deleted; a missing id is `false`, not an error.
    pub async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut qb = delete_query(R::TABLE, id);
        let timer = QueryTimer::new(R::TABLE, "delete");
        let result = qb.build().execute(&self.pool).await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_spec_ascending_by_default() {
        let order = OrderSpec::parse("company_name").unwrap();
        assert_eq!(order.column(), "company_name");
        assert!(!order.is_descending());
    }

    #[test]
    fn test_order_spec_descending_with_prefix() {
        let order = OrderSpec::parse("-created_at").unwrap();
        assert_eq!(order.column(), "created_at");
        assert!(order.is_descending());
    }

    #[test]
    fn test_order_spec_rejects_bad_identifiers() {
        assert!(matches!(
            OrderSpec::parse("created_at; DROP TABLE leads"),
            Err(StoreError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            OrderSpec::parse("-"),
            Err(StoreError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            OrderSpec::parse(""),
            Err(StoreError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_select_without_criteria_or_order() {
        let qb = select_query("leads", &Criteria::new(), None).unwrap();
        assert_eq!(qb.sql(), "SELECT * FROM leads");
    }

    #[test]
    fn test_select_with_order_directions() {
        let desc = OrderSpec::parse("-created_at").unwrap();
        let qb = select_query("leads", &Criteria::new(), Some(&desc)).unwrap();
        assert_eq!(qb.sql(), "SELECT * FROM leads ORDER BY created_at DESC");

        let asc = OrderSpec::parse("company_name").unwrap();
        let qb = select_query("leads", &Criteria::new(), Some(&asc)).unwrap();
        assert_eq!(qb.sql(), "SELECT * FROM leads ORDER BY company_name ASC");
    }

    #[test]
    fn test_select_criteria_are_anded_equality() {
        let criteria = Criteria::new()
            .field("assigned_to", "rep@byteblitz.co.uk")
            .field("status", "booked");
        let qb = select_query("leads", &criteria, None).unwrap();
        assert_eq!(
            qb.sql(),
            "SELECT * FROM leads WHERE assigned_to = $1 AND status = $2"
        );
    }

    #[test]
    fn test_select_null_criterion_is_is_null() {
        let criteria = Criteria::new()
            .field("assigned_to", BindValue::Null)
            .field("status", "assigned");
        let qb = select_query("leads", &criteria, None).unwrap();
        assert_eq!(
            qb.sql(),
            "SELECT * FROM leads WHERE assigned_to IS NULL AND status = $1"
        );
    }

    #[test]
    fn test_select_rejects_bad_criteria_column() {
        let criteria = Criteria::new().field("status = 'x' OR 1", "y");
        assert!(matches!(
            select_query("leads", &criteria, None),
            Err(StoreError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_insert_lists_columns_and_placeholders() {
        let doc = Document::new()
            .set("company_name", "Acme")
            .set("estimated_value", 1200.0)
            .set("assigned_to", BindValue::Null);
        let qb = insert_query("leads", &doc).unwrap();
        assert_eq!(
            qb.sql(),
            "INSERT INTO leads (company_name, estimated_value, assigned_to) \
             VALUES ($1, $2, NULL) RETURNING *"
        );
    }

    #[test]
    fn test_insert_empty_document_uses_defaults() {
        let qb = insert_query("leads", &Document::new()).unwrap();
        assert_eq!(qb.sql(), "INSERT INTO leads DEFAULT VALUES RETURNING *");
    }

    #[test]
    fn test_update_sets_fields_by_primary_key() {
        let doc = Document::new().set("status", "contacted").set("notes", "rang twice");
        let qb = update_query("leads", Uuid::new_v4(), &doc).unwrap();
        assert_eq!(
            qb.sql(),
            "UPDATE leads SET status = $1, notes = $2 WHERE id = $3 RETURNING *"
        );
    }

    #[test]
    fn test_update_empty_document_is_rejected() {
        assert!(matches!(
            update_query("leads", Uuid::new_v4(), &Document::new()),
            Err(StoreError::EmptyDocument)
        ));
    }

    #[test]
    fn test_delete_targets_primary_key() {
        let qb = delete_query("leads", Uuid::new_v4());
        assert_eq!(qb.sql(), "DELETE FROM leads WHERE id = $1");
    }

    #[test]
    fn test_document_set_replaces_existing_column() {
        let doc = Document::new().set("status", "open").set("status", "closed");
        let qb = update_query("support_tickets", Uuid::new_v4(), &doc).unwrap();
        assert_eq!(
            qb.sql(),
            "UPDATE support_tickets SET status = $1 WHERE id = $2 RETURNING *"
        );
    }

    #[test]
    fn test_bind_value_from_option() {
        assert_eq!(BindValue::from(None::<String>), BindValue::Null);
        assert_eq!(
            BindValue::from(Some("x".to_string())),
            BindValue::Text("x".to_string())
        );
    }

    #[test]
    fn test_bind_value_from_json() {
        let value = BindValue::from(json!(["a", "b"]));
        assert!(matches!(value, BindValue::Json(_)));
    }
}
