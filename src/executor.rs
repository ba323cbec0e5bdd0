//! Query execution against PostgreSQL, behind a trait so handlers can run on any executor.

use crate::config::DatabaseSettings;
use crate::error::AppError;
use crate::sql::PgBindValue;
use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::postgres::types::PgInterval;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgRow};
use std::str::FromStr;

/// One database record: column name to value, in column order.
pub type Row = Map<String, Value>;

#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run a parameterized statement and wait for all of its rows.
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, AppError>;

    /// Cheap round-trip used by `/ready`.
    async fn ping(&self) -> Result<(), AppError> {
        self.execute("SELECT 1", &[]).await.map(|_| ())
    }

    async fn close(&self) {}
}

/// Executor over the process-wide connection pool.
#[derive(Clone)]
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    pub fn new(pool: PgPool) -> Self {
        PgExecutor { pool }
    }

    /// Build the pool without connecting; connections are opened on first use,
    /// so an unreachable database surfaces as per-request errors.
    pub fn connect_lazy(settings: &DatabaseSettings) -> Result<Self, AppError> {
        let options = PgConnectOptions::from_str(&settings.url)?.ssl_mode(settings.ssl_mode);
        let mut pool_options = PgPoolOptions::new().max_connections(settings.max_connections);
        if let Some(timeout) = settings.acquire_timeout {
            pool_options = pool_options.acquire_timeout(timeout);
        }
        Ok(PgExecutor::new(pool_options.connect_lazy_with(options)))
    }
}

#[async_trait]
impl QueryExecutor for PgExecutor {
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, AppError> {
        tracing::debug!(sql = %sql, params = ?params, "query");
        let mut query = sqlx::query(sql);
        for p in params {
            query = query.bind(PgBindValue::from_json(p));
        }
        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

fn row_to_json(row: &PgRow) -> Row {
    use sqlx::{Column, Row as _};
    let mut map = Map::new();
    for col in row.columns() {
        map.insert(col.name().to_string(), cell_to_value(row, col.ordinal()));
    }
    map
}

/// Decode one cell by trying the column types the library schema uses. NUMERIC
/// keeps its scale as a string ("5.50"); types with no decoder here fall back
/// to their raw bytes when those are printable text (e.g. enum labels), else `null`.
fn cell_to_value(row: &PgRow, idx: usize) -> Value {
    use sqlx::{Row as _, TypeInfo, ValueRef};
    let raw = match row.try_get_raw(idx) {
        Ok(raw) => raw,
        Err(_) => return Value::Null,
    };
    if raw.is_null() {
        return Value::Null;
    }
    if let Ok(n) = row.try_get::<i16, _>(idx) {
        return Value::Number(n.into());
    }
    if let Ok(n) = row.try_get::<i32, _>(idx) {
        return Value::Number(n.into());
    }
    if let Ok(n) = row.try_get::<i64, _>(idx) {
        return Value::Number(n.into());
    }
    if let Ok(n) = row.try_get::<f32, _>(idx) {
        if let Some(n) = serde_json::Number::from_f64(n as f64) {
            return Value::Number(n);
        }
    }
    if let Ok(n) = row.try_get::<f64, _>(idx) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    if let Ok(d) = row.try_get::<rust_decimal::Decimal, _>(idx) {
        return Value::String(d.to_string());
    }
    if let Ok(b) = row.try_get::<bool, _>(idx) {
        return Value::Bool(b);
    }
    if let Ok(u) = row.try_get::<uuid::Uuid, _>(idx) {
        return Value::String(u.to_string());
    }
    if let Ok(d) = row.try_get::<chrono::DateTime<chrono::Utc>, _>(idx) {
        return Value::String(d.to_rfc3339());
    }
    if let Ok(d) = row.try_get::<chrono::NaiveDateTime, _>(idx) {
        return Value::String(d.format("%Y-%m-%dT%H:%M:%S%.f").to_string());
    }
    if let Ok(d) = row.try_get::<chrono::NaiveDate, _>(idx) {
        return Value::String(d.format("%Y-%m-%d").to_string());
    }
    if let Ok(t) = row.try_get::<chrono::NaiveTime, _>(idx) {
        return Value::String(t.format("%H:%M:%S%.f").to_string());
    }
    if let Ok(i) = row.try_get::<PgInterval, _>(idx) {
        return Value::String(interval_to_iso8601(&i));
    }
    if let Ok(s) = row.try_get::<String, _>(idx) {
        return Value::String(s);
    }
    if let Ok(j) = row.try_get::<Value, _>(idx) {
        return j;
    }
    let type_name = raw.type_info().name().to_string();
    match raw.as_str() {
        Ok(s) if !s.chars().any(char::is_control) => Value::String(s.to_string()),
        _ => {
            tracing::debug!(column = idx, pg_type = %type_name, "no decoder for column type");
            Value::Null
        }
    }
}

/// ISO 8601 duration, e.g. "P1Y2M3DT4H5M6.5S"; zero is "PT0S".
fn interval_to_iso8601(i: &PgInterval) -> String {
    const MICROS_PER_SEC: i64 = 1_000_000;
    let mut out = String::from("P");
    let (years, months) = (i.months / 12, i.months % 12);
    if years != 0 {
        out.push_str(&format!("{years}Y"));
    }
    if months != 0 {
        out.push_str(&format!("{months}M"));
    }
    if i.days != 0 {
        out.push_str(&format!("{}D", i.days));
    }
    let hours = i.microseconds / (3600 * MICROS_PER_SEC);
    let minutes = (i.microseconds / (60 * MICROS_PER_SEC)) % 60;
    let micros = i.microseconds % (60 * MICROS_PER_SEC);
    if hours != 0 || minutes != 0 || micros != 0 {
        out.push('T');
        if hours != 0 {
            out.push_str(&format!("{hours}H"));
        }
        if minutes != 0 {
            out.push_str(&format!("{minutes}M"));
        }
        if micros != 0 {
            let secs = micros / MICROS_PER_SEC;
            let frac = (micros % MICROS_PER_SEC).abs();
            if frac == 0 {
                out.push_str(&format!("{secs}S"));
            } else {
                let sign = if micros < 0 && secs == 0 { "-" } else { "" };
                let frac = format!("{frac:06}");
                out.push_str(&format!("{sign}{secs}.{}S", frac.trim_end_matches('0')));
            }
        }
    }
    if out.len() == 1 {
        out.push_str("T0S");
    }
    out
}
