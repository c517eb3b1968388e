// fcra-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use duckdb::types::Value;
use duckdb::{Config, Connection, Row, Transaction, params_from_iter};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use tracing::{debug, info, instrument};

// Hexagonal imports
use crate::domain::record::{FieldUpdate, FieldValue, NewRecord, Record, RecordField};
use crate::error::FcraError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use crate::ports::record_store::{PortfolioFilter, RecordStore};

pub const TABLE_NAME: &str = "fcra_records";

// The sequence outlives every reimport, so ids are never reused.
const SCHEMA: &str = "
    CREATE SEQUENCE IF NOT EXISTS fcra_record_id_seq START 1;
    CREATE TABLE IF NOT EXISTS fcra_records (
        id BIGINT PRIMARY KEY DEFAULT nextval('fcra_record_id_seq'),
        acct_number BIGINT,
        portfolio VARCHAR,
        rule_id VARCHAR,
        rule_category VARCHAR,
        severity VARCHAR,
        dqs_status VARCHAR,
        date_of_info VARCHAR,
        aging BIGINT,
        process_date VARCHAR,
        remediation_status VARCHAR,
        action_taken_by VARCHAR,
        action_notes VARCHAR,
        action_date VARCHAR,
        assigned_to VARCHAR,
        remediation_category VARCHAR
    );
";

fn column_list() -> String {
    RecordField::ALL
        .iter()
        .map(|f| f.column_name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn select_clause() -> String {
    format!("SELECT id, {} FROM {}", column_list(), TABLE_NAME)
}

fn text(row: &Row<'_>, idx: usize) -> duckdb::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

fn integer(row: &Row<'_>, idx: usize) -> duckdb::Result<i64> {
    Ok(row.get::<_, Option<i64>>(idx)?.unwrap_or_default())
}

// Column indexes follow `select_clause`: id, then RecordField::ALL.
fn map_record(row: &Row<'_>) -> duckdb::Result<Record> {
    Ok(Record {
        id: row.get(0)?,
        acct_number: integer(row, 1)?,
        portfolio: text(row, 2)?,
        rule_id: text(row, 3)?,
        rule_category: text(row, 4)?,
        severity: text(row, 5)?,
        dqs_status: text(row, 6)?,
        date_of_info: text(row, 7)?,
        aging: integer(row, 8)?,
        process_date: text(row, 9)?,
        remediation_status: text(row, 10)?,
        action_taken_by: text(row, 11)?,
        action_notes: text(row, 12)?,
        action_date: text(row, 13)?,
        assigned_to: text(row, 14)?,
        remediation_category: text(row, 15)?,
    })
}

fn insert_values(row: NewRecord) -> [Value; 15] {
    [
        Value::BigInt(row.acct_number),
        Value::Text(row.portfolio),
        Value::Text(row.rule_id),
        Value::Text(row.rule_category),
        Value::Text(row.severity),
        Value::Text(row.dqs_status),
        Value::Text(row.date_of_info),
        Value::BigInt(row.aging),
        Value::Text(row.process_date),
        Value::Text(row.remediation_status),
        Value::Text(row.action_taken_by),
        Value::Text(row.action_notes),
        Value::Text(row.action_date),
        Value::Text(row.assigned_to),
        Value::Text(row.remediation_category),
    ]
}

fn db_error(e: duckdb::Error) -> FcraError {
    FcraError::Infrastructure(InfrastructureError::Database(DatabaseError::DuckDb(e)))
}

pub struct DuckDbRecordStore {
    conn: Arc<Mutex<Connection>>,
}

impl DuckDbRecordStore {
    /// Opens (or creates) the database file and ensures the schema exists.
    /// `:memory:` opens a private in-memory database.
    pub fn new(db_path: &str) -> Result<Self, InfrastructureError> {
        let config = Config::default();

        let conn = if db_path == ":memory:" {
            Connection::open_in_memory_with_flags(config)?
        } else {
            Connection::open_with_flags(db_path, config)?
        };
        conn.execute_batch(SCHEMA)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self, InfrastructureError> {
        Self::new(":memory:")
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, FcraError> {
        self.conn.lock().map_err(|_| {
            FcraError::Infrastructure(InfrastructureError::Database(DatabaseError::Poisoned))
        })
    }

    /// Inserts `rows` inside an open transaction, taking ids from the sequence.
    fn insert_rows(tx: &Transaction<'_>, rows: Vec<NewRecord>) -> Result<usize, FcraError> {
        let placeholders = vec!["?"; RecordField::ALL.len()].join(", ");
        let insert = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            TABLE_NAME,
            column_list(),
            placeholders
        );

        let mut stmt = tx.prepare(&insert).map_err(db_error)?;
        let mut inserted = 0;
        for row in rows {
            inserted += stmt
                .execute(params_from_iter(insert_values(row)))
                .map_err(db_error)?;
        }
        Ok(inserted)
    }

    fn query_records(&self, sql: &str, params: Vec<Value>) -> Result<Vec<Record>, FcraError> {
        let start = Instant::now();
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql).map_err(db_error)?;
        let records = stmt
            .query_map(params_from_iter(params), map_record)
            .map_err(db_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_error)?;
        debug!(rows = records.len(), "Query finished in {:.2?}", start.elapsed());
        Ok(records)
    }
}

#[async_trait]
impl RecordStore for DuckDbRecordStore {
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    async fn replace_all(&self, rows: Vec<NewRecord>) -> Result<usize, FcraError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction().map_err(db_error)?;

        tx.execute(&format!("DELETE FROM {}", TABLE_NAME), [])
            .map_err(db_error)?;
        let inserted = Self::insert_rows(&tx, rows)?;

        // Nothing is visible to readers until here.
        tx.commit().map_err(db_error)?;
        info!(inserted, "Record collection replaced");
        Ok(inserted)
    }

    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    async fn append(&self, rows: Vec<NewRecord>) -> Result<usize, FcraError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction().map_err(db_error)?;
        let inserted = Self::insert_rows(&tx, rows)?;
        tx.commit().map_err(db_error)?;
        info!(inserted, "Records appended");
        Ok(inserted)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Record>, FcraError> {
        let sql = format!("{} WHERE id = ?", select_clause());
        let mut records = self.query_records(&sql, vec![Value::BigInt(id)])?;
        Ok(records.pop())
    }

    async fn all_records(&self) -> Result<Vec<Record>, FcraError> {
        let sql = format!("{} ORDER BY id", select_clause());
        self.query_records(&sql, Vec::new())
    }

    async fn find_by_portfolio(&self, filter: &PortfolioFilter) -> Result<Vec<Record>, FcraError> {
        let mut sql = format!("{} WHERE portfolio = ?", select_clause());
        let mut params = vec![Value::Text(filter.portfolio.clone())];

        if let Some(status) = &filter.status {
            sql.push_str(" AND remediation_status = ?");
            params.push(Value::Text(status.clone()));
        }
        if let Some(category) = &filter.category {
            sql.push_str(" AND remediation_category = ?");
            params.push(Value::Text(category.clone()));
        }
        sql.push_str(" ORDER BY id");

        self.query_records(&sql, params)
    }

    #[instrument(skip(self, update), fields(field = %update.field))]
    async fn update_field(&self, id: i64, update: &FieldUpdate) -> Result<usize, FcraError> {
        // Column names come from the RecordField allowlist only.
        let mut assignments = vec![format!("{} = ?", update.field.column_name())];
        let mut params = vec![match &update.value {
            FieldValue::Text(s) => Value::Text(s.clone()),
            FieldValue::Integer(n) => Value::BigInt(*n),
        }];

        if let Some(stamp) = &update.action_date {
            assignments.push(format!("{} = ?", RecordField::ActionDate.column_name()));
            params.push(Value::Text(stamp.clone()));
        }
        params.push(Value::BigInt(id));

        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?",
            TABLE_NAME,
            assignments.join(", ")
        );

        let conn = self.lock()?;
        let affected = conn
            .execute(&sql, params_from_iter(params))
            .map_err(db_error)?;
        debug!(affected, "Field update applied");
        Ok(affected)
    }

    async fn distinct_values(
        &self,
        field: RecordField,
        portfolio: &str,
    ) -> Result<Vec<String>, FcraError> {
        let column = field.column_name();
        let sql = format!(
            "SELECT DISTINCT CAST({col} AS VARCHAR) AS option_value FROM {table} \
             WHERE portfolio = ? AND {col} IS NOT NULL AND CAST({col} AS VARCHAR) != '' \
             ORDER BY option_value",
            col = column,
            table = TABLE_NAME
        );

        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql).map_err(db_error)?;
        let values = stmt
            .query_map([portfolio], |row| row.get::<_, String>(0))
            .map_err(db_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_error)?;
        Ok(values)
    }

    fn engine_name(&self) -> &str {
        "duckdb"
    }
}
