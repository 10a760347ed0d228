use async_trait::async_trait;
use reconflux_application::ports::GraphSink;
use reconflux_domain::{DiscoveryTag, DomainError};
use sqlx::SqlitePool;
use tracing::{error, instrument};

/// Graph sink persisting facts into the local SQLite database.
///
/// Inserts are idempotent per run: re-inserting an identical fact is a no-op
/// thanks to the tables' uniqueness constraints.
pub struct SqliteGraphSink {
    pool: SqlitePool,
    label: String,
}

impl SqliteGraphSink {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            label: "sqlite".to_string(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[allow(clippy::too_many_arguments)]
    async fn insert_record(
        &self,
        record_type: &str,
        name: &str,
        service: &str,
        target: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT OR IGNORE INTO dns_records (run_id, record_type, name, service, target, source, tag)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(run_id)
        .bind(record_type)
        .bind(name)
        .bind(service)
        .bind(target)
        .bind(source)
        .bind(tag.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, record_type, "Failed to insert DNS record");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    /// Number of stored DNS facts per record type for one run, most frequent first.
    pub async fn count_by_type(&self, run_id: &str) -> Result<Vec<(String, i64)>, DomainError> {
        sqlx::query_as::<_, (String, i64)>(
            "SELECT record_type, COUNT(*) AS total
             FROM dns_records
             WHERE run_id = ?
             GROUP BY record_type
             ORDER BY total DESC, record_type ASC",
        )
        .bind(run_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to count DNS records");
            DomainError::DatabaseError(e.to_string())
        })
    }

    pub async fn count_infrastructure(&self, run_id: &str) -> Result<i64, DomainError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM infrastructure WHERE run_id = ?")
            .bind(run_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count infrastructure rows");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(count.0)
    }
}

#[async_trait]
impl GraphSink for SqliteGraphSink {
    fn name(&self) -> &str {
        &self.label
    }

    #[instrument(skip(self))]
    async fn insert_cname(
        &self,
        name: &str,
        target: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        self.insert_record("CNAME", name, "", target, source, tag, run_id)
            .await
    }

    #[instrument(skip(self))]
    async fn insert_a(
        &self,
        name: &str,
        address: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        self.insert_record("A", name, "", address, source, tag, run_id)
            .await
    }

    #[instrument(skip(self))]
    async fn insert_aaaa(
        &self,
        name: &str,
        address: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        self.insert_record("AAAA", name, "", address, source, tag, run_id)
            .await
    }

    #[instrument(skip(self))]
    async fn insert_ptr(
        &self,
        name: &str,
        target: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        self.insert_record("PTR", name, "", target, source, tag, run_id)
            .await
    }

    #[instrument(skip(self))]
    async fn insert_srv(
        &self,
        name: &str,
        service: &str,
        target: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        self.insert_record("SRV", name, service, target, source, tag, run_id)
            .await
    }

    #[instrument(skip(self))]
    async fn insert_ns(
        &self,
        name: &str,
        target: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        self.insert_record("NS", name, "", target, source, tag, run_id)
            .await
    }

    #[instrument(skip(self))]
    async fn insert_mx(
        &self,
        name: &str,
        target: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        self.insert_record("MX", name, "", target, source, tag, run_id)
            .await
    }

    #[instrument(skip(self))]
    async fn insert_infrastructure(
        &self,
        asn: u32,
        description: &str,
        address: &str,
        prefix: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT OR IGNORE INTO infrastructure (run_id, asn, description, address, prefix, source, tag)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(run_id)
        .bind(i64::from(asn))
        .bind(description)
        .bind(address)
        .bind(prefix)
        .bind(source)
        .bind(tag.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, asn, "Failed to insert infrastructure data");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}
