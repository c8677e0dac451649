use crate::models::{AksiyonRecord, RawStats};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Repository Trait
///
/// Defines the abstract contract for all persistence operations, allowing the
/// handlers to interact with the data layer without knowing the specific
/// implementation (Postgres, Mock, etc.).
///
/// Every method takes the caller's visible company set explicitly — resolved
/// upstream from the identity claim, never from ambient state — and must scope
/// its rows to it. A record owned by a company outside that set must never
/// appear in a result, regardless of what the UI-side navigation guard allows.
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn Repository>`) safely shareable across Axum's asynchronous task
/// boundaries.
#[async_trait]
pub trait Repository: Send + Sync {
    /// The full, unfiltered counter set for the given company scope.
    /// Role-based shaping happens later, in `stats::project`.
    async fn get_raw_stats(&self, companies: &[Uuid]) -> RawStats;

    /// Remediation actions owned by the given companies, newest first.
    async fn get_actions(&self, companies: &[Uuid]) -> Vec<AksiyonRecord>;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer access across the application state.
pub type RepositoryState = Arc<dyn Repository>;

/// PostgresRepository
///
/// The concrete implementation of the `Repository` trait, backed by the PostgreSQL database.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PostgresRepository {
    /// get_raw_stats
    ///
    /// Collects the six dashboard counters in a single round trip.
    /// **Security**: every sub-count is scoped by `= ANY($1)` against the
    /// caller's company set; there is no unscoped variant of this query.
    async fn get_raw_stats(&self, companies: &[Uuid]) -> RawStats {
        let query = sqlx::query_as::<_, RawStats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM firmalar        WHERE id         = ANY($1)) AS firma_sayisi,
                (SELECT COUNT(*) FROM veri_haritalari WHERE company_id = ANY($1)) AS veri_harita_sayisi,
                (SELECT COUNT(*) FROM aksiyonlar      WHERE company_id = ANY($1)) AS aksiyon_sayisi,
                (SELECT COUNT(*) FROM dokumanlar      WHERE company_id = ANY($1)) AS dokuman_sayisi,
                (SELECT COUNT(*) FROM envanterler     WHERE company_id = ANY($1)) AS envanter_sayisi,
                (SELECT COUNT(*) FROM egitimler       WHERE company_id = ANY($1)) AS egitim_sayisi
            "#,
        )
        .bind(companies.to_vec());

        match query.fetch_one(&self.pool).await {
            Ok(stats) => stats,
            Err(e) => {
                // An unreachable database yields the empty counter set; the
                // aggregator renders it as zeros rather than an error page.
                tracing::error!("get_raw_stats error: {:?}", e);
                RawStats::default()
            }
        }
    }

    /// get_actions
    ///
    /// **Security**: enforces the company scope in the WHERE clause; the
    /// handler never post-filters, so a scoping bug here is a data leak.
    async fn get_actions(&self, companies: &[Uuid]) -> Vec<AksiyonRecord> {
        let query = sqlx::query_as::<_, AksiyonRecord>(
            r#"
            SELECT id, company_id, title, status, due_date, created_at
            FROM aksiyonlar
            WHERE company_id = ANY($1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(companies.to_vec());

        match query.fetch_all(&self.pool).await {
            Ok(actions) => actions,
            Err(e) => {
                tracing::error!("get_actions error: {:?}", e);
                vec![]
            }
        }
    }
}
