use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::verify::Identity;

// --- Dashboard Aggregate Schemas ---

/// RawStats
///
/// The full, unfiltered counter set for the caller's accessible scope, as
/// produced by the repository (companies/departments already resolved
/// upstream). Every counter is nullable at the source: a tenant with no data
/// yet yields NULL counts, and the aggregator is responsible for never
/// surfacing that null to rendering.
///
/// The JSON keys are the portal's fixed wire vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RawStats {
    pub firma_sayisi: Option<i64>,
    pub veri_harita_sayisi: Option<i64>,
    pub aksiyon_sayisi: Option<i64>,
    pub dokuman_sayisi: Option<i64>,
    pub envanter_sayisi: Option<i64>,
    pub egitim_sayisi: Option<i64>,
}

/// StatCard
///
/// One metric card as the dashboard renders it: a title, a count that is
/// always a concrete number (nulls resolved to 0 by the aggregator), and the
/// grid-width hint matching the view's column count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StatCard {
    pub title: String,
    pub count: i64,
    pub layout_hint: String,
}

/// FilteredStatsView
///
/// The role-specific projection of `RawStats`: an ordered card list plus the
/// column count the grid should use. Derived per-request and read-only;
/// rendering never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FilteredStatsView {
    pub cards: Vec<StatCard>,
    pub columns: u8,
}

// --- Record Schemas (Mapped to Database) ---

/// AksiyonRecord
///
/// A remediation action from the `public.aksiyonlar` table. Every record is
/// owned by a company; repository queries scope rows to the companies visible
/// to the caller, so a record is never exposed outside its owner's visibility.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AksiyonRecord {
    pub id: Uuid,
    /// FK to the owning company. The visibility anchor for this record.
    pub company_id: Uuid,
    pub title: String,
    /// Workflow state: "acik" | "devam" | "kapali".
    pub status: String,
    #[ts(type = "string | null")]
    pub due_date: Option<DateTime<Utc>>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

// --- Session Schemas (Output) ---

/// MeResponse
///
/// Output schema for `GET /api/me`: the server-verified identity plus the
/// navigation prefixes that identity's role may use. This is the feed the
/// client-side navigation guard consumes, which keeps the UI gate on the same
/// policy table as the request gate instead of a hand-synchronized copy.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MeResponse {
    pub identity: Identity,
    pub nav: Vec<String>,
}
