//! Exam result models.
//!
//! Results are deliberately permissive: every score column is an optional
//! free-form string and no field is required at creation (a flagged
//! hardening opportunity, preserved as observed). `user_id` references an
//! account logically; the schema carries no foreign key, so an orphan
//! owner id is accepted.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ExamResult {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub mathematics: Option<String>,
    pub english: Option<String>,
    pub civic: Option<String>,
    pub verbal: Option<String>,
    pub social_studies: Option<String>,
    pub quantitative: Option<String>,
    pub agric: Option<String>,
    pub bst: Option<String>,
    pub session: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateResultDto {
    pub user_id: Option<Uuid>,
    pub mathematics: Option<String>,
    pub english: Option<String>,
    pub civic: Option<String>,
    pub verbal: Option<String>,
    pub social_studies: Option<String>,
    pub quantitative: Option<String>,
    pub agric: Option<String>,
    pub bst: Option<String>,
    pub session: Option<String>,
    pub year: Option<String>,
}
