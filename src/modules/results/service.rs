use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::results::model::{CreateResultDto, ExamResult};
use crate::utils::errors::AppError;

pub struct ResultService;

impl ResultService {
    #[instrument(skip(db, dto))]
    pub async fn create_result(db: &PgPool, dto: CreateResultDto) -> Result<ExamResult, AppError> {
        let result = sqlx::query_as::<_, ExamResult>(
            "INSERT INTO results
                (user_id, mathematics, english, civic, verbal, social_studies,
                 quantitative, agric, bst, session, year)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING id, user_id, mathematics, english, civic, verbal,
                       social_studies, quantitative, agric, bst, session, year",
        )
        .bind(dto.user_id)
        .bind(&dto.mathematics)
        .bind(&dto.english)
        .bind(&dto.civic)
        .bind(&dto.verbal)
        .bind(&dto.social_studies)
        .bind(&dto.quantitative)
        .bind(&dto.agric)
        .bind(&dto.bst)
        .bind(&dto.session)
        .bind(&dto.year)
        .fetch_one(db)
        .await
        .context("Failed to insert result")
        .map_err(AppError::database)?;

        Ok(result)
    }

    #[instrument(skip(db))]
    pub async fn get_results(db: &PgPool) -> Result<Vec<ExamResult>, AppError> {
        let results = sqlx::query_as::<_, ExamResult>(
            "SELECT id, user_id, mathematics, english, civic, verbal, social_studies,
                    quantitative, agric, bst, session, year
             FROM results",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch results")
        .map_err(AppError::database)?;

        Ok(results)
    }

    /// Lookup by the result's own id. Returns a row-set rather than an
    /// option: an absent id yields an empty array, not a 404.
    #[instrument(skip(db))]
    pub async fn get_result_by_id(db: &PgPool, id: Uuid) -> Result<Vec<ExamResult>, AppError> {
        let results = sqlx::query_as::<_, ExamResult>(
            "SELECT id, user_id, mathematics, english, civic, verbal, social_studies,
                    quantitative, agric, bst, session, year
             FROM results
             WHERE id = $1",
        )
        .bind(id)
        .fetch_all(db)
        .await
        .context("Failed to fetch result by id")
        .map_err(AppError::database)?;

        Ok(results)
    }
}
