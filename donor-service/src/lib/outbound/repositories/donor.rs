use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::donor::errors::DonorError;
use crate::domain::donor::models::BloodGroup;
use crate::domain::donor::models::Donor;
use crate::domain::donor::models::DonorId;
use crate::domain::donor::models::DonorName;
use crate::domain::donor::models::SubmitDonorCommand;
use crate::domain::donor::ports::DonorRepository;

pub struct PostgresDonorRepository {
    pool: PgPool,
}

impl PostgresDonorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_donor(row: PgRow) -> Result<Donor, DonorError> {
        let storage = |e: sqlx::Error| DonorError::StorageFailure(e.to_string());

        let id: i32 = row.try_get("id").map_err(storage)?;
        let name: String = row.try_get("name").map_err(storage)?;
        let blood_group: String = row.try_get("blood_group").map_err(storage)?;

        let corrupt = |e: crate::donor::errors::ValidationError| {
            DonorError::StorageFailure(format!("Corrupt donor row {}: {}", id, e))
        };

        Ok(Donor {
            id: DonorId(id),
            name: DonorName::new(name).map_err(corrupt)?,
            blood_group: blood_group.parse::<BloodGroup>().map_err(corrupt)?,
        })
    }
}

#[async_trait]
impl DonorRepository for PostgresDonorRepository {
    async fn create(&self, command: SubmitDonorCommand) -> Result<Donor, DonorError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO blood_data (name, blood_group)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(command.name.as_str())
        .bind(command.blood_group.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DonorError::StorageFailure(e.to_string()))?;

        Ok(Donor {
            id: DonorId(id),
            name: command.name,
            blood_group: command.blood_group,
        })
    }

    async fn find_all(&self) -> Result<Vec<Donor>, DonorError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, blood_group
            FROM blood_data
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DonorError::StorageFailure(e.to_string()))?;

        rows.into_iter().map(Self::row_to_donor).collect()
    }

    async fn delete(&self, id: DonorId) -> Result<bool, DonorError> {
        let result = sqlx::query(
            r#"
            DELETE FROM blood_data
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| DonorError::StorageFailure(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
