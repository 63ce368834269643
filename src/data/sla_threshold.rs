use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct SlaThresholdRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SlaThresholdRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the allowed duration in seconds for the given threshold types,
    /// keyed by type. Types with no configured threshold are absent from the
    /// result. Fetched once per report run and cached by the caller.
    pub async fn get_allowed_seconds(
        &self,
        threshold_types: &[i32],
    ) -> Result<HashMap<i32, i32>, DbErr> {
        let models = entity::prelude::SlaThreshold::find()
            .filter(
                entity::sla_threshold::Column::ThresholdType
                    .is_in(threshold_types.iter().copied()),
            )
            .all(self.db)
            .await?;

        Ok(models
            .into_iter()
            .map(|m| (m.threshold_type, m.allowed_seconds))
            .collect())
    }
}
