//! Taluk factory for creating test taluk entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test taluks with customizable fields.
///
/// The owning district must exist first; use
/// `helpers::create_taluk_with_district` when the test doesn't care about
/// the district itself.
pub struct TalukFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    district_id: i32,
    is_active: bool,
    deleted: bool,
}

impl<'a> TalukFactory<'a> {
    /// Creates a new TalukFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Taluk {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `district_id` - Owning district
    pub fn new(db: &'a DatabaseConnection, district_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Taluk {}", id),
            district_id,
            is_active: true,
            deleted: false,
        }
    }

    /// Sets the taluk name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the row soft-deleted (`deleted_at` set to now).
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Builds and inserts the taluk entity into the database.
    pub async fn build(self) -> Result<entity::taluk::Model, DbErr> {
        entity::taluk::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            district_id: ActiveValue::Set(self.district_id),
            is_active: ActiveValue::Set(self.is_active),
            deleted_at: ActiveValue::Set(self.deleted.then(Utc::now)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a taluk with default values under the given district.
pub async fn create_taluk(
    db: &DatabaseConnection,
    district_id: i32,
) -> Result<entity::taluk::Model, DbErr> {
    TalukFactory::new(db, district_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers::create_taluk_with_district;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_taluk_with_district_dependency() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(District)
            .with_table(Taluk)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (district, taluk) = create_taluk_with_district(db).await?;

        assert_eq!(taluk.district_id, district.id);
        assert!(!taluk.name.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_taluks() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(District)
            .with_table(Taluk)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let district = crate::factory::district::create_district(db).await?;
        let taluk1 = create_taluk(db, district.id).await?;
        let taluk2 = create_taluk(db, district.id).await?;

        assert_ne!(taluk1.id, taluk2.id);
        assert_ne!(taluk1.name, taluk2.name);

        Ok(())
    }
}
