use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict,
};

use super::{KeyValueStore, StorageResult};
use crate::entity::kv_entries::{ActiveModel, Column, Entity as KvEntries};

/// Key-value store backed by the `kv_entries` table.
#[derive(Clone)]
pub struct PostgresStore {
    orm: DatabaseConnection,
}

impl PostgresStore {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self { orm }
    }
}

impl KeyValueStore for PostgresStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entry = KvEntries::find_by_id(key.to_string()).one(&self.orm).await?;
        Ok(entry.map(|model| model.value))
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        let active = ActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
            updated_at: Set(Utc::now().fixed_offset()),
        };
        KvEntries::insert(active)
            .on_conflict(
                OnConflict::column(Column::Key)
                    .update_columns([Column::Value, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.orm)
            .await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        KvEntries::delete_by_id(key.to_string())
            .exec(&self.orm)
            .await?;
        Ok(())
    }
}
