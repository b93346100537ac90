//! Settings business logic - Site-wide key-value configuration.
//!
//! The upsert is a single `INSERT ... ON CONFLICT (key) DO UPDATE` statement,
//! so two concurrent writes to the same key cannot race into a duplicate row.

use crate::{
    entities::{Setting, setting},
    errors::{Error, Result},
};
use sea_orm::{DbErr, Set, prelude::*, sea_query::OnConflict};
use serde::{Deserialize, Serialize};

/// Upsert payload: one key, one value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingUpsert {
    /// Configuration key
    pub key: String,
    /// Configuration value
    pub value: String,
}

/// Retrieves the full settings collection.
pub async fn get_settings(db: &DatabaseConnection) -> Result<Vec<setting::Model>> {
    Setting::find().all(db).await.map_err(Into::into)
}

/// Retrieves a single setting by key, returning None when absent.
pub async fn get_setting(db: &DatabaseConnection, key: &str) -> Result<Option<setting::Model>> {
    Setting::find()
        .filter(setting::Column::Key.eq(key))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Inserts or updates a setting in a single conditional statement and returns
/// the resulting row.
pub async fn upsert_setting(
    db: &DatabaseConnection,
    key: &str,
    value: &str,
) -> Result<setting::Model> {
    let row = setting::ActiveModel {
        key: Set(key.to_string()),
        value: Set(value.to_string()),
        ..Default::default()
    };

    Setting::insert(row)
        .on_conflict(
            OnConflict::column(setting::Column::Key)
                .update_column(setting::Column::Value)
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    get_setting(db, key).await?.ok_or_else(|| {
        Error::Database(DbErr::RecordNotFound(format!(
            "setting '{key}' missing after upsert"
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_upsert_setting_insert_then_update() -> Result<()> {
        let db = setup_test_db().await?;

        let created = upsert_setting(&db, "storeName", "PAUDRONIX GT").await?;
        assert_eq!(created.key, "storeName");
        assert_eq!(created.value, "PAUDRONIX GT");

        let updated = upsert_setting(&db, "storeName", "Tienda Nueva").await?;
        assert_eq!(updated.value, "Tienda Nueva");
        // Updated in place, not duplicated
        assert_eq!(updated.id, created.id);

        let all = get_settings(&db).await?;
        assert_eq!(all.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_setting_by_key() -> Result<()> {
        let db = setup_test_db().await?;
        upsert_setting(&db, "whatsappNumber", "50237871216").await?;

        let found = get_setting(&db, "whatsappNumber").await?;
        assert_eq!(found.map(|s| s.value).as_deref(), Some("50237871216"));

        let missing = get_setting(&db, "backgroundImage").await?;
        assert!(missing.is_none());

        Ok(())
    }
}
