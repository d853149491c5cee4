use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use std::sync::Arc;
use tracing::debug;

use crate::db::DbPool;
use crate::entities::inspection;
use crate::errors::ServiceError;
use crate::models::{InspectionRecord, RecordDraft};
use crate::store::RecordStore;

/// Relational record store: one `inspections` table through sea-orm.
///
/// Identifiers are database-generated primary keys. Each operation is a
/// single implicit transaction; concurrency control is the engine's problem.
pub struct TableStore {
    db: Arc<DbPool>,
}

impl TableStore {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecordStore for TableStore {
    async fn list_all(&self) -> Result<Vec<InspectionRecord>, ServiceError> {
        let models = inspection::Entity::find()
            .order_by_asc(inspection::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(models.into_iter().map(InspectionRecord::from).collect())
    }

    async fn create(&self, draft: RecordDraft) -> Result<i64, ServiceError> {
        let active = inspection::ActiveModel {
            date: Set(draft.date),
            location: Set(draft.location),
            unit_no: Set(draft.unit_no),
            serial_no: Set(draft.serial_no),
            manufacture_date: Set(draft.manufacture_date),
            condition: Set(draft.condition),
            inspector: Set(draft.inspector),
            weight: Set(draft.weight),
            notes: Set(draft.notes),
            r#type: Set(draft.r#type),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await?;
        debug!(id = inserted.id, "Inserted inspection record");
        Ok(inserted.id)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let Some(model) = inspection::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(false);
        };

        let result = model.delete(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
