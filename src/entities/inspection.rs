use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::InspectionRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inspections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub date: String,
    pub location: String,
    pub unit_no: String,
    pub serial_no: String,
    pub manufacture_date: String,
    pub condition: String,
    pub inspector: String,
    pub weight: Decimal,
    pub notes: String,
    #[sea_orm(column_name = "type")]
    pub r#type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for InspectionRecord {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            location: model.location,
            unit_no: model.unit_no,
            serial_no: model.serial_no,
            manufacture_date: model.manufacture_date,
            condition: model.condition,
            inspector: model.inspector,
            weight: model.weight,
            notes: model.notes,
            r#type: model.r#type,
        }
    }
}
