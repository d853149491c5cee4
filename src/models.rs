use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ServiceError;

/// A stored inspection record as served to clients.
///
/// `date` and `manufacture_date` are kept as the submitted ISO-8601 strings;
/// malformed values are tolerated in storage and only handled at display
/// time. `weight` is the one canonical numeric field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InspectionRecord {
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
    #[serde(rename = "type")]
    pub r#type: String,
}

impl InspectionRecord {
    /// Attach an identifier to a draft, yielding a full record.
    pub fn from_draft(id: i64, draft: RecordDraft) -> Self {
        Self {
            id,
            date: draft.date,
            location: draft.location,
            unit_no: draft.unit_no,
            serial_no: draft.serial_no,
            manufacture_date: draft.manufacture_date,
            condition: draft.condition,
            inspector: draft.inspector,
            weight: draft.weight,
            notes: draft.notes,
            r#type: draft.r#type,
        }
    }
}

/// A record without an identifier: the input to `RecordStore::create` and
/// the element type of the file adapter's on-disk JSON array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub date: String,
    pub location: String,
    pub unit_no: String,
    pub serial_no: String,
    pub manufacture_date: String,
    pub condition: String,
    pub inspector: String,
    pub weight: Decimal,
    pub notes: String,
    #[serde(rename = "type")]
    pub r#type: String,
}

/// Form payload for `POST /add`. All ten fields are required; weight is
/// accepted as text and coerced to `Decimal` at this boundary.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewInspection {
    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "unit_no is required"))]
    pub unit_no: String,
    #[validate(length(min = 1, message = "serial_no is required"))]
    pub serial_no: String,
    #[validate(length(min = 1, message = "manufacture_date is required"))]
    pub manufacture_date: String,
    #[validate(length(min = 1, message = "condition is required"))]
    pub condition: String,
    #[validate(length(min = 1, message = "inspector is required"))]
    pub inspector: String,
    #[validate(length(min = 1, message = "weight is required"))]
    pub weight: String,
    #[validate(length(min = 1, message = "notes is required"))]
    pub notes: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type is required"))]
    pub r#type: String,
}

impl NewInspection {
    /// Validate presence of every field and coerce the weight, rejecting
    /// malformed numeric input instead of storing it as-is.
    pub fn into_draft(self) -> Result<RecordDraft, ServiceError> {
        self.validate()?;

        let weight: Decimal = self.weight.trim().parse().map_err(|_| {
            ServiceError::ValidationError(format!("weight must be numeric, got '{}'", self.weight))
        })?;

        Ok(RecordDraft {
            date: self.date,
            location: self.location,
            unit_no: self.unit_no,
            serial_no: self.serial_no,
            manufacture_date: self.manufacture_date,
            condition: self.condition,
            inspector: self.inspector,
            weight,
            notes: self.notes,
            r#type: self.r#type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(weight: &str) -> NewInspection {
        NewInspection {
            date: "2024-05-01".to_string(),
            location: "Yard 3".to_string(),
            unit_no: "A1".to_string(),
            serial_no: "SN-100".to_string(),
            manufacture_date: "2020-01-15".to_string(),
            condition: "Good".to_string(),
            inspector: "J. Smith".to_string(),
            weight: weight.to_string(),
            notes: "No defects".to_string(),
            r#type: "Chain sling".to_string(),
        }
    }

    #[test]
    fn draft_keeps_submitted_fields() {
        let draft = form("12.5").into_draft().unwrap();
        assert_eq!(draft.unit_no, "A1");
        assert_eq!(draft.weight, "12.5".parse().unwrap());
        assert_eq!(draft.r#type, "Chain sling");
    }

    #[test]
    fn malformed_weight_is_rejected() {
        let err = form("heavy").into_draft().unwrap_err();
        assert!(matches!(err, ServiceError::ValidationError(_)));
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut input = form("12.5");
        input.inspector = String::new();
        assert!(input.into_draft().is_err());
    }
}
