use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::hazards::models::{Hazard, HazardChanges, HazardWithCategory, NewHazard};

/// Request DTO for creating a hazard
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHazardDto {
    /// Hazard name, no digits allowed
    #[validate(
        required(message = "Please enter the hazard name"),
        length(min = 1, message = "Please enter the hazard name"),
        regex(
            path = "*crate::shared::validation::NO_DIGITS_REGEX",
            message = "Name cannot contain numbers"
        )
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Please enter the hazard description"),
        length(min = 1, message = "Please enter the hazard description")
    )]
    pub description: Option<String>,

    /// Severity rating from 1 (lowest) to 5 (highest)
    #[validate(
        required(message = "Please enter the hazard severity"),
        range(min = 1, max = 5, message = "Severity must be between 1 and 5")
    )]
    #[schema(minimum = 1, maximum = 5)]
    pub severity: Option<i32>,

    /// Category this hazard belongs to; its existence is not checked
    #[validate(required(message = "Please select a category for the hazard"))]
    pub category_id: Option<Uuid>,
}

impl CreateHazardDto {
    /// Convert a validated request into the insert model
    pub fn into_new_hazard(self) -> NewHazard {
        NewHazard {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            severity: self.severity.unwrap_or_default(),
            category_id: self.category_id.unwrap_or_default(),
        }
    }
}

/// Request DTO for updating a hazard. Omitted fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHazardDto {
    #[validate(
        length(min = 1, message = "Please enter the hazard name"),
        regex(
            path = "*crate::shared::validation::NO_DIGITS_REGEX",
            message = "Name cannot contain numbers"
        )
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Please enter the hazard description"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(range(min = 1, max = 5, message = "Severity must be between 1 and 5"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 1, maximum = 5)]
    pub severity: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
}

impl From<UpdateHazardDto> for HazardChanges {
    fn from(dto: UpdateHazardDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            severity: dto.severity,
            category_id: dto.category_id,
        }
    }
}

/// Response DTO for hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HazardResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub severity: i32,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hazard> for HazardResponseDto {
    fn from(h: Hazard) -> Self {
        Self {
            id: h.id,
            name: h.name,
            description: h.description,
            severity: h.severity,
            category_id: h.category_id,
            created_at: h.created_at,
            updated_at: h.updated_at,
        }
    }
}

/// Hazard with its category embedded, used by list and search
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PopulatedHazardDto {
    #[serde(flatten)]
    pub hazard: HazardResponseDto,
    /// The referenced category, `null` when it has been deleted
    pub category: Option<CategoryResponseDto>,
}

impl From<HazardWithCategory> for PopulatedHazardDto {
    fn from(h: HazardWithCategory) -> Self {
        Self {
            hazard: h.hazard.into(),
            category: h.category.map(Into::into),
        }
    }
}
