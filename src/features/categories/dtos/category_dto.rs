use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::{Category, CategoryChanges, NewCategory};
use crate::shared::constants::DEFAULT_CATEGORY_COLOR;

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    /// Unique category name, no digits allowed
    #[validate(
        required(message = "Please enter the category name"),
        length(min = 1, message = "Please enter the category name"),
        regex(
            path = "*crate::shared::validation::NO_DIGITS_REGEX",
            message = "Name cannot contain numbers"
        )
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Please enter the category description"),
        length(min = 1, message = "Please enter the category description")
    )]
    pub description: Option<String>,

    /// Display colour, defaults to `#FF0000`
    #[schema(example = "#FF4500")]
    pub color: Option<String>,
}

impl CreateCategoryDto {
    /// Convert a validated request into the insert model
    pub fn into_new_category(self) -> NewCategory {
        NewCategory {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            color: self
                .color
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
        }
    }
}

/// Request DTO for updating a category. Omitted fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    #[validate(
        length(min = 1, message = "Please enter the category name"),
        regex(
            path = "*crate::shared::validation::NO_DIGITS_REGEX",
            message = "Name cannot contain numbers"
        )
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Please enter the category description"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<UpdateCategoryDto> for CategoryChanges {
    fn from(dto: UpdateCategoryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            color: dto.color,
        }
    }
}

/// Response DTO for category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            color: c.color,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
