//! Service offering model.

use folio_core::catalog::{
    deserialize_price, limit_length, require_text, validate_price, ServiceCategory,
    MAX_TITLE_LENGTH,
};
use folio_core::error::{CoreError, FieldErrors};
use folio_core::localization::{Localized, TranslatableField};
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `services` table.
///
/// `price` is the NUMERIC column rendered as decimal text.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Service {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub description: String,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub category: String,
    pub price: Option<String>,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created_date: Timestamp,
    pub updated_date: Timestamp,
}

impl Service {
    pub const NAME: TranslatableField<Service> = TranslatableField {
        name: "name",
        base: |s| &s.name,
        ru: |s| s.name_ru.as_deref(),
        en: |s| s.name_en.as_deref(),
    };

    pub const DESCRIPTION: TranslatableField<Service> = TranslatableField {
        name: "description",
        base: |s| &s.description,
        ru: |s| s.description_ru.as_deref(),
        en: |s| s.description_en.as_deref(),
    };
}

impl Localized for Service {
    const FIELDS: &'static [TranslatableField<Self>] = &[Self::NAME, Self::DESCRIPTION];
}

/// Listing filter for the public services endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceFilter {
    pub category: Option<ServiceCategory>,
    pub featured: bool,
}

/// DTO for creating a service. A missing slug is generated from the name.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateService {
    pub name: String,
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub description: String,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub category: ServiceCategory,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, alias = "order")]
    pub sort_order: i32,
}

impl CreateService {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", &self.name, "Name");
        require_text(&mut errors, "description", &self.description, "Description");
        check_common(
            &mut errors,
            Some(&self.name),
            self.name_ru.as_deref(),
            self.name_en.as_deref(),
            self.price.as_deref(),
        );
        errors.into_result()
    }
}

/// DTO for updating a service. Absent fields keep their stored value.
///
/// `slug: Some("")` asks for a fresh slug generated from the name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateService {
    pub name: Option<String>,
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub description: Option<String>,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub category: Option<ServiceCategory>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: Option<String>,
    pub is_featured: Option<bool>,
    #[serde(alias = "order")]
    pub sort_order: Option<i32>,
}

impl UpdateService {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = FieldErrors::new();
        if let Some(name) = &self.name {
            require_text(&mut errors, "name", name, "Name");
        }
        if let Some(description) = &self.description {
            require_text(&mut errors, "description", description, "Description");
        }
        check_common(
            &mut errors,
            self.name.as_deref(),
            self.name_ru.as_deref(),
            self.name_en.as_deref(),
            self.price.as_deref(),
        );
        errors.into_result()
    }
}

fn check_common(
    errors: &mut FieldErrors,
    name: Option<&str>,
    name_ru: Option<&str>,
    name_en: Option<&str>,
    price: Option<&str>,
) {
    for (field, value) in [("name", name), ("name_ru", name_ru), ("name_en", name_en)] {
        if let Some(value) = value {
            limit_length(errors, field, value, MAX_TITLE_LENGTH);
        }
    }
    if let Some(price) = price {
        validate_price(errors, price);
    }
}
