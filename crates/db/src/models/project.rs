//! Portfolio project model.

use folio_core::catalog::{
    limit_length, require_text, validate_link, ProjectCategory, MAX_TITLE_LENGTH,
};
use folio_core::error::{CoreError, FieldErrors};
use folio_core::localization::{Localized, TranslatableField};
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Project {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub description: String,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub category: String,
    pub tags: Json<Vec<String>>,
    pub featured_image: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created_date: Timestamp,
    pub updated_date: Timestamp,
}

impl Project {
    pub const TITLE: TranslatableField<Project> = TranslatableField {
        name: "title",
        base: |p| &p.title,
        ru: |p| p.title_ru.as_deref(),
        en: |p| p.title_en.as_deref(),
    };

    pub const DESCRIPTION: TranslatableField<Project> = TranslatableField {
        name: "description",
        base: |p| &p.description,
        ru: |p| p.description_ru.as_deref(),
        en: |p| p.description_en.as_deref(),
    };
}

impl Localized for Project {
    const FIELDS: &'static [TranslatableField<Self>] = &[Self::TITLE, Self::DESCRIPTION];
}

/// Listing filter for the public projects endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectFilter {
    pub category: Option<ProjectCategory>,
    /// Only featured projects, most recently updated first.
    pub featured: bool,
}

/// DTO for creating a project. A missing slug is generated from the title.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub description: String,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub category: ProjectCategory,
    pub slug: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, alias = "order")]
    pub sort_order: i32,
}

impl CreateProject {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "title", &self.title, "Title");
        require_text(&mut errors, "description", &self.description, "Description");
        check_title_lengths(
            &mut errors,
            Some(&self.title),
            self.title_ru.as_deref(),
            self.title_en.as_deref(),
        );
        check_links(&mut errors, self.demo_url.as_deref(), self.github_url.as_deref());
        errors.into_result()
    }
}

/// DTO for updating a project. Absent fields keep their stored value.
///
/// `slug: Some("")` asks for a fresh slug generated from the title.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub description: Option<String>,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub category: Option<ProjectCategory>,
    pub slug: Option<String>,
    pub tags: Option<Vec<String>>,
    pub featured_image: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub is_featured: Option<bool>,
    #[serde(alias = "order")]
    pub sort_order: Option<i32>,
}

impl UpdateProject {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = FieldErrors::new();
        if let Some(title) = &self.title {
            require_text(&mut errors, "title", title, "Title");
        }
        if let Some(description) = &self.description {
            require_text(&mut errors, "description", description, "Description");
        }
        check_title_lengths(
            &mut errors,
            self.title.as_deref(),
            self.title_ru.as_deref(),
            self.title_en.as_deref(),
        );
        check_links(&mut errors, self.demo_url.as_deref(), self.github_url.as_deref());
        errors.into_result()
    }
}

fn check_title_lengths(
    errors: &mut FieldErrors,
    title: Option<&str>,
    title_ru: Option<&str>,
    title_en: Option<&str>,
) {
    for (field, value) in [("title", title), ("title_ru", title_ru), ("title_en", title_en)] {
        if let Some(value) = value {
            limit_length(errors, field, value, MAX_TITLE_LENGTH);
        }
    }
}

fn check_links(errors: &mut FieldErrors, demo_url: Option<&str>, github_url: Option<&str>) {
    validate_link(errors, "demo_url", demo_url);
    validate_link(errors, "github_url", github_url);
}
