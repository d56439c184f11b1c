//! Response envelopes and localized public representations.

use folio_core::localization::{Language, Localized};
use folio_core::types::{DbId, Timestamp};
use folio_db::models::page::StandardPage;
use folio_db::models::project::Project;
use folio_db::models::service::Service;
use serde::Serialize;
use serde_json::{Map, Value};

/// `{count, next, previous, results}` page of a paginated listing.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// `{count, results}` for unpaginated listings.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub count: i64,
    pub results: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(results: Vec<T>) -> Self {
        Self {
            count: results.len() as i64,
            results,
        }
    }
}

/// Public representation of a project with `title` and `description`
/// resolved for the requested language.
#[derive(Debug, Serialize)]
pub struct ProjectView<'a> {
    pub id: DbId,
    pub slug: &'a str,
    pub title: &'a str,
    pub title_ru: Option<&'a str>,
    pub title_en: Option<&'a str>,
    pub description: &'a str,
    pub description_ru: Option<&'a str>,
    pub description_en: Option<&'a str>,
    pub category: &'a str,
    pub tags: &'a [String],
    pub featured_image: Option<&'a str>,
    pub demo_url: Option<&'a str>,
    pub github_url: Option<&'a str>,
    pub is_featured: bool,
    pub created_date: Timestamp,
    pub updated_date: Timestamp,
}

impl<'a> ProjectView<'a> {
    pub fn new(project: &'a Project, lang: Language) -> Self {
        Self {
            id: project.id,
            slug: &project.slug,
            title: Project::TITLE.resolve(project, lang),
            title_ru: project.title_ru.as_deref(),
            title_en: project.title_en.as_deref(),
            description: Project::DESCRIPTION.resolve(project, lang),
            description_ru: project.description_ru.as_deref(),
            description_en: project.description_en.as_deref(),
            category: &project.category,
            tags: &project.tags.0,
            featured_image: project.featured_image.as_deref(),
            demo_url: project.demo_url.as_deref(),
            github_url: project.github_url.as_deref(),
            is_featured: project.is_featured,
            created_date: project.created_date,
            updated_date: project.updated_date,
        }
    }
}

/// Public representation of a service with `name` and `description`
/// resolved for the requested language.
#[derive(Debug, Serialize)]
pub struct ServiceView<'a> {
    pub id: DbId,
    pub slug: &'a str,
    pub name: &'a str,
    pub name_ru: Option<&'a str>,
    pub name_en: Option<&'a str>,
    pub description: &'a str,
    pub description_ru: Option<&'a str>,
    pub description_en: Option<&'a str>,
    pub price: Option<&'a str>,
    pub category: &'a str,
    pub is_featured: bool,
    pub created_date: Timestamp,
}

impl<'a> ServiceView<'a> {
    pub fn new(service: &'a Service, lang: Language) -> Self {
        Self {
            id: service.id,
            slug: &service.slug,
            name: Service::NAME.resolve(service, lang),
            name_ru: service.name_ru.as_deref(),
            name_en: service.name_en.as_deref(),
            description: Service::DESCRIPTION.resolve(service, lang),
            description_ru: service.description_ru.as_deref(),
            description_en: service.description_en.as_deref(),
            price: service.price.as_deref(),
            category: &service.category,
            is_featured: service.is_featured,
            created_date: service.created_date,
        }
    }
}

/// `{slug, title, content}` for a standard page, fields resolved through
/// the page's translatable field table.
pub fn page_view(page: &StandardPage, lang: Language) -> Value {
    let mut body = Map::new();
    body.insert("slug".into(), Value::String(page.slug.clone()));
    for (field, value) in page.localized(lang) {
        body.insert(field.into(), Value::String(value.to_string()));
    }
    Value::Object(body)
}
