use axum::extract::State;
use axum::Json;
use folio_core::catalog::BlockSection;
use folio_core::localization::Language;
use folio_db::models::ui_block::UiBlock;
use folio_db::repositories::UiBlockRepo;
use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::extract::QueryParams;
use crate::query::{non_empty, BlockListParams};
use crate::state::AppState;

/// GET /api/blocks/
///
/// Returns `{key: content}` for the blocks of `section` (all sections when
/// absent). Content is localized only when `lang` names a known language;
/// later sections overwrite earlier ones on key collisions.
pub async fn list_blocks(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<BlockListParams>,
) -> AppResult<Json<Value>> {
    let section = match non_empty(params.section.as_deref()) {
        None => None,
        Some(raw) => match raw.parse::<BlockSection>() {
            Ok(section) => Some(section),
            Err(_) => return Ok(Json(Value::Object(Map::new()))),
        },
    };
    let lang = Language::explicit(params.lang.as_deref());

    let blocks = UiBlockRepo::list(&state.pool, section).await?;
    let payload: Map<String, Value> = blocks
        .iter()
        .map(|block| {
            let content = UiBlock::CONTENT.resolve_explicit(block, lang);
            (block.key.clone(), Value::String(content.to_string()))
        })
        .collect();
    Ok(Json(Value::Object(payload)))
}
