use std::collections::BTreeMap;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_all_categories, questions::get_questions_for_category},
        Category, Question,
    },
    server::{
        app::AppState,
        error_handlers::ApiError,
        pagination::{paginate, PageQuery},
    },
};

use super::{ApiResponse, AppPath};

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    total_questions: usize,
    current_category: i64,
    questions: Vec<Question>,
}

/// Maps category ids to their labels; serializes with stringified id keys.
pub(super) fn categories_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesResponse> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoriesResponse {
        success: true,
        categories: categories_map(categories),
    }))
}

// every failure here is reported as 404, store errors included
async fn questions_for_category(
    State(pool): State<SqlitePool>,
    AppPath(category_id): AppPath<i64>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<CategoryQuestionsResponse> {
    let page = query.map(|Query(q)| q).unwrap_or_default().page;
    let questions = get_questions_for_category(&pool, category_id)
        .await
        .map_err(ApiError::not_found)?;
    let total_questions = questions.len();
    let questions = paginate(page, questions);
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions,
        current_category: category_id,
        questions,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions_for_category),
        )
        .with_state(state)
}
