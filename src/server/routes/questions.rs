use std::collections::BTreeMap;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::get_all_categories,
            questions::{self, get_all_questions, get_question, search_questions},
        },
        NewQuestion, Question,
    },
    server::{
        app::AppState,
        deserializers::LooseInt,
        error_handlers::ApiError,
        pagination::{paginate, PageQuery},
    },
    telemetry::{CREATED_QUESTIONS_CNTR, DELETED_QUESTIONS_CNTR},
};

use super::{categories::categories_map, ApiResponse, AppJson, AppPath};

#[derive(Deserialize)]
struct QuestionBody {
    question: Option<String>,
    answer: Option<String>,
    difficulty: Option<LooseInt>,
    category: Option<LooseInt>,
}

impl QuestionBody {
    fn into_new_question(self) -> Option<NewQuestion> {
        Some(NewQuestion {
            question: self.question?,
            answer: self.answer?,
            difficulty: self.difficulty?.0,
            category: self.category?.0,
        })
    }
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<i64>,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<i64>,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created: i64,
}

async fn questions_page(
    State(pool): State<SqlitePool>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<QuestionsPage> {
    let page = query.map(|Query(q)| q).unwrap_or_default().page;
    let questions = get_all_questions(&pool).await?;
    let total_questions = questions.len();
    let questions = paginate(page, questions);
    let categories = get_all_categories(&pool).await?;

    // an empty store and a page past the end look the same to the client
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionsPage {
        success: true,
        questions,
        total_questions,
        current_category: None,
        categories: categories_map(categories),
    }))
}

// store failures surface as 422, only a missing id is a 404
async fn delete_question(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> ApiResponse<Deleted> {
    get_question(&pool, id)
        .await
        .map_err(ApiError::unprocessable)?
        .ok_or(ApiError::NotFound)?;

    let deleted = questions::delete_question(&pool, id)
        .await
        .map_err(ApiError::unprocessable)?;
    if deleted == 0 {
        // removed by a concurrent request between lookup and delete
        return Err(ApiError::NotFound);
    }

    DELETED_QUESTIONS_CNTR.inc();
    tracing::info!(id, "Deleted question");
    Ok(Json(Deleted {
        success: true,
        deleted: id,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    AppJson(body): AppJson<QuestionBody>,
) -> ApiResponse<Created> {
    let new_question = body.into_new_question().ok_or(ApiError::BadRequest)?;
    let id = questions::create_question(&pool, &new_question)
        .await
        .map_err(ApiError::unprocessable)?;

    CREATED_QUESTIONS_CNTR.inc();
    tracing::info!(id, category = new_question.category, "Created question");
    Ok(Json(Created {
        success: true,
        created: id,
    }))
}

async fn search(
    State(pool): State<SqlitePool>,
    AppJson(body): AppJson<SearchBody>,
) -> ApiResponse<SearchResults> {
    let term = body
        .search_term
        .filter(|term| !term.trim().is_empty())
        .ok_or(ApiError::NotFound)?;
    let questions = search_questions(&pool, &term).await?;
    tracing::debug!(term = %term, found = questions.len(), "Searched questions");

    Ok(Json(SearchResults {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(questions_page).post(create_question))
        .route("/questions/search", post(search))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
