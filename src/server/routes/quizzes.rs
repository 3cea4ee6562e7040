use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::questions::{get_all_questions, get_questions_for_category},
        Question,
    },
    quiz::{self, ALL_CATEGORIES},
    server::{app::AppState, deserializers::LooseInt, error_handlers::ApiError},
    telemetry::QUIZ_QUESTIONS_CNTR,
};

use super::{ApiResponse, AppJson};

#[derive(Deserialize)]
struct QuizBody {
    quiz_category: Option<QuizCategory>,
    previous_questions: Option<Vec<LooseInt>>,
}

// the client also sends the category label as `type`, which is not needed here
#[derive(Deserialize)]
struct QuizCategory {
    id: Option<LooseInt>,
}

#[derive(Serialize)]
struct NextQuestion {
    success: bool,
    question: Option<Question>,
}

async fn next_question(
    State(pool): State<SqlitePool>,
    AppJson(body): AppJson<QuizBody>,
) -> ApiResponse<NextQuestion> {
    let category = body
        .quiz_category
        .and_then(|c| c.id)
        .ok_or(ApiError::BadRequest)?
        .0;
    let previous: Vec<i64> = body
        .previous_questions
        .ok_or(ApiError::BadRequest)?
        .into_iter()
        .map(|id| id.0)
        .collect();

    let questions = if category == ALL_CATEGORIES {
        get_all_questions(&pool).await
    } else {
        get_questions_for_category(&pool, category).await
    }
    .map_err(ApiError::unprocessable)?;

    let candidates = quiz::candidates(questions, &previous, category);
    let question = quiz::pick(&candidates, &mut rand::thread_rng());
    tracing::debug!(
        category,
        asked = previous.len(),
        remaining = candidates.len(),
        "Selected quiz question"
    );

    if question.is_some() {
        let label = if category == ALL_CATEGORIES {
            "all".to_owned()
        } else {
            category.to_string()
        };
        QUIZ_QUESTIONS_CNTR.with_label_values(&[label.as_str()]).inc();
    }

    Ok(Json(NextQuestion {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
