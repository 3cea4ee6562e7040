//! Selection of the next quiz question.
//!
//! The server keeps no quiz state: the client sends the ids it has already
//! been asked and the category it plays, and gets one random question back.

use std::collections::HashSet;

use rand::Rng;

use crate::db::Question;

/// Category id meaning "questions from every category".
pub const ALL_CATEGORIES: i64 = 0;

/// Questions not asked yet, restricted to `category` unless it is [`ALL_CATEGORIES`].
pub fn candidates(questions: Vec<Question>, previous: &[i64], category: i64) -> Vec<Question> {
    let previous: HashSet<i64> = previous.iter().copied().collect();
    questions
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .filter(|q| category == ALL_CATEGORIES || q.category == category)
        .collect()
}

pub fn pick<R: Rng + ?Sized>(candidates: &[Question], rng: &mut R) -> Option<Question> {
    if candidates.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..candidates.len());
    candidates.get(index).cloned()
}
