use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{AppError, AppResult},
    models::{TriviaBank, TriviaItem},
};

/// Category used when the caller does not name one
pub const DEFAULT_CATEGORY: &str = "general";

/// Picks one question uniformly at random from `category`
///
/// Category names are matched after lowercasing.
pub fn random_question<G>(
    bank: &TriviaBank,
    category: Option<&str>,
    rng: &mut G,
) -> AppResult<TriviaItem>
where
    G: Rng + ?Sized,
{
    let category = category.unwrap_or(DEFAULT_CATEGORY).to_lowercase();

    let Some(items) = bank.category(&category) else {
        let message = format!("Category '{}' not found.", category);
        return Err(AppError::NotFound(message));
    };

    let Some(item) = items.choose(rng) else {
        let message = format!("Trivia category '{}' has no questions", category);
        return Err(AppError::Internal(message));
    };

    Ok(item.clone())
}
