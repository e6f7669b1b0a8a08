use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{AppError, AppResult},
    models::CelebrityNews,
};

/// Celebrities sampled when no name is given
const RANDOM_CELEBRITIES: usize = 3;

/// Headlines for a named celebrity, or a random mix when `name` is absent
///
/// A given name is trimmed and title-cased before lookup, so `"taylor swift"`
/// finds `"Taylor Swift"`. The random mix holds one headline from each of
/// three distinct celebrities.
pub fn headlines<G>(
    celebrities: &[CelebrityNews],
    name: Option<&str>,
    rng: &mut G,
) -> AppResult<Vec<String>>
where
    G: Rng + ?Sized,
{
    match name.filter(|n| !n.is_empty()) {
        Some(name) => {
            let key = title_case(name.trim());
            celebrities
                .iter()
                .find(|c| c.name == key)
                .map(|c| c.headlines.clone())
                .ok_or_else(|| AppError::NotFound("Celebrity not found.".to_string()))
        }
        None => Ok(celebrities
            .choose_multiple(rng, RANDOM_CELEBRITIES)
            .filter_map(|c| c.headlines.choose(rng).cloned())
            .collect()),
    }
}

/// Upper-cases the first letter of each alphabetic run and lower-cases the rest
fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_alpha = false;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_is_alpha {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_is_alpha = true;
        } else {
            result.push(ch);
            previous_is_alpha = false;
        }
    }

    result
}
