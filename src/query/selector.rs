use rand::{seq::SliceRandom, Rng};

use super::Predicate;

/// Returned when no record satisfies the predicate
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no records matched the given filters")]
pub struct NoMatches;

/// Filters the dataset, shuffles the matches and keeps at most `limit` of them
///
/// Every permutation of the matching records is equally likely, so the result
/// is a uniform sample without replacement.
pub fn select<R, G>(
    dataset: &[R],
    predicate: &Predicate<R>,
    limit: usize,
    rng: &mut G,
) -> Result<Vec<R>, NoMatches>
where
    R: Clone,
    G: Rng + ?Sized,
{
    let mut matched: Vec<R> = dataset
        .iter()
        .filter(|record| predicate.matches(record))
        .cloned()
        .collect();

    if matched.is_empty() {
        return Err(NoMatches);
    }

    matched.shuffle(rng);
    matched.truncate(limit);

    Ok(matched)
}
