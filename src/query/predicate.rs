/// Single conjunct evaluated against a record
type Conjunct<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// Conjunction of field constraints over a record type
///
/// An empty predicate accepts every record.
pub struct Predicate<R> {
    conjuncts: Vec<Conjunct<R>>,
}

impl<R> Predicate<R> {
    /// Starts an empty [`PredicateBuilder`]
    pub fn builder() -> PredicateBuilder<R> {
        PredicateBuilder {
            conjuncts: Vec::new(),
        }
    }

    /// Predicate with no constraints
    pub fn accept_all() -> Self {
        Self {
            conjuncts: Vec::new(),
        }
    }

    /// Returns true when every constraint holds for the record
    pub fn matches(&self, record: &R) -> bool {
        self.conjuncts.iter().all(|conjunct| conjunct(record))
    }

    /// Number of constraints in the conjunction
    pub fn len(&self) -> usize {
        self.conjuncts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conjuncts.is_empty()
    }
}

impl<R> Default for Predicate<R> {
    fn default() -> Self {
        Self::accept_all()
    }
}

impl<R> std::fmt::Debug for Predicate<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate")
            .field("constraints", &self.conjuncts.len())
            .finish()
    }
}

/// Builds a [`Predicate`] from optional request parameters
///
/// Every `Some` parameter adds one constraint; `None` and empty strings add
/// nothing. String comparisons are case-insensitive.
///
/// ```
/// use catalog_api::{models::Book, query::Predicate};
///
/// let predicate = Predicate::<Book>::builder()
///     .exact(Some("fantasy"), |b| b.genre.as_str())
///     .contains(None, |b| b.author.as_str())
///     .equals(Some(1930), |b| b.decade)
///     .build();
///
/// assert_eq!(predicate.len(), 2);
/// ```
pub struct PredicateBuilder<R> {
    conjuncts: Vec<Conjunct<R>>,
}

impl<R: 'static> PredicateBuilder<R> {
    /// Full-string match, ignoring case
    pub fn exact(mut self, expected: Option<&str>, field: fn(&R) -> &str) -> Self {
        if let Some(expected) = normalize(expected) {
            let conjunct = move |record: &R| field(record).to_lowercase() == expected;
            self.conjuncts.push(Box::new(conjunct));
        }
        self
    }

    /// Substring match, ignoring case
    pub fn contains(mut self, needle: Option<&str>, field: fn(&R) -> &str) -> Self {
        if let Some(needle) = normalize(needle) {
            let conjunct = move |record: &R| field(record).to_lowercase().contains(&needle);
            self.conjuncts.push(Box::new(conjunct));
        }
        self
    }

    /// Exact equality for non-string fields
    pub fn equals<T>(mut self, expected: Option<T>, field: fn(&R) -> T) -> Self
    where
        T: PartialEq + Send + Sync + 'static,
    {
        if let Some(expected) = expected {
            let conjunct = move |record: &R| field(record) == expected;
            self.conjuncts.push(Box::new(conjunct));
        }
        self
    }

    pub fn build(self) -> Predicate<R> {
        Predicate {
            conjuncts: self.conjuncts,
        }
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(|v| v.to_lowercase())
}
