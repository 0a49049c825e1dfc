//! Name to strategy mapping used for menu selection.
//!
//! [`Sort`] and [`Search`] are static capabilities, generic over the element type. The registry
//! needs values it can store and iterate, so it works with the object-safe [`SortStrategy`] and
//! [`SearchStrategy`], which every `Sort`/`Search` implements for `i32` sequences.

use once_cell::sync::Lazy;

use crate::error::SelectionError;
use crate::{searches, sorts, Search, Sort};

/// Sorts an `i32` sequence, see [`Sort`].
pub trait SortStrategy: Send + Sync {
    fn name(&self) -> String;

    /// `false` if [`run`](Self::run) leaves the sequence as it was.
    fn in_place(&self) -> bool;

    fn run(&self, seq: &mut [i32]);
}

impl<S> SortStrategy for S
where
    S: Sort + Send + Sync,
{
    fn name(&self) -> String {
        <S as Sort>::name()
    }

    fn in_place(&self) -> bool {
        S::IN_PLACE
    }

    fn run(&self, seq: &mut [i32]) {
        <S as Sort>::sort(seq);
    }
}

/// Searches an `i32` sequence, see [`Search`].
pub trait SearchStrategy: Send + Sync {
    fn name(&self) -> String;

    /// `true` if the sequence has to be sorted ascending.
    fn requires_sorted(&self) -> bool;

    fn run(&self, seq: &[i32], target: i32) -> Option<usize>;
}

impl<S> SearchStrategy for S
where
    S: Search + Send + Sync,
{
    fn name(&self) -> String {
        <S as Search>::name()
    }

    fn requires_sorted(&self) -> bool {
        S::REQUIRES_SORTED
    }

    fn run(&self, seq: &[i32], target: i32) -> Option<usize> {
        <S as Search>::search(seq, &target)
    }
}

/// Ordered name to strategy mapping. Registration order is display order.
pub struct Registry<S: ?Sized> {
    entries: Vec<(String, Box<S>)>,
}

pub type SortRegistry = Registry<dyn SortStrategy>;
pub type SearchRegistry = Registry<dyn SearchStrategy>;

impl<S: ?Sized> Registry<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends `strategy` under `name`.
    pub fn register(&mut self, name: impl Into<String>, strategy: Box<S>) -> &mut Self {
        self.entries.push((name.into(), strategy));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &S)> + '_ {
        self.entries
            .iter()
            .map(|(name, strategy)| (name.as_str(), &**strategy))
    }

    pub fn get(&self, name: &str) -> Result<&S, SelectionError> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, strategy)| &**strategy)
            .ok_or_else(|| SelectionError::UnknownName(name.to_owned()))
    }

    /// Looks up the entry shown as `ordinal` in a 1-based menu.
    pub fn by_ordinal(&self, ordinal: usize) -> Result<(&str, &S), SelectionError> {
        ordinal
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(|(name, strategy)| (name.as_str(), &**strategy))
            .ok_or(SelectionError::OutOfRange {
                choice: ordinal,
                len: self.len(),
            })
    }

    /// Parses a menu answer and looks it up with [`by_ordinal`](Self::by_ordinal).
    pub fn choice(&self, input: &str) -> Result<(&str, &S), SelectionError> {
        self.by_ordinal(parse_ordinal(input, self.len())?)
    }
}

impl<S: ?Sized> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a 1-based menu answer, which must lie in `1..=len`.
pub fn parse_ordinal(input: &str, len: usize) -> Result<usize, SelectionError> {
    let input = input.trim();
    let choice = input
        .parse::<usize>()
        .map_err(|_| SelectionError::NotANumber(input.to_owned()))?;

    if (1..=len).contains(&choice) {
        Ok(choice)
    } else {
        Err(SelectionError::OutOfRange { choice, len })
    }
}

fn sort_entry<S>(strategy: S) -> (String, Box<dyn SortStrategy>)
where
    S: Sort + Send + Sync + 'static,
{
    let strategy: Box<dyn SortStrategy> = Box::new(strategy);
    (<S as Sort>::name(), strategy)
}

fn search_entry<S>(strategy: S) -> (String, Box<dyn SearchStrategy>)
where
    S: Search + Send + Sync + 'static,
{
    let strategy: Box<dyn SearchStrategy> = Box::new(strategy);
    (<S as Search>::name(), strategy)
}

static SORTS: Lazy<SortRegistry> = Lazy::new(|| {
    let mut registry = SortRegistry::new();

    for (name, strategy) in [
        sort_entry(sorts::insertion::SortImpl),
        sort_entry(sorts::selection::SortImpl),
        sort_entry(sorts::bubble::SortImpl),
        sort_entry(sorts::merge::SortImpl),
        sort_entry(sorts::quick::SortImpl),
        sort_entry(sorts::library::SortImpl),
    ] {
        registry.register(name, strategy);
    }

    registry
});

static SEARCHES: Lazy<SearchRegistry> = Lazy::new(|| {
    let mut registry = SearchRegistry::new();

    for (name, strategy) in [
        search_entry(searches::linear::SearchImpl),
        search_entry(searches::binary::SearchImpl),
        search_entry(searches::library::SearchImpl),
    ] {
        registry.register(name, strategy);
    }

    registry
});

/// Every sorting strategy: insertion, selection, bubble, merge, quick, library.
pub fn sort_registry() -> &'static SortRegistry {
    &SORTS
}

/// Every search strategy: linear, binary, library.
pub fn search_registry() -> &'static SearchRegistry {
    &SEARCHES
}
