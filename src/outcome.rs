use crate::error::GrammarError;

/// The result of one parse attempt
///
/// A failure carries nothing: not the position, not what was expected. The
/// caller still holds the cursor it passed in, so there is nothing to restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<O, C> {
    Success { value: O, rest: C },
    Failure,
}

/// What every parser returns
///
/// The `Err` arm is reserved for a broken grammar; an input that simply does
/// not match is `Ok(Outcome::Failure)`.
pub type ParseResult<O, C> = Result<Outcome<O, C>, GrammarError>;

impl<O, C> Outcome<O, C> {
    pub fn success(value: O, rest: C) -> Self {
        Outcome::Success { value, rest }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure)
    }

    pub fn value(&self) -> Option<&O> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure => None,
        }
    }

    pub fn rest(&self) -> Option<&C> {
        match self {
            Outcome::Success { rest, .. } => Some(rest),
            Outcome::Failure => None,
        }
    }

    pub fn into_success(self) -> Option<(O, C)> {
        match self {
            Outcome::Success { value, rest } => Some((value, rest)),
            Outcome::Failure => None,
        }
    }

    /// Transform the produced value, keeping the remaining cursor
    pub fn map<U>(self, f: impl FnOnce(O) -> U) -> Outcome<U, C> {
        match self {
            Outcome::Success { value, rest } => Outcome::Success {
                value: f(value),
                rest,
            },
            Outcome::Failure => Outcome::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let outcome = Outcome::success('a', 1usize);

        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.value(), Some(&'a'));
        assert_eq!(outcome.rest(), Some(&1));
        assert_eq!(outcome.into_success(), Some(('a', 1)));
    }

    #[test]
    fn test_failure_accessors() {
        let outcome: Outcome<char, usize> = Outcome::Failure;

        assert!(outcome.is_failure());
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.rest(), None);
        assert_eq!(outcome.into_success(), None);
    }

    #[test]
    fn test_map_keeps_rest() {
        let outcome = Outcome::success(21, 4usize).map(|n| n * 2);
        assert_eq!(outcome, Outcome::success(42, 4));

        let failed: Outcome<i32, usize> = Outcome::Failure;
        assert_eq!(failed.map(|n| n * 2), Outcome::Failure);
    }
}
