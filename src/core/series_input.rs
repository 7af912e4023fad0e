use std::ops::Deref;
use std::rc::Rc;

/// Externally owned series handed to the widget each render cycle.
///
/// Cloning shares the allocation. Change detection compares allocations,
/// never contents: two inputs holding equal values are still different
/// inputs unless one was cloned from the other.
#[derive(Debug, Clone)]
pub struct SeriesInput(Rc<[f64]>);

impl SeriesInput {
    #[must_use]
    pub fn new(values: impl Into<Rc<[f64]>>) -> Self {
        Self(values.into())
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Reference identity: `true` only when both point at the same allocation.
    #[must_use]
    pub fn same_reference(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SeriesInput {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<f64>> for SeriesInput {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl<const N: usize> From<[f64; N]> for SeriesInput {
    fn from(values: [f64; N]) -> Self {
        Self::new(values.to_vec())
    }
}

/// Identity comparison over optional inputs.
///
/// Two absent inputs count as the same reference.
#[must_use]
pub fn same_input(previous: Option<&SeriesInput>, current: Option<&SeriesInput>) -> bool {
    match (previous, current) {
        (None, None) => true,
        (Some(previous), Some(current)) => previous.same_reference(current),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_shares_reference() {
        let input = SeriesInput::from(vec![1.0, 2.0, 3.0]);
        let shared = input.clone();
        assert!(input.same_reference(&shared));
    }

    #[test]
    fn equal_contents_are_distinct_references() {
        let first = SeriesInput::from([1.0, 2.0, 3.0]);
        let second = SeriesInput::from([1.0, 2.0, 3.0]);
        assert_eq!(first.values(), second.values());
        assert!(!first.same_reference(&second));
    }

    #[test]
    fn absent_inputs_compare() {
        let input = SeriesInput::from([1.0]);
        assert!(same_input(None, None));
        assert!(!same_input(None, Some(&input)));
        assert!(!same_input(Some(&input), None));
        assert!(same_input(Some(&input), Some(&input)));
    }
}
