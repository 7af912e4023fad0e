use thiserror::Error;

use crate::core::SeriesInput;

/// Declarative property-check failures.
///
/// These are reported, never enforced: the widget logs them and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropValidationError {
    #[error("required property `{0}` is missing")]
    MissingRequired(&'static str),
}

/// Inputs a host passes down on every render cycle.
#[derive(Debug, Clone, Default)]
pub struct WidgetProps {
    pub data: Option<SeriesInput>,
}

impl WidgetProps {
    #[must_use]
    pub fn new(data: impl Into<SeriesInput>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), PropValidationError> {
        if self.data.is_none() {
            return Err(PropValidationError::MissingRequired("data"));
        }
        Ok(())
    }
}
