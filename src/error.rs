use thiserror::Error;

pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("widget is already mounted")]
    AlreadyMounted,

    #[error("widget is not mounted")]
    NotMounted,

    #[error("element binding failed: {0}")]
    Binding(String),

    #[error("chart render failed: {0}")]
    Render(String),

    #[error("config serialization failed: {0}")]
    Config(#[from] serde_json::Error),
}
