#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Unsupported type '{type_name}' at {path}")]
    UnsupportedType { type_name: &'static str, path: String },

    #[error("nesting deeper than {limit} tables at {path}")]
    DepthExceeded { limit: usize, path: String },

    #[error("write error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl RenderError {
    /// Relocate the error to `path`.
    ///
    /// Errors raised by a standalone [`classify`](crate::classify) call carry
    /// the root path `$`; the renderer replaces it with the real location.
    pub fn at(self, path: impl Into<String>) -> Self {
        match self {
            RenderError::UnsupportedType { type_name, .. } => RenderError::UnsupportedType {
                type_name,
                path: path.into(),
            },
            RenderError::DepthExceeded { limit, .. } => RenderError::DepthExceeded {
                limit,
                path: path.into(),
            },
            other => other,
        }
    }

    /// Location of the offending value, if the error has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            RenderError::UnsupportedType { path, .. } | RenderError::DepthExceeded { path, .. } => Some(path),
            RenderError::Fmt(_) => None,
        }
    }
}
