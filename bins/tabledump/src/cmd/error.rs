use tabledump_engine::RenderError;

#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("{0}")]
    Config(String),

    #[error("cannot read {path}: {source}")]
    Input { path: String, source: std::io::Error },

    #[error("bad {format} input: {detail}")]
    Parse { format: &'static str, detail: String },

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
