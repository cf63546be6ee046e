use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use serde::Deserialize;
use tabledump_engine::RenderOptions;

use super::error::DumpError;

// ═══════════════════════════════════════════════════════════════
//  Config file (TOML)
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub format: Option<InputFormat>,
    pub document: Option<bool>,
    #[serde(default)]
    pub render: RenderOptions,
}

pub fn load_config(path: &str) -> Result<Config, DumpError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| DumpError::Config(format!("cannot read config {path}: {e}")))?;
    toml::from_str(&content).map_err(|e| DumpError::Config(format!("bad config {path}: {e}")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Guess from the file extension; JSON otherwise.
    pub fn detect(path: Option<&Path>) -> Self {
        match path.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InputFormat::Json => "JSON",
            InputFormat::Toml => "TOML",
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  CLI args
// ═══════════════════════════════════════════════════════════════

#[derive(Args, Clone, Debug, Default)]
pub struct DumpArgs {
    /// Input file; `-` or nothing reads stdin
    pub input: Option<String>,

    /// Path to tabledump.toml
    #[arg(long, default_value = "tabledump.toml", env = "TABLEDUMP_CONFIG")]
    pub config: String,

    /// Input format (default: from the file extension, else json)
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,

    /// Output file (default: stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Wrap the tables in a complete HTML document
    #[arg(long)]
    pub document: bool,

    /// Indent nested elements
    #[arg(long)]
    pub pretty: bool,

    /// Fail when tables nest deeper than this
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Document title; only meaningful with --document
    #[arg(long, requires = "document")]
    pub title: Option<String>,
}

// ═══════════════════════════════════════════════════════════════
//  Effective — merged config
// ═══════════════════════════════════════════════════════════════

/// Final settings: tabledump.toml < CLI.
#[derive(Debug)]
pub struct Effective {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: InputFormat,
    pub document: bool,
    pub render: RenderOptions,
}

impl Effective {
    pub fn new(args: &DumpArgs) -> Result<Self, DumpError> {
        let cfg = match load_config(&args.config) {
            Ok(c) => c,
            Err(e) => {
                if Path::new(&args.config).exists() {
                    return Err(e);
                }
                Config::default()
            }
        };

        let input = args.input.as_deref().filter(|p| *p != "-").map(PathBuf::from);
        let format = args
            .format
            .or(cfg.format)
            .unwrap_or_else(|| InputFormat::detect(input.as_deref()));

        let mut render = cfg.render;
        render.pretty = args.pretty || render.pretty;
        render.max_depth = args.max_depth.or(render.max_depth);
        if let Some(title) = &args.title {
            render.title = title.clone();
        }

        Ok(Self {
            input,
            output: args.output.clone(),
            format,
            document: args.document || cfg.document.unwrap_or(false),
            render,
        })
    }
}
