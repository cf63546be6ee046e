use std::io::{Read, Write};

use tabledump_api::Value;
use tabledump_engine::{render_document, render_html};

use super::config::{Effective, InputFormat};
use super::error::DumpError;

pub fn run(args: &Effective) -> Result<(), DumpError> {
    let source = read_input(args)?;
    let value = parse(&source, args.format)?;

    let html = if args.document {
        render_document(&value, &args.render)?
    } else {
        render_html(&value, &args.render)?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, html.as_bytes())?;
            tracing::info!(path = %path.display(), bytes = html.len(), "wrote html");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            if !html.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}

fn read_input(args: &Effective) -> Result<String, DumpError> {
    match &args.input {
        Some(path) => std::fs::read_to_string(path).map_err(|source| DumpError::Input {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| DumpError::Input {
                    path: "<stdin>".into(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

pub fn parse(source: &str, format: InputFormat) -> Result<Value, DumpError> {
    let parse_err = |detail: String| DumpError::Parse {
        format: format.name(),
        detail,
    };
    let value = match format {
        InputFormat::Json => serde_json::from_str::<serde_json::Value>(source)
            .map(Value::from)
            .map_err(|e| parse_err(e.to_string()))?,
        InputFormat::Toml => toml::from_str::<toml::Value>(source)
            .map(Value::from)
            .map_err(|e| parse_err(e.to_string()))?,
    };
    tracing::debug!(format = format.name(), bytes = source.len(), "parsed input");
    Ok(value)
}
