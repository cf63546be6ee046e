use std::borrow::Cow;

use tabledump_api::{Cell, Node, Object, Row, Table, Value};

use crate::classify::{array_cell, classify, Classified};
use crate::config::RenderOptions;
use crate::error::RenderError;
use crate::html::{escape_into, to_html};

static UNDEFINED: Value = Value::Undefined;

/// Render with default options.
pub fn render(value: &Value) -> Result<Node, RenderError> {
    render_with(value, &RenderOptions::default())
}

/// Render a value into a markup tree.
///
/// Fails as a whole on the first unsupported value; no partial tree is
/// returned.
pub fn render_with(value: &Value, opts: &RenderOptions) -> Result<Node, RenderError> {
    let mut renderer = Renderer {
        opts,
        path: Vec::new(),
    };
    let node = renderer.node(value, 0)?;
    tracing::debug!(tables = node.table_count(), "rendered value");
    Ok(node)
}

/// Render straight to an HTML fragment.
pub fn render_html(value: &Value, opts: &RenderOptions) -> Result<String, RenderError> {
    to_html(&render_with(value, opts)?, opts)
}

/// Render to a standalone HTML5 document titled `opts.title`.
pub fn render_document(value: &Value, opts: &RenderOptions) -> Result<String, RenderError> {
    let fragment = render_html(value, opts)?;
    let mut doc = String::with_capacity(fragment.len() + 160);
    doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>");
    escape_into(&mut doc, &opts.title)?;
    doc.push_str("</title>\n</head>\n<body>\n");
    doc.push_str(fragment.trim_end());
    doc.push_str("\n</body>\n</html>\n");
    Ok(doc)
}

enum Segment<'a> {
    Key(Cow<'a, str>),
    Index(usize),
}

struct Renderer<'a> {
    opts: &'a RenderOptions,
    /// Location of the value being rendered, for error reports.
    path: Vec<Segment<'a>>,
}

impl<'a> Renderer<'a> {
    fn node(&mut self, value: &'a Value, depth: usize) -> Result<Node, RenderError> {
        let classified = classify(value).map_err(|e| e.at(self.path_string()))?;
        match classified {
            Classified::Scalar(text) => Ok(Node::Text(text)),
            Classified::Keyed(obj) => {
                self.check_depth(depth)?;
                self.keyed(obj, depth + 1)
            }
            Classified::RowSet { rows, columns } => {
                self.check_depth(depth)?;
                if columns.is_empty() {
                    self.single_cell_rows(rows, depth + 1)
                } else {
                    self.column_rows(rows, &columns, depth + 1)
                }
            }
        }
    }

    fn keyed(&mut self, obj: &'a Object, depth: usize) -> Result<Node, RenderError> {
        let mut body = Vec::with_capacity(obj.len());
        for (key, value) in obj.entries() {
            self.path.push(Segment::Key(Cow::Borrowed(key)));
            let content = self.node(value, depth)?;
            self.path.pop();
            body.push(Row::new(vec![Cell::header(key), Cell::data(content)]));
        }
        Ok(Node::Table(Table {
            class: self.opts.keyed_class.clone(),
            head: None,
            body,
        }))
    }

    fn column_rows(
        &mut self,
        rows: &'a [Value],
        columns: &[Cow<'a, str>],
        depth: usize,
    ) -> Result<Node, RenderError> {
        let head = Row::new(columns.iter().map(|key| Cell::header(key.as_ref())).collect());
        let mut body = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            self.path.push(Segment::Index(idx));
            let cells = match row {
                Value::Object(obj) => {
                    let mut cells = Vec::with_capacity(columns.len());
                    for key in columns {
                        self.path.push(Segment::Key(key.clone()));
                        let value = obj.get(key).unwrap_or(&UNDEFINED);
                        cells.push(Cell::data(self.node(value, depth)?));
                        self.path.pop();
                    }
                    cells
                }
                Value::Array(items) => {
                    let mut cells = Vec::with_capacity(columns.len());
                    for key in columns {
                        let content = match array_cell(items, key) {
                            Some((pos, value)) => {
                                self.path.push(Segment::Index(pos));
                                let content = self.node(value, depth)?;
                                self.path.pop();
                                content
                            }
                            None => self.node(&UNDEFINED, depth)?,
                        };
                        cells.push(Cell::data(content));
                    }
                    cells
                }
                // Scalar: rendered on its own, across the full width.
                other => vec![Cell::data(self.node(other, depth)?).with_colspan(columns.len())],
            };
            self.path.pop();
            body.push(Row::new(cells));
        }
        Ok(Node::Table(Table {
            class: self.opts.rows_class.clone(),
            head: Some(head),
            body,
        }))
    }

    fn single_cell_rows(&mut self, rows: &'a [Value], depth: usize) -> Result<Node, RenderError> {
        let mut body = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            self.path.push(Segment::Index(idx));
            body.push(Row::new(vec![Cell::data(self.node(row, depth)?)]));
            self.path.pop();
        }
        Ok(Node::Table(Table {
            class: self.opts.rows_class.clone(),
            head: None,
            body,
        }))
    }

    fn check_depth(&self, depth: usize) -> Result<(), RenderError> {
        match self.opts.max_depth {
            Some(limit) if depth >= limit => Err(RenderError::DepthExceeded {
                limit,
                path: self.path_string(),
            }),
            _ => Ok(()),
        }
    }

    /// `$`, `$.a`, `$[0].b`, `$["odd key"]`.
    fn path_string(&self) -> String {
        let mut s = String::from("$");
        for segment in &self.path {
            match segment {
                Segment::Index(idx) => s.push_str(&format!("[{idx}]")),
                Segment::Key(key) if is_identifier(key) => {
                    s.push('.');
                    s.push_str(key);
                }
                Segment::Key(key) => s.push_str(&format!("[{key:?}]")),
            }
        }
        s
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(node: &Node) -> &str {
        node.as_text().expect("text node")
    }

    #[test]
    fn nested_object_path_in_error() {
        let value = Value::object([(
            "rows",
            Value::array([Value::object([("odd key", Value::Function(None))])]),
        )]);
        let err = render(&value).unwrap_err();
        assert_eq!(err.path(), Some("$.rows[0][\"odd key\"]"));
    }

    #[test]
    fn scalar_inside_single_cell_rows_error_path() {
        let value = Value::array([Value::from(1), Value::Function(Some("cb".into()))]);
        let err = render(&value).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedType { .. }));
        assert_eq!(err.path(), Some("$[1]"));
    }

    #[test]
    fn depth_limit() {
        let value = Value::object([("a", Value::object([("b", Value::object([("c", 1)]))]))]);
        let opts = RenderOptions {
            max_depth: Some(2),
            ..RenderOptions::default()
        };
        let err = render_with(&value, &opts).unwrap_err();
        assert!(matches!(err, RenderError::DepthExceeded { limit: 2, .. }));
        assert_eq!(err.path(), Some("$.a.b"));

        let opts = RenderOptions {
            max_depth: Some(3),
            ..RenderOptions::default()
        };
        assert!(render_with(&value, &opts).is_ok());
    }

    #[test]
    fn depth_limit_ignores_scalars() {
        let opts = RenderOptions {
            max_depth: Some(0),
            ..RenderOptions::default()
        };
        let node = render_with(&Value::from("x"), &opts).unwrap();
        assert_eq!(text(&node), "x");
        assert!(render_with(&Value::array([1]), &opts).is_err());
    }

    #[test]
    fn array_row_error_path() {
        let value = Value::array([Value::array([Value::from(1), Value::Function(None)])]);
        let err = render(&value).unwrap_err();
        assert_eq!(err.path(), Some("$[0][1]"));
    }

    #[test]
    fn mixed_row_spans_columns() {
        let value = Value::array([Value::object([("a", 1), ("b", 2)]), Value::from("loose")]);
        let node = render(&value).unwrap();
        let table = node.as_table().unwrap();
        let loose = &table.body[1].cells;
        assert_eq!(loose.len(), 1);
        assert_eq!(loose[0].colspan, Some(2));
        assert_eq!(text(&loose[0].content), "loose");
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("abc_1"));
        assert!(is_identifier("$x"));
        assert!(!is_identifier("1a"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier(""));
    }
}
