//! HTML serialisation of the markup tree.
//!
//! Text in data cells and at the top level is wrapped in `<div>`, header
//! text is written bare. Every table gets a `<tbody>`, even an empty one.

use std::fmt::{self, Write};

use tabledump_api::{Cell, CellKind, Node, Row, Table};

use crate::config::RenderOptions;
use crate::error::RenderError;

/// Serialise `node` to a string.
pub fn to_html(node: &Node, opts: &RenderOptions) -> Result<String, RenderError> {
    let mut out = String::new();
    write_html(&mut out, node, opts)?;
    Ok(out)
}

/// Serialise `node` into any [`fmt::Write`] sink.
pub fn write_html<W: Write>(out: &mut W, node: &Node, opts: &RenderOptions) -> fmt::Result {
    HtmlWriter {
        out,
        pretty: opts.pretty,
        level: 0,
    }
    .node(node)
}

/// Escape text for element content and double-quoted attributes.
pub fn escape_into<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    let mut last = 0;
    for (i, c) in s.char_indices() {
        let entity = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#39;",
            _ => continue,
        };
        out.write_str(&s[last..i])?;
        out.write_str(entity)?;
        last = i + c.len_utf8();
    }
    out.write_str(&s[last..])
}

struct HtmlWriter<'w, W: Write> {
    out: &'w mut W,
    pretty: bool,
    level: usize,
}

impl<W: Write> HtmlWriter<'_, W> {
    fn node(&mut self, node: &Node) -> fmt::Result {
        match node {
            Node::Text(text) => {
                self.indent()?;
                self.div(text)?;
                self.newline()
            }
            Node::Table(table) => self.table(table),
        }
    }

    fn table(&mut self, table: &Table) -> fmt::Result {
        self.open("table", table.class.as_deref())?;
        if let Some(head) = &table.head {
            self.open("thead", None)?;
            self.row(head)?;
            self.close("thead")?;
        }
        self.open("tbody", None)?;
        for row in &table.body {
            self.row(row)?;
        }
        self.close("tbody")?;
        self.close("table")
    }

    fn row(&mut self, row: &Row) -> fmt::Result {
        self.open("tr", None)?;
        for cell in &row.cells {
            self.cell(cell)?;
        }
        self.close("tr")
    }

    fn cell(&mut self, cell: &Cell) -> fmt::Result {
        let tag = match cell.kind {
            CellKind::Header => "th",
            CellKind::Data => "td",
        };
        self.indent()?;
        write!(self.out, "<{tag}")?;
        if let Some(span) = cell.colspan {
            write!(self.out, " colspan=\"{span}\"")?;
        }
        self.out.write_char('>')?;
        match (&cell.content, cell.kind) {
            (Node::Text(text), CellKind::Header) => escape_into(self.out, text)?,
            (Node::Text(text), CellKind::Data) => self.div(text)?,
            (Node::Table(table), _) => {
                self.newline()?;
                self.level += 1;
                self.table(table)?;
                self.level -= 1;
                self.indent()?;
            }
        }
        write!(self.out, "</{tag}>")?;
        self.newline()
    }

    fn div(&mut self, text: &str) -> fmt::Result {
        self.out.write_str("<div>")?;
        escape_into(self.out, text)?;
        self.out.write_str("</div>")
    }

    fn open(&mut self, tag: &str, class: Option<&str>) -> fmt::Result {
        self.indent()?;
        write!(self.out, "<{tag}")?;
        if let Some(class) = class {
            self.out.write_str(" class=\"")?;
            escape_into(self.out, class)?;
            self.out.write_char('"')?;
        }
        self.out.write_char('>')?;
        self.newline()?;
        self.level += 1;
        Ok(())
    }

    fn close(&mut self, tag: &str) -> fmt::Result {
        self.level -= 1;
        self.indent()?;
        write!(self.out, "</{tag}>")?;
        self.newline()
    }

    fn indent(&mut self) -> fmt::Result {
        if self.pretty {
            for _ in 0..self.level {
                self.out.write_str("  ")?;
            }
        }
        Ok(())
    }

    fn newline(&mut self) -> fmt::Result {
        if self.pretty {
            self.out.write_char('\n')?;
        }
        Ok(())
    }
}
