//! Markup tree produced by the renderer.
//!
//! Only the shapes a dump needs: tables, rows, header/data cells and text.
//! Serialisation to HTML lives in the engine.

/// Node of the markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Table(Table),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(s) => Some(s),
            Node::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Node::Table(t) => Some(t),
            Node::Text(_) => None,
        }
    }

    /// Number of tables in this subtree, this node included.
    pub fn table_count(&self) -> usize {
        match self {
            Node::Text(_) => 0,
            Node::Table(t) => {
                1 + t
                    .head
                    .iter()
                    .chain(t.body.iter())
                    .flat_map(|row| row.cells.iter())
                    .map(|cell| cell.content.table_count())
                    .sum::<usize>()
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Value of the `class` attribute.
    pub class: Option<String>,
    /// Column header row, present only for column layouts.
    pub head: Option<Row>,
    pub body: Vec<Row>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Header,
    Data,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub kind: CellKind,
    /// Columns spanned, when more than one.
    pub colspan: Option<usize>,
    pub content: Node,
}

impl Cell {
    pub fn header(text: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Header,
            colspan: None,
            content: Node::Text(text.into()),
        }
    }

    pub fn data(content: Node) -> Self {
        Self {
            kind: CellKind::Data,
            colspan: None,
            content,
        }
    }

    pub fn with_colspan(mut self, span: usize) -> Self {
        self.colspan = (span > 1).then_some(span);
        self
    }
}
