pub mod convert;
pub mod markup;
pub mod object;
pub mod value;

pub use markup::{Cell, CellKind, Node, Row, Table};
pub use object::Object;
pub use value::Value;
