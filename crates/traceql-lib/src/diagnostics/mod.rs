mod collection;
mod marker;
mod message;
mod printer;


pub use collection::Diagnostics;
pub use marker::{ColumnBase, LineIndex, Marker};
pub use message::{Diagnostic, Severity};
pub use printer::DiagnosticsPrinter;
