use std::fmt;

pub mod grafikon;
pub mod tabela;

pub use grafikon::Grafikon;
pub use tabela::Tabela;

pub(crate) fn display_or_null<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "null".to_string())
}
