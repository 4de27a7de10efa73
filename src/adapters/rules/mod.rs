//! Rule table sources.

mod file_rule_source;

pub use file_rule_source::{load_rule_table, rule_table_from, RuleSourceError};
