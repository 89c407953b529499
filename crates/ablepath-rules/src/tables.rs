//! Built-in rule tables, used when no rule file is configured.

pub mod categories;
pub mod codes;
pub mod consistency;
pub mod sentiment;
