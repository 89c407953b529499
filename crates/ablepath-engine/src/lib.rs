//! ablepath-engine
//!
//! The scoring core. Every function here is pure: it reads the injected
//! [`RuleSet`](ablepath_rules::RuleSet) and its arguments, performs no I/O,
//! and holds no state between calls, so it can be called from any number of
//! request handlers at once.

pub mod effectiveness;
pub mod mapping;
pub mod pipeline;
pub mod ranking;
pub mod sentiment;
pub mod validator;
