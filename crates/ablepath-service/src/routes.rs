pub mod categories;
pub mod codes;
pub mod evaluations;
pub mod extractions;
pub mod health;
pub mod recommendations;
pub mod sentiment;
