pub mod code;
pub mod device;
pub mod effectiveness;
pub mod rating;
pub mod recommendation;
