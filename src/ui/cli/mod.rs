pub mod args;
pub mod check;
pub mod probe;
pub mod schema;
