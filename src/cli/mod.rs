//! Command-line layer: argument types, the command dispatcher and the
//! interactive session.

pub mod dispatcher;
pub mod main_types;
pub mod session;
