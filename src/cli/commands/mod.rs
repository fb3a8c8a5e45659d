//! One module per subcommand, each exposing an `execute` function.

pub mod completions;
pub mod export;
pub mod inspect;
pub mod open;
pub mod version;
