//! Library side of the `uilayout` command-line tool.

pub mod layout;
pub mod logging;
