//! Terminal client: argument parsing, the interactive menu, and printing.
//! Not part of the library API.

pub mod args;
pub mod input;
pub mod print;
pub mod shell;
