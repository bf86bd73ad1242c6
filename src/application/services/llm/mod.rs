//! Helpers for talking to the text-generation server

pub mod response_parser;

pub use response_parser::ParseIssue;
