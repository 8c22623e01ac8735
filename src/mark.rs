//! Main module for mark library functionality

pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod processor;
pub mod testing;
