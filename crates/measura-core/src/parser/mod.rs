//! Command-line parser using pest

mod ast;

pub use ast::{BinaryOp, Command, Measure};

use pest::error::LineColLocation;
use pest::Parser;
use pest_derive::Parser;

use crate::error::{MeasureError, Result};

#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
pub struct CommandParser;

/// Parse a single command line
pub fn parse_line(input: &str) -> Result<Command> {
    let pairs = CommandParser::parse(Rule::line, input).map_err(|e| {
        let column = match e.line_col {
            LineColLocation::Pos((_, col)) | LineColLocation::Span((_, col), _) => col,
        };
        MeasureError::Parse(format!("{} at column {column}", e.variant.message()))
    })?;
    ast::build_command(pairs)
}

/// Parse a bare number; commas are accepted only as thousands separators
pub(crate) fn parse_number(input: &str) -> Option<f64> {
    let mut pairs = CommandParser::parse(Rule::number_input, input).ok()?;
    let number = pairs.next()?.into_inner().next()?;
    ast::parse_number_str(number.as_str()).ok()
}
