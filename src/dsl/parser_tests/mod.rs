use crate::ir::{Diagnostics, Ir};

use super::parse;

mod diagnostic_tests;
mod section_tests;

fn parse_ok(input: &str) -> Ir {
    match parse(input) {
        Ok(ir) => ir,
        Err(diags) => panic!("expected successful parse, got: {:?}", diags.into_vec()),
    }
}

fn parse_err(input: &str) -> Diagnostics {
    match parse(input) {
        Ok(ir) => panic!("expected diagnostics, got IR: {ir:?}"),
        Err(diags) => diags,
    }
}
