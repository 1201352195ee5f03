use std::fs;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use stokenizer::{
    scanner::{self, navigator, Token, TokenKind},
    source_map,
};

use crate::commandline::Options;

mod commandline;

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .module("stokenizer")
        .verbosity(options.verbose)
        .init()?;

    let content = fs::read_to_string(&options.file)
        .with_context(|| format!("Unable to read {}", options.file.display()))?;

    info!("Scanning {} ({} bytes)", options.file.display(), content.len());

    let tokens = match scanner::scan_default(&content) {
        Ok(tokens) => tokens,
        Err(errors) => {
            for err in errors.iter() {
                eprintln!("{}\n", source_map::render_error(err, &content));
            }
            bail!(
                "Found {} unrecognised character(s) in {}",
                errors.len(),
                options.file.display()
            );
        }
    };

    if options.significant {
        let mut next = navigator::first(&tokens);
        while let Ok((token, index)) = next {
            print_token(token, options.unquote);
            next = navigator::advance(&tokens, index);
        }
    } else {
        for token in tokens.iter() {
            print_token(token, options.unquote);
        }
    }

    Ok(())
}

fn print_token(token: &Token, unquote: bool) {
    println!("{:?}", token);
    if unquote && token.kind == TokenKind::Quoted {
        println!("    {:?}", token.unquoted());
    }
}
