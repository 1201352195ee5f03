use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(about = "Split a text file into numeric, identifier, operator, quoted and whitespace tokens")]
pub struct Options {
    /// The file to scan
    pub file: PathBuf,
    #[clap(short, long, default_value_t = 1)]
    pub verbose: usize,
    /// Only print tokens that are not whitespace
    #[clap(short, long)]
    pub significant: bool,
    /// Also print the contents of quoted tokens without their quotes
    #[clap(short, long)]
    pub unquote: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::parse_from(["stokenizer", "input.txt"]);

        assert_eq!(options.file, PathBuf::from("input.txt"));
        assert_eq!(options.verbose, 1);
        assert!(!options.significant);
        assert!(!options.unquote);
    }

    #[test]
    fn flags() {
        let options = Options::parse_from(["stokenizer", "-s", "-u", "-v", "3", "input.txt"]);

        assert_eq!(options.verbose, 3);
        assert!(options.significant);
        assert!(options.unquote);
    }
}
