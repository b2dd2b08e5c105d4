use sarge::prelude::*;

use crate::cli::InputArgs;
use crate::error::CliError;

impl InputArgs {
    /// Parse the input flags with `sarge`.
    ///
    /// `argv` includes the program name as its first element, like
    /// `std::env::args()`.
    pub fn from_sarge(argv: &[String]) -> Result<Self, CliError> {
        let mut reader = ArgumentReader::new();

        let stdin_ref = reader.add::<bool>(tag::long("stdin"));
        let verbose_ref = reader.add::<bool>(tag::both('v', "verbose"));
        let config_ref = reader.add::<String>(tag::long("config"));

        let args = reader
            .parse_provided(argv, std::iter::empty::<(String, String)>())
            .map_err(|e| CliError::Parse(e.to_string()))?;

        Ok(InputArgs {
            stdin: matches!(stdin_ref.get(&args), Some(Ok(true))),
            verbose: matches!(verbose_ref.get(&args), Some(Ok(true))),
            config: config_ref.get(&args).and_then(Result::ok),
            // sarge keeps the program name at the head of the remainder.
            files: args.remainder().iter().skip(1).cloned().collect(),
        })
    }
}
