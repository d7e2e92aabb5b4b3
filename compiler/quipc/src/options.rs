//! Command-line options for `quip run`.

use quip_diagnostic::ColorMode;

/// Script run when `quip run` is given no file.
pub const DEFAULT_SCRIPT: &str = "script.txt";

/// Options that change how a script is run and reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Color mode for diagnostics.
    pub color: ColorMode,
    /// Print the final bindings to stderr after a successful run.
    pub dump_symbols: bool,
}

/// Parsed arguments following a subcommand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandLine {
    pub options: RunOptions,
    /// First non-flag argument.
    pub path: Option<String>,
    /// Flags that were not recognised. The caller warns about these.
    pub unknown: Vec<String>,
}

impl CommandLine {
    /// The script path, falling back to [`DEFAULT_SCRIPT`].
    pub fn path_or_default(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_SCRIPT)
    }
}

/// Parse the arguments after the subcommand name.
pub fn parse_run_options(args: &[String]) -> CommandLine {
    let mut cmd = CommandLine::default();

    for arg in args {
        if let Some(mode) = arg.strip_prefix("--color=") {
            match ColorMode::from_flag(mode) {
                Some(color) => cmd.options.color = color,
                None => cmd.unknown.push(arg.clone()),
            }
        } else if arg == "--dump-symbols" {
            cmd.options.dump_symbols = true;
        } else if arg.starts_with('-') {
            cmd.unknown.push(arg.clone());
        } else if cmd.path.is_none() {
            cmd.path = Some(arg.clone());
        } else {
            cmd.unknown.push(arg.clone());
        }
    }

    cmd
}
