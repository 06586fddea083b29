use std::path::PathBuf;

use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command};
use literate_regex::parser::DescribeParams;
use literate_regex::CompilerParams;

#[derive(Debug)]
pub enum ExecutionMode {
    /// Print the normalized source.
    Normalize(InputOptions),

    /// Print the pattern and flags of the literal.
    Parse(InputOptions),

    /// Print the description of the source.
    Describe {
        input: InputOptions,
        params: DescribeParams,
    },

    /// Compile the source and print its matches on a text.
    Exec {
        input: InputOptions,
        params: CompilerParams,
        text: String,
    },

    /// Compile the source and print a text with its matches replaced.
    Replace {
        input: InputOptions,
        params: CompilerParams,
        text: String,
        replacement: String,
        all: bool,
    },
}

impl ExecutionMode {
    pub fn from_args(mut args: ArgMatches) -> Option<Self> {
        let (name, mut args) = args.remove_subcommand()?;
        let input = InputOptions::from_args(&mut args)?;

        match &*name {
            "normalize" => Some(Self::Normalize(input)),
            "parse" => Some(Self::Parse(input)),
            "describe" => Some(Self::Describe {
                input,
                params: DescribeParams::default()
                    .strict_flags(!args.get_flag("lenient_flags")),
            }),
            "exec" => Some(Self::Exec {
                input,
                params: CompilerParams::default()
                    .backtrack_limit(args.remove_one::<usize>("backtrack_limit")),
                text: args.remove_one("text")?,
            }),
            "replace" => Some(Self::Replace {
                input,
                params: CompilerParams::default()
                    .backtrack_limit(args.remove_one::<usize>("backtrack_limit")),
                text: args.remove_one("text")?,
                replacement: args.remove_one("replacement")?,
                all: args.get_flag("all"),
            }),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct InputOptions {
    /// Path to the literate source, `None` to read it from stdin.
    pub path: Option<PathBuf>,
}

impl InputOptions {
    fn from_args(args: &mut ArgMatches) -> Option<Self> {
        let path: PathBuf = args.remove_one("file")?;

        Some(Self {
            path: if path.as_os_str() == "-" {
                None
            } else {
                Some(path)
            },
        })
    }

    /// Name of the input, used in diagnostics.
    pub fn name(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "<stdin>".to_owned(),
        }
    }
}

pub fn build_command() -> Command {
    command!()
        .subcommand_required(true)
        .subcommand(
            Command::new("normalize")
                .about("Remove comments and whitespaces from a literate regex")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("parse")
                .about("Print the pattern and flags of a literate regex")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("describe")
                .about("Print the flags and capturing groups of a literate regex")
                .arg(file_arg())
                .arg(
                    Arg::new("lenient_flags")
                        .long("lenient-flags")
                        .action(ArgAction::SetTrue)
                        .help("Keep invalid flags as written instead of failing"),
                ),
        )
        .subcommand(
            Command::new("exec")
                .about("Compile a literate regex and print its matches on a text")
                .arg(file_arg())
                .arg(text_arg())
                .arg(backtrack_limit_arg()),
        )
        .subcommand(
            Command::new("replace")
                .about("Compile a literate regex and replace its matches in a text")
                .arg(file_arg())
                .arg(text_arg())
                .arg(
                    Arg::new("replacement")
                        .value_parser(value_parser!(String))
                        .required(true)
                        .help(
                            "Replacement of each match. $&, $1 or $<name> are replaced \
                             by the text of the match or of a group",
                        ),
                )
                .arg(
                    Arg::new("all")
                        .short('a')
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .help("Replace every match, even without the g flag"),
                )
                .arg(backtrack_limit_arg()),
        )
}

fn text_arg() -> Arg {
    Arg::new("text")
        .value_parser(value_parser!(String))
        .required(true)
        .help("Text to search")
}

fn backtrack_limit_arg() -> Arg {
    Arg::new("backtrack_limit")
        .long("backtrack-limit")
        .value_name("NUMBER")
        .value_parser(value_parser!(usize))
        .help("Maximum number of backtracking steps on a single search")
}

fn file_arg() -> Arg {
    Arg::new("file")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Path to a file containing a literate regex, or - to read from stdin")
}
