//! `literate-regex` binary: normalize, describe, run and replace with literate regexes stored
//! in files.
use std::io::Read;
use std::process::exit;

use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::SimpleFile;
use codespan_reporting::term::{
    self,
    termcolor::{ColorChoice, StandardStream},
};
use literate_regex::parser::{describe_with_params, normalize, parse_literal, RegexDescriptor};
use literate_regex::{compile_with_params, ExecResult};

mod args;
use args::{ExecutionMode, InputOptions};

#[cfg(test)]
use assert_cmd as _;
#[cfg(test)]
use predicates as _;
#[cfg(test)]
use tempfile as _;

fn main() -> Result<(), std::io::Error> {
    let Some(mode) = ExecutionMode::from_args(args::build_command().get_matches()) else {
        eprintln!("invalid arguments");
        exit(2);
    };

    match mode {
        ExecutionMode::Normalize(input) => {
            let src = read_input(&input)?;
            println!("{}", normalize(&src));
        }
        ExecutionMode::Parse(input) => {
            let src = read_input(&input)?;
            match parse_literal(&src) {
                Ok(parts) => {
                    println!("pattern: {}", parts.pattern);
                    println!("flags: {}", parts.flags);
                }
                Err(err) => fail(&input, &src, &err.to_diagnostic()),
            }
        }
        ExecutionMode::Describe { input, params } => {
            let src = read_input(&input)?;
            match describe_with_params(&src, &params) {
                Ok(desc) => print_descriptor(&desc),
                Err(err) => fail(&input, &src, &err.to_diagnostic()),
            }
        }
        ExecutionMode::Exec {
            input,
            params,
            text,
        } => {
            let src = read_input(&input)?;
            let pattern = match compile_with_params(&src, &params) {
                Ok(pattern) => pattern,
                Err(err) => fail(&input, &src, &err.to_diagnostic()),
            };

            let mut nb_matches = 0;
            for res in pattern.exec_iter(&text) {
                match res {
                    Ok(res) => {
                        print_result(&res);
                        nb_matches += 1;
                    }
                    Err(err) => {
                        eprintln!("{err}");
                        exit(2);
                    }
                }
            }
            if nb_matches == 0 {
                println!("no match");
            }
        }
        ExecutionMode::Replace {
            input,
            params,
            text,
            replacement,
            all,
        } => {
            let src = read_input(&input)?;
            let pattern = match compile_with_params(&src, &params) {
                Ok(pattern) => pattern,
                Err(err) => fail(&input, &src, &err.to_diagnostic()),
            };

            let res = if all {
                pattern.replace_all(&text, replacement.as_str())
            } else {
                pattern.replace(&text, replacement.as_str())
            };
            match res {
                Ok(res) => println!("{res}"),
                Err(err) => {
                    eprintln!("{err}");
                    exit(2);
                }
            }
        }
    }

    Ok(())
}

fn read_input(input: &InputOptions) -> Result<String, std::io::Error> {
    match &input.path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut src = String::new();
            let _r = std::io::stdin().read_to_string(&mut src)?;
            Ok(src)
        }
    }
}

/// Display a diagnostic on the literate source and exit.
fn fail(input: &InputOptions, src: &str, diag: &Diagnostic<()>) -> ! {
    let writer = StandardStream::stderr(ColorChoice::Always);
    let config = term::Config::default();

    let name = input.name();
    let files = SimpleFile::new(&name, src);
    if let Err(e) = term::emit(&mut writer.lock(), &config, &files, diag) {
        eprintln!("cannot emit diagnostics: {e}");
    }
    exit(2);
}

fn print_descriptor(desc: &RegexDescriptor) {
    println!("pattern: {}", desc.pattern);
    println!("flags: {}", desc.flags);
    println!("groups: {}", desc.capture.group_count);
    if desc.capture.has_named_groups() {
        println!("named groups:");
        for group in &desc.capture.named_groups {
            println!("    {}: {}", group.name, group.index);
        }
    }
    println!("indices: {}", desc.has_indices());
}

fn print_result(res: &ExecResult) {
    let indices = res.indices.as_ref();

    print!("match at {}: {:?}", res.index, res.matched);
    if let Some(indices) = indices {
        print!(" [{}..{}]", indices.matched.start, indices.matched.end);
    }
    println!();

    for (i, capture) in res.captures.iter().enumerate() {
        print!("    ${}", i + 1);
        print_capture(capture.as_deref());
        if let Some(Some(span)) = indices.map(|indices| &indices.captures[i]) {
            print!(" [{}..{}]", span.start, span.end);
        }
        println!();
    }

    if let Some(groups) = &res.groups {
        for (name, value) in groups {
            print!("    <{name}>");
            print_capture(value.as_deref());
            println!();
        }
    }
}

fn print_capture(value: Option<&str>) {
    match value {
        Some(value) => print!(" = {value:?}"),
        None => print!(" = undefined"),
    }
}
