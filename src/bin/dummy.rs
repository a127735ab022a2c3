//! Test fixture binary driven by the integration tests.
//!
//! Subcommands:
//!   echo stdin          copy standard input to standard output
//!   echo <text...>      print the joined text
//!   err <text...>       print the joined text to standard error
//!   exit <code>         exit with the given code
//!   print cwd           print the current working directory
//!   print env <name>    print the variable's value, or `<unset>`

use std::env;
use std::io::{self, Read, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let parts: Vec<&str> = args.iter().map(String::as_str).collect();

    match parts.as_slice() {
        ["echo", "stdin"] => {
            let mut buffer = Vec::new();
            if io::stdin().read_to_end(&mut buffer).is_err() {
                return ExitCode::from(2);
            }
            if io::stdout().write_all(&buffer).is_err() {
                return ExitCode::from(2);
            }
            ExitCode::SUCCESS
        }
        ["echo", text @ ..] if !text.is_empty() => {
            println!("{}", text.join(" "));
            ExitCode::SUCCESS
        }
        ["err", text @ ..] if !text.is_empty() => {
            eprintln!("{}", text.join(" "));
            ExitCode::SUCCESS
        }
        ["exit", code] => match code.parse::<u8>() {
            Ok(code) => ExitCode::from(code),
            Err(_) => ExitCode::from(2),
        },
        ["print", "cwd"] => match env::current_dir() {
            Ok(dir) => {
                println!("{}", dir.display());
                ExitCode::SUCCESS
            }
            Err(_) => ExitCode::from(2),
        },
        ["print", "env", name] => {
            match env::var(name) {
                Ok(value) => println!("{value}"),
                Err(_) => println!("<unset>"),
            }
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("dummy: unknown command: {parts:?}");
            ExitCode::from(2)
        }
    }
}
