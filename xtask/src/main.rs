use std::env;
use std::ffi::OsString;
use std::process::{self, Command};

use clap::{Parser, Subcommand};

#[derive(Parser)]
struct Args {
    /// The command to run.
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate docs for the resources crate with every feature enabled.
    #[command(disable_help_flag = true)]
    Doc {
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        rest: Vec<OsString>,
    },
    /// Format code.
    #[command(disable_help_flag = true)]
    Fmt {
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        rest: Vec<OsString>,
    },
    /// Run the test suite under every feature combination.
    #[command(disable_help_flag = true)]
    Test {
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        rest: Vec<OsString>,
    },
}

fn run_command(command: &mut Command) {
    if !command.status().unwrap().success() {
        process::exit(1)
    }
}

fn main() {
    let args = Args::parse();

    match args.task {
        Task::Doc { rest } => {
            run_command(
                Command::new("cargo")
                    .env(
                        "RUSTDOCFLAGS",
                        format!("--cfg docsrs {}", env::var("RUSTDOCFLAGS").unwrap_or_default()),
                    )
                    .args(["+nightly", "doc", "-p", "android-resources", "--all-features"])
                    .args(rest),
            );
        },
        Task::Fmt { rest } => {
            run_command(Command::new("cargo").args(["+nightly", "fmt"]).args(rest));
        },
        Task::Test { rest } => {
            // The linear-scan lookup only exists without the default features.
            for features in [&["--no-default-features"][..], &[], &["--all-features"]] {
                run_command(
                    Command::new("cargo")
                        .args(["test", "-p", "android-resources"])
                        .args(features)
                        .args(&rest),
                );
            }
        },
    }
}
