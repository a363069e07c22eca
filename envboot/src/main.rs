mod cli;

use crate::cli::Envboot;
use clap::Parser;
use colored::Colorize;
use envboot::{logger, Bootstrap};
use std::process::ExitCode;

pub fn main() -> ExitCode {
    let args = Envboot::parse();
    logger::init(&args.log_level);

    match Bootstrap::in_dir(&args.dir).run() {
        Ok(report) => {
            println!("{}", report.to_string().green());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
