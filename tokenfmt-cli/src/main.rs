//! Command-line interface for tokenfmt
//!
//! Reads a design-token CSS export, restructures it, and writes the result.
//!
//! Usage:
//!   tokenfmt [input] [output]           - paths default to original.css and output.css
//!   tokenfmt --report report.json ...   - also write a JSON run report

use clap::{Arg, ArgAction, Command};
use std::fs;
use std::process;

fn main() {
    let matches = Command::new("tokenfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .disable_version_flag(true)
        .about("Restructures a design-token CSS export into a grouped stylesheet")
        .arg(
            Arg::new("input")
                .help("Path to the exported CSS file")
                .index(1)
                .default_value("original.css"),
        )
        .arg(
            Arg::new("output")
                .help("Path the restructured stylesheet is written to")
                .index(2)
                .default_value("output.css"),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .value_name("PATH")
                .help("Write a JSON run report to PATH"),
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version")
                .action(ArgAction::Version),
        )
        .get_matches();

    let input = matches.get_one::<String>("input").unwrap();
    let output = matches.get_one::<String>("output").unwrap();
    let report = matches.get_one::<String>("report").map(String::as_str);

    if let Err(message) = run(input, output, report) {
        eprintln!("{}", message);
        process::exit(1);
    }
}

fn run(input: &str, output: &str, report: Option<&str>) -> Result<(), String> {
    let css = fs::read_to_string(input)
        .map_err(|err| format!("failed to read {}: {}", input, err))?;

    let result = tokenfmt_core::tokens::pipeline::restructure(&css)
        .map_err(|err| err.to_string())?;

    for name in &result.dropped {
        eprintln!("warning: no group for --{}, dropped from output", name);
    }

    fs::write(output, &result.css)
        .map_err(|err| format!("failed to write {}: {}", output, err))?;

    if let Some(path) = report {
        let body = serde_json::json!({
            "input": input,
            "output": output,
            "variables": result.variables,
            "dropped": result.dropped,
        });
        let rendered = serde_json::to_string_pretty(&body)
            .map_err(|err| format!("failed to encode report: {}", err))?;
        fs::write(path, rendered)
            .map_err(|err| format!("failed to write report {}: {}", path, err))?;
    }

    eprintln!(
        "wrote {} variables to {} ({} dropped)",
        result.variables,
        output,
        result.dropped.len()
    );

    Ok(())
}
