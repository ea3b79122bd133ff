//! Command line front end.
//!
//! `ip-calculator [--text|--csv|--json] [<address> <mask>]`. With no
//! positional arguments the calculator prompts for input until EOF or an
//! empty address.

use crate::calculate_address;
use crate::output::{csv_header, render, OutputFormat};
use colored::Colorize;
use std::error::Error;
use std::io::{BufRead, Write};

pub const USAGE: &str = "Usage: ip-calculator [--text|--csv|--json] [<address> <mask>]

  <address>  IPv4 address, e.g. 192.168.1.10
  <mask>     subnet mask, dotted (255.255.255.0) or CIDR (/24)

Without <address> and <mask> the calculator asks for them interactively.";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// Output format from a flag, if one was given.
    pub output: Option<OutputFormat>,
    /// Address and mask for a single calculation.
    pub query: Option<(String, String)>,
    pub help: bool,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Args, Box<dyn Error>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = None;
    let mut help = false;
    let mut positional: Vec<String> = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        match arg {
            "-h" | "--help" => help = true,
            "--text" => output = Some(OutputFormat::Text),
            "--csv" => output = Some(OutputFormat::Csv),
            "--json" => output = Some(OutputFormat::Json),
            // "/24" is a mask, not a flag
            flag if flag.starts_with("--") || (flag.starts_with('-') && flag.len() > 1) => {
                return Err(format!("Unknown option {flag}").into());
            }
            value => positional.push(value.to_string()),
        }
    }

    let query = match positional.len() {
        0 => None,
        2 => Some((positional[0].clone(), positional[1].clone())),
        n => {
            return Err(format!("Expected <address> and <mask>, got {n} argument(s)").into());
        }
    };

    Ok(Args {
        output,
        query,
        help,
    })
}

/// Calculate once and write the result. Returns `false` if the calculation
/// failed.
pub fn run_once<W: Write>(
    out: &mut W,
    format: OutputFormat,
    ip: &str,
    mask: &str,
) -> Result<bool, Box<dyn Error>> {
    let outcome = calculate_address(ip, mask);
    if format == OutputFormat::Csv {
        writeln!(out, "{}", csv_header())?;
    }
    writeln!(out, "{}", render(format, ip, mask, &outcome)?)?;
    Ok(outcome.is_ok())
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>, Box<dyn Error>> {
    write!(out, "{}", label.bold())?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompt for address and mask repeatedly, writing each result.
///
/// Stops at EOF or when the address is left empty. Returns the number of
/// calculations performed.
pub fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    format: OutputFormat,
) -> Result<usize, Box<dyn Error>> {
    let mut count = 0;
    if format == OutputFormat::Csv {
        writeln!(out, "{}", csv_header())?;
    }
    loop {
        let ip = match prompt(input, out, "IP Address: ")? {
            Some(ip) if !ip.is_empty() => ip,
            _ => break,
        };
        let mask = match prompt(input, out, "Subnet Mask: ")? {
            Some(mask) => mask,
            None => break,
        };
        let outcome = calculate_address(&ip, &mask);
        writeln!(out, "{}", render(format, &ip, &mask, &outcome)?)?;
        count += 1;
    }
    log::debug!("Interactive session ended after {count} calculation(s)");
    Ok(count)
}
