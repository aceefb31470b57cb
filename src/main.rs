//! Page Table Translator - Main Entry Point
//!
//! Usage: page-table-translator [OPTIONS] <table_file> <address_file> [output_file]
//!
//! Arguments:
//!   table_file   - Page table file, one frame mapping per line (8 lines,
//!                  -1 or blank for not loaded)
//!   address_file - File containing logical addresses to translate
//!   output_file  - Optional file for physical addresses (-1 for faults)
//!
//! Options:
//!   --page-size <512|1024>  Bytes per page/frame (default 1024)
//!   --frames <4..6>         Physical frame count (default 4)
//!   -v, --verbose           Print per-translation explanations
//!   -h, --help              Print help information

use std::env;
use std::process;

use page_table_translator::config::{Configuration, FrameCount, PageSize};
use page_table_translator::constants::{DEFAULT_FRAME_COUNT, DEFAULT_PAGE_SIZE};
use page_table_translator::history::HistoryLog;
use page_table_translator::io::{read_address_tokens, read_table_cells, write_results};
use page_table_translator::table::PageTable;
use page_table_translator::translation::{parse_logical_address, translate};

/// Command-line configuration
struct CliConfig {
    table_file: String,
    address_file: String,
    output_file: Option<String>,
    page_size: u32,
    frame_count: u32,
    verbose: bool,
}

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn print_help(program: &str) {
    eprintln!("Page Table Translator - Simulates single-level paged address translation");
    eprintln!();
    eprintln!(
        "Usage: {} [OPTIONS] <table_file> <address_file> [output_file]",
        program
    );
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  table_file   - Page table file, one mapping per line (8 lines; -1 or blank = not loaded)");
    eprintln!("  address_file - File containing logical addresses (space-separated decimals)");
    eprintln!("  output_file  - Optional output file for physical addresses (-1 for faults)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --page-size <512|1024>  Bytes per page/frame (default {})", DEFAULT_PAGE_SIZE);
    eprintln!("  --frames <4..6>         Physical frame count (default {})", DEFAULT_FRAME_COUNT);
    eprintln!("  -v, --verbose           Print per-translation explanations");
    eprintln!("  -h, --help              Print this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} table.txt addresses.txt", program);
    eprintln!("  {} --page-size 512 --frames 6 -v table.txt addresses.txt out.txt", program);
}

fn parse_args() -> Result<CliConfig, String> {
    let args: Vec<String> = env::args().collect();
    let program = &args[0];

    let mut verbose = false;
    let mut page_size = DEFAULT_PAGE_SIZE;
    let mut frame_count = DEFAULT_FRAME_COUNT;
    let mut positional: Vec<&String> = Vec::new();

    let mut iter = args[1..].iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help(program);
                process::exit(0);
            }
            "-v" | "--verbose" => {
                verbose = true;
            }
            "--page-size" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--page-size requires a value".to_string())?;
                page_size = value
                    .parse()
                    .map_err(|_| format!("Invalid page size: {}", value))?;
            }
            "--frames" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--frames requires a value".to_string())?;
                frame_count = value
                    .parse()
                    .map_err(|_| format!("Invalid frame count: {}", value))?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!(
                    "Unknown option: {}\nUse --help for usage information.",
                    arg
                ));
            }
            _ => {
                positional.push(arg);
            }
        }
    }

    if positional.len() < 2 || positional.len() > 3 {
        print_help(program);
        return Err(format!(
            "\nError: Expected 2 or 3 arguments, got {}",
            positional.len()
        ));
    }

    Ok(CliConfig {
        table_file: positional[0].clone(),
        address_file: positional[1].clone(),
        output_file: positional.get(2).map(|s| s.to_string()),
        page_size,
        frame_count,
        verbose,
    })
}

/// Main logic separated from main() for cleaner error handling
fn run(cli: &CliConfig) -> Result<(), String> {
    // Step 1: Validate the configuration once for the whole batch
    let page_size = PageSize::new(cli.page_size).map_err(|e| e.to_string())?;
    let frame_count = FrameCount::new(cli.frame_count).map_err(|e| e.to_string())?;
    let config = Configuration {
        page_size,
        frame_count,
    };

    // Step 2: Parse the page table
    let cells = read_table_cells(&cli.table_file).map_err(|e| e.to_string())?;
    let cell_refs: Vec<&str> = cells.iter().map(String::as_str).collect();
    let table = PageTable::parse(&cell_refs, frame_count).map_err(|e| e.to_string())?;

    // Step 3: Read logical address tokens
    let tokens = read_address_tokens(&cli.address_file).map_err(|e| e.to_string())?;

    if cli.verbose {
        eprintln!("=== Page Table Translator ===");
        eprintln!("Page size:    {} bytes", page_size);
        eprintln!("Frames:       {}", frame_count.get());
        eprintln!("Table file:   {}", cli.table_file);
        eprintln!("Address file: {}", cli.address_file);
        eprintln!("Addresses to translate: {}", tokens.len());
        eprintln!();
    }

    // Step 4: Translate each address, recording results in the history.
    // A bad address token aborts before anything is appended for it.
    let mut history = HistoryLog::new();
    for token in &tokens {
        let logical = parse_logical_address(token)
            .map_err(|e| format!("{}: {}", e, token))?;
        let result = translate(&config, &table, logical);
        if cli.verbose {
            eprintln!("{}", result.explanation);
            eprintln!();
        }
        history.append(result);
    }

    // Step 5: Render the history table
    render_history(&history);

    if cli.verbose {
        let faults = history.entries().filter(|r| r.faulted()).count();
        eprintln!();
        eprintln!("=== Summary ===");
        eprintln!("Translations: {}", history.len());
        eprintln!("Page faults:  {}", faults);
    }

    // Step 6: Optionally write physical addresses
    if let Some(path) = &cli.output_file {
        let results: Vec<_> = history.entries().cloned().collect();
        write_results(path, &results).map_err(|e| e.to_string())?;
        if cli.verbose {
            eprintln!("Results written to: {}", path);
        }
    }

    Ok(())
}

/// Print the history as the six-column translations table.
fn render_history(history: &HistoryLog) {
    println!(
        "{:>12}  {:>6}  {:>7}  {:>7}  {:>13}  {:>10}",
        "Logical Addr", "Page #", "Frame #", "Offset", "Physical Addr", "Page Fault"
    );
    for result in history.entries() {
        println!(
            "{:>12}  {:>6}  {:>7}  {:>7}  {:>13}  {:>10}",
            result.logical_address,
            result.page_number,
            result.frame_field(),
            result.offset,
            result.physical_field(),
            result.fault_field()
        );
    }
}
