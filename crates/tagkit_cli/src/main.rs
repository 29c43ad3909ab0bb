//! Command-line surface: resolve input, parse, paginate, render, persist.

mod args;
mod store;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use tagkit_core::conf::C_SAMPLE_TSV;
use tagkit_core::spec::SpecParseReport;
use tagkit_core::util::{parse_name_tags, paginate_name_tags};
use tagkit_io_xlsx::conf::{derive_default_sheet_layout, derive_default_tag_formats};
use tagkit_io_xlsx::writer::TagSheetWriter;

use crate::args::CliArgs;

fn main() -> ExitCode {
    let cli_args = CliArgs::parse();

    let c_log_level = match cli_args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(c_log_level))
        .init();

    if cli_args.no_color {
        colored::control::set_override(false);
    }

    match run(&cli_args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli_args: &CliArgs) -> Result<(), String> {
    let path_slot = store::derive_default_slot_path();

    if cli_args.clear {
        let Some(path_slot) = path_slot else {
            return Err("No home directory found; nothing to clear.".to_string());
        };
        if store::clear_last_input(&path_slot)? {
            println!("Cleared saved input at {}.", path_slot.display());
        } else {
            println!("No saved input to clear.");
        }
        return Ok(());
    }

    let c_raw = resolve_input(cli_args, path_slot.as_deref())?;

    let mut report = SpecParseReport::default();
    let l_tags = parse_name_tags(&c_raw, &mut report);

    for c_warning in &report.warnings {
        eprintln!("{} {c_warning}", "warning:".yellow());
    }
    for rejection in &report.rejections {
        log::info!("line {}: {}", rejection.num_line, rejection.reason);
    }

    // Persist whatever was fed in, valid or not, unless asked not to.
    if !cli_args.no_save
        && let Some(path_slot) = &path_slot
        && let Err(e) = store::save_last_input(path_slot, &c_raw)
    {
        eprintln!("{} {e}", "warning:".yellow());
    }

    if l_tags.is_empty() {
        return Err("Please enter valid TSV data before printing.".to_string());
    }

    let l_pages = paginate_name_tags(&l_tags, usize::from(cli_args.page_size))?;
    println!(
        "{} name tag{} \u{2022} {} page{}",
        l_tags.len().to_string().bold(),
        derive_plural_suffix(l_tags.len()),
        l_pages.len().to_string().bold(),
        derive_plural_suffix(l_pages.len())
    );

    let dict_fmt = derive_default_tag_formats();
    let cfg_fmt_name = dict_fmt
        .get("name")
        .cloned()
        .ok_or_else(|| "Missing default format: name".to_string())?;
    let cfg_fmt_detail = dict_fmt
        .get("detail")
        .cloned()
        .ok_or_else(|| "Missing default format: detail".to_string())?;

    let mut writer = TagSheetWriter::new(
        cli_args.out.clone(),
        cfg_fmt_name,
        cfg_fmt_detail,
        derive_default_sheet_layout(),
    );
    writer.write_pages(&l_pages, &cli_args.sheet_name)?;
    writer.close()?;

    for render_report in writer.report() {
        for c_warning in &render_report.warnings {
            eprintln!("{} {c_warning}", "warning:".yellow());
        }
    }
    println!("Wrote {}", writer.file_out().green());

    Ok(())
}

fn resolve_input(cli_args: &CliArgs, path_slot: Option<&Path>) -> Result<String, String> {
    if let Some(path_input) = &cli_args.input {
        return fs::read_to_string(path_input).map_err(|e| {
            format!("Failed to read input file {}: {e}", path_input.display())
        });
    }
    if cli_args.sample {
        return Ok(C_SAMPLE_TSV.to_string());
    }
    match path_slot {
        Some(path_slot) => store::load_last_input(path_slot),
        None => Ok(String::new()),
    }
}

fn derive_plural_suffix(n_count: usize) -> &'static str {
    if n_count == 1 { "" } else { "s" }
}
