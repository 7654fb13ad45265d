// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::Params;
use crate::progress::Progress;
use crate::runner;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::default();
    parse_cli(&mut params)?;

    let mut progress = ConsoleProgress { quiet: params.quiet };
    let summary = runner::run(&params, Some(&mut progress))?;

    if !params.quiet {
        println!(
            "{} licenses → {}",
            summary.licenses,
            summary.manifest_path.display()
        );
        if !summary.templates_written.is_empty() {
            println!("{} templates saved", summary.templates_written.len());
        }
    }

    // Failed licenses were excluded from the manifest; that must not pass
    // for a clean run.
    if !summary.failures.is_empty() {
        for (id, e) in &summary.failures {
            eprintln!("FAILED {id}: {e}");
        }
        return Err(format!("{} licenses failed; see log", summary.failures.len()).into());
    }

    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                params.set_out(&v); }
            "--manifest" => {
                params.manifest = args.next().ok_or("Missing value for --manifest")?; }
            "--headers-dir" => {
                let v = args.next().ok_or("Missing value for --headers-dir")?;
                params.headers_dir = Some(PathBuf::from(v)); }
            "--no-templates" => params.save_templates = false,
            "-q" | "--quiet" => params.quiet = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

/// Per-license console lines; silenced by `--quiet`.
struct ConsoleProgress {
    quiet: bool,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        if !self.quiet {
            println!("Collecting {total} licenses");
        }
    }
    fn log(&mut self, msg: &str) {
        if !self.quiet {
            println!("{msg}");
        }
    }
    fn item_done(&mut self, spdx_id_lower: &str) {
        if !self.quiet {
            println!("  ok   {spdx_id_lower}");
        }
    }
    fn item_failed(&mut self, spdx_id_lower: &str, why: &str) {
        eprintln!("  FAIL {spdx_id_lower}: {why}");
    }
}
