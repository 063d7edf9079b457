use blankcheck_core::color::ColorMode;
use blankcheck_core::report::{
    ReportFormat, format_result, render_json_report, render_report, save_report,
};
use blankcheck_scanner::Auditor;
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Resolve the positional target into the list of URLs to audit.
///
/// A token naming an existing `.txt` file is read as newline-delimited URLs;
/// any other token is treated as a single URL.
pub fn resolve_targets(token: &str) -> Result<Vec<String>, String> {
    let path = Path::new(token);
    if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
        load_urls_from_file(&path.to_path_buf())
    } else {
        Ok(vec![token.to_string()])
    }
}

/// Load and parse URLs from a file
pub fn load_urls_from_file(path: &PathBuf) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read URL file {}: {}", path.display(), e))?;

    let urls: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_url_line(line.trim()))
        .collect();

    if urls.is_empty() {
        return Err(format!("No valid URLs found in {}", path.display()));
    }

    Ok(urls)
}

/// Parse a single line as a URL, trying to add http:// if needed
pub fn parse_url_line(line: &str) -> Option<String> {
    // Try to parse as-is
    if Url::parse(line).is_ok() {
        return Some(line.to_string());
    }

    // Try adding http://
    let with_scheme = format!("http://{}", line);
    if Url::parse(&with_scheme).is_ok() {
        return Some(with_scheme);
    }

    eprintln!("⚠️  Skipping invalid URL '{}'", line);
    None
}

/// Resolve the output destination from `-o`/`-d`, creating the directory.
pub fn resolve_output_path(directory: &str, filename: &str) -> Result<PathBuf, String> {
    let expanded = shellexpand::tilde(directory);
    let dir = Path::new(expanded.as_ref());

    fs::create_dir_all(dir).map_err(|e| {
        format!(
            "Failed to create output directory {}: {}",
            dir.display(),
            e
        )
    })?;

    Ok(dir.join(filename))
}

pub async fn handle_audit(matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let target = matches.get_one::<String>("TARGET").unwrap();
    let output = matches.get_one::<String>("output");
    let directory = matches.get_one::<String>("directory").unwrap();
    let format = matches.get_one::<String>("format").unwrap();
    let timeout_secs = *matches.get_one::<u64>("timeout").unwrap();
    let no_color = matches.get_flag("no-color");

    let format = ReportFormat::from_str(format).expect("clap restricts the format values");

    let urls = match resolve_targets(target) {
        Ok(urls) => urls,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    let color = if no_color {
        ColorMode::Plain
    } else {
        ColorMode::Ansi
    };

    println!("\n🔎 Auditing {} page(s) for reverse tabnabbing", urls.len());
    println!("Navigation timeout: {}s\n", timeout_secs);

    let auditor = Auditor::with_timeout(timeout_secs);
    let mut results = Vec::with_capacity(urls.len());

    // One fully-released browser session per URL, input order.
    for url in &urls {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(format!("Auditing {}", url));

        let result = match auditor.audit(url).await {
            Ok(result) => result,
            Err(e) => {
                spinner.finish_and_clear();
                eprintln!("✗ {}", e);
                std::process::exit(1);
            }
        };

        spinner.finish_and_clear();
        println!("{}", format_result(&result, color));
        results.push(result);
    }

    let risky: usize = results.iter().map(|r| r.issues.len()).sum();
    let failed = results.iter().filter(|r| r.error.is_some()).count();
    println!(
        "{} Audit complete: {} page(s), {} risky link(s), {} failed",
        "✓".green().bold(),
        results.len(),
        risky,
        failed
    );

    // Persistence is best effort: the console output above is already on
    // screen even if the write fails.
    if let Some(filename) = output {
        let path = match resolve_output_path(directory, filename) {
            Ok(path) => path,
            Err(e) => {
                eprintln!("✗ {}", e);
                std::process::exit(1);
            }
        };

        let content = match format {
            ReportFormat::Text => render_report(&results),
            ReportFormat::Json => match render_json_report(&results) {
                Ok(json) => json,
                Err(e) => {
                    eprintln!("✗ Failed to serialize JSON report: {}", e);
                    std::process::exit(1);
                }
            },
        };

        if let Err(e) = save_report(&content, &path) {
            eprintln!("✗ Failed to write report to {}: {}", path.display(), e);
            std::process::exit(1);
        }

        println!("{} Report saved to {}", "✓".green().bold(), path.display());
    }
}
