//! CLI entry point for formguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup and exit
//! codes. All business logic lives in the `formguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use formguard_app::{
    FieldInput, SubmitInput, field_exit_code, format_explain, parse_report_json,
    render_inline_errors, render_markdown, run_explain, run_field, run_submit,
    runtime_error_report, serialize_report, to_renderable, verdict_exit_code,
};
use formguard_settings::Overrides;
use formguard_types::FormguardReport;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "formguard",
    version,
    about = "Registration form validation: field checks, submission reports, and explanations"
)]
struct Cli {
    /// Path to formguard config TOML (a missing file means defaults).
    #[arg(long, global = true, default_value = "formguard.toml")]
    config: Utf8PathBuf,

    /// Override the minimum password length.
    #[arg(long, global = true)]
    password_min_length: Option<u32>,

    /// Override the maximum password length.
    #[arg(long, global = true)]
    password_max_length: Option<u32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a single field value, as a blur/change handler would.
    Field {
        /// Field identifier (e.g. "national_id", "rut", "birthDate").
        field: String,

        /// Raw value to validate (empty if omitted).
        #[arg(long, default_value = "")]
        value: String,

        /// Current password, compared against `confirm_password`.
        #[arg(long)]
        password: Option<String>,

        /// Print the validation result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate every field of a form and write a report.
    Submit {
        /// JSON object of field -> value.
        #[arg(long)]
        input: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/formguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/formguard/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/formguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Print inline `field: message` error lines from an existing JSON report.
    Errors {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/formguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of lines to print.
        #[arg(long, default_value_t = usize::MAX, hide_default_value = true)]
        max: usize,
    },

    /// Explain a field check or finding code with remediation guidance.
    Explain {
        /// A check_id ("field.national_id"), field name ("rut") or code ("check_digit_mismatch").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let overrides = Overrides {
        password_min_length: cli.password_min_length,
        password_max_length: cli.password_max_length,
    };

    match cli.cmd {
        Commands::Field {
            field,
            value,
            password,
            json,
        } => cmd_field(&cli.config, overrides, &field, &value, password.as_deref(), json),
        Commands::Submit {
            input,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_submit(
            &cli.config,
            overrides,
            &input,
            &report_out,
            write_markdown.then_some(markdown_out.as_path()),
        ),
        Commands::Md { report, output } => cmd_md(&report, output.as_deref()),
        Commands::Errors { report, max } => cmd_errors(&report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` overrides the `warn` default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Read the config file; a missing file is allowed (defaults apply).
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path, "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn cmd_field(
    config: &Utf8Path,
    overrides: Overrides,
    field: &str,
    value: &str,
    password: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let config_text = read_config(config)?;
    let output = run_field(FieldInput {
        field,
        value,
        password,
        config_text: &config_text,
        overrides,
    })?;

    if json {
        let text = serde_json::to_string(&output.result).context("serialize result")?;
        println!("{}", text);
    } else {
        println!("{}", output.result.message.as_deref().unwrap_or("ok"));
    }

    let code = field_exit_code(&output.result);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn cmd_submit(
    config: &Utf8Path,
    overrides: Overrides,
    input: &Utf8Path,
    report_out: &Utf8Path,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let config_text = read_config(config)?;
        let form_json =
            std::fs::read_to_string(input).with_context(|| format!("read form: {}", input))?;

        let output = run_submit(SubmitInput {
            form_json: &form_json,
            config_text: &config_text,
            overrides,
        })?;

        write_report_file(report_out, &output.report).context("write report json")?;

        let renderable = to_renderable(&output.report);
        if let Some(md_path) = markdown_out {
            let md = render_markdown(&renderable);
            write_text_file(md_path, &md).context("write markdown")?;
        }
        for line in render_inline_errors(&renderable, usize::MAX) {
            println!("{}", line);
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report_file(report_out, &report);
            eprintln!("formguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &FormguardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report)?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn read_report(path: &Utf8Path) -> anyhow::Result<FormguardReport> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read report: {}", path))?;
    parse_report_json(&text)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_errors(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    for line in render_inline_errors(&to_renderable(&report), max) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    let output = run_explain(identifier);
    let text = format_explain(&output);
    if !output.is_found() {
        eprint!("{text}");
        std::process::exit(1);
    }
    print!("{text}");
    Ok(())
}
