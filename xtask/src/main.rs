//! Developer tasks (schema generation, golden fixture checks and updates).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use formguard_app::{SubmitInput, run_submit, serialize_report};
use formguard_domain::FieldId;
use formguard_settings::Overrides;
use formguard_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(manifest_dir)
    } else {
        manifest_dir
    }
}

/// Get the schemas directory path.
fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Get the golden fixtures directory path.
fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(formguard_types::FormguardReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(formguard_settings::FormguardConfigV1)
}

fn generate_validation_result_schema() -> schemars::Schema {
    schema_for!(formguard_types::ValidationResult)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "formguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "formguard.config.v1.json",
            generate: generate_config_schema,
        },
        SchemaSpec {
            filename: "formguard.validation-result.v1.json",
            generate: generate_validation_result_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate golden reports against the report schema");
    eprintln!("  check-fixtures    Re-run every golden fixture and compare reports");
    eprintln!("  update-fixtures   Rewrite expected.report.json for every fixture");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

/// Token pattern for codes: lowercase snake_case.
fn is_valid_token(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Check IDs are two dot-separated tokens (`field.email`, `tool.runtime`).
fn is_valid_check_id(s: &str) -> bool {
    matches!(s.split_once('.'), Some((ns, name)) if is_valid_token(ns) && is_valid_token(name))
}

/// Fixture directories, sorted by name.
fn fixture_dirs() -> anyhow::Result<Vec<PathBuf>> {
    let dir = fixtures_dir();
    let mut dirs = Vec::new();
    for entry in fs::read_dir(&dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.join("form.json").exists() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn fixture_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))
}

/// Validate golden reports against the generated report schema, plus token hygiene.
fn conform() -> anyhow::Result<()> {
    let schema_value = serde_json::to_value(generate_report_schema())
        .context("Failed to serialize report schema")?;
    let validator = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;
    println!("✓ formguard.report.v1 schema compiles");

    let mut errors = Vec::new();
    let mut count = 0;

    for dir in fixture_dirs()? {
        let name = fixture_name(&dir);
        let path = dir.join("expected.report.json");
        if !path.exists() {
            errors.push(format!("{}: missing expected.report.json", name));
            continue;
        }
        let value = read_json(&path)?;
        count += 1;

        for err in validator.iter_errors(&value) {
            errors.push(format!("{}: schema validation: {}", name, err));
        }

        if let Some(findings) = value.get("findings").and_then(|v| v.as_array()) {
            for (i, finding) in findings.iter().enumerate() {
                let check_id = finding["check_id"].as_str().unwrap_or_default();
                if !is_valid_check_id(check_id) {
                    errors.push(format!(
                        "{}: findings[{}].check_id '{}' is not a valid check id",
                        name, i, check_id
                    ));
                }
                let code = finding["code"].as_str().unwrap_or_default();
                if !is_valid_token(code) {
                    errors.push(format!(
                        "{}: findings[{}].code '{}' is not a valid token",
                        name, i, code
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} golden reports conform", count);
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

/// Run one fixture through the submit use case, returning the normalized report.
fn run_fixture(dir: &Path) -> anyhow::Result<serde_json::Value> {
    let form_json = fs::read_to_string(dir.join("form.json"))
        .with_context(|| format!("Failed to read form.json in {}", dir.display()))?;
    let config_text = fs::read_to_string(dir.join("formguard.toml")).unwrap_or_default();

    let output = run_submit(SubmitInput {
        form_json: &form_json,
        config_text: &config_text,
        overrides: Overrides::default(),
    })?;

    let bytes = serialize_report(&output.report)?;
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).context("Failed to re-read serialized report")?;
    Ok(normalize_nondeterministic(value))
}

fn check_fixtures() -> anyhow::Result<()> {
    let mut mismatched = Vec::new();
    let dirs = fixture_dirs()?;

    for dir in &dirs {
        let name = fixture_name(dir);
        let actual = run_fixture(dir).with_context(|| format!("fixture {}", name))?;
        let expected = normalize_nondeterministic(read_json(&dir.join("expected.report.json"))?);
        if actual == expected {
            println!("✓ {}", name);
        } else {
            mismatched.push(name);
        }
    }

    if mismatched.is_empty() {
        println!("\n✓ {} fixtures match", dirs.len());
        Ok(())
    } else {
        eprintln!("Fixtures out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
        eprintln!("\nRun `cargo xtask update-fixtures` after reviewing the change.");
        bail!("Fixture check failed")
    }
}

fn update_fixtures() -> anyhow::Result<()> {
    for dir in fixture_dirs()? {
        let report = run_fixture(&dir).with_context(|| format!("fixture {}", dir.display()))?;
        let mut json = serde_json::to_string_pretty(&report).context("Failed to serialize")?;
        json.push('\n');
        let path = dir.join("expected.report.json");
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Validate that all check IDs and codes have explanations, and that every
/// code a field can report is registered.
fn explain_coverage() -> anyhow::Result<()> {
    let check_ids = formguard_types::explain::all_check_ids();
    let codes = formguard_types::explain::all_codes();

    let mut errors = Vec::new();

    for (kind, ids) in [("Check ID", check_ids), ("Code", codes)] {
        for id in ids {
            match formguard_types::explain::lookup_explanation(id) {
                Some(exp) => {
                    if exp.title.is_empty() {
                        errors.push(format!("{} '{}' has empty title", kind, id));
                    }
                    if exp.description.is_empty() {
                        errors.push(format!("{} '{}' has empty description", kind, id));
                    }
                    if exp.remediation.is_empty() {
                        errors.push(format!("{} '{}' has empty remediation", kind, id));
                    }
                }
                None => {
                    errors.push(format!("{} '{}' has no explanation", kind, id));
                }
            }
        }
    }

    for field in FieldId::ALL {
        if !check_ids.contains(&field.check_id()) {
            errors.push(format!("Field '{}' check ID is not registered", field));
        }
        for code in field.codes() {
            if !codes.contains(code) {
                errors.push(format!("Field '{}' code '{}' is not registered", field, code));
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} check IDs have explanations", check_ids.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "check-fixtures" => check_fixtures(),
        "update-fixtures" => update_fixtures(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                let name = spec.filename.trim_end_matches(".json");
                println!("{}", name);
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
