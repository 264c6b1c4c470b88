use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn mlife() -> Command {
    let mut cmd = Command::cargo_bin("mlife").unwrap();
    cmd.current_dir(std::env::temp_dir());
    cmd
}

#[test]
fn estimate_prints_reference_scenario() {
    mlife()
        .args(["estimate", "--usage-hours", "4863", "--stress-cycles", "200000", "--temperature", "515"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated Remaining Life: 1 years, 6 months, 23 days."))
        .stdout(predicate::str::contains(
            "Likely first wear-out component: Turbine Blades and Compressor Components",
        ));
}

#[test]
fn estimate_json_output() {
    mlife()
        .args(["estimate", "--usage-hours", "4863", "--stress-cycles", "200000", "--temperature", "515", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"remainingLifeYears\""))
        .stdout(predicate::str::contains("\"days\": 23"));
}

#[test]
fn zero_stress_cycles_fails_on_stderr() {
    mlife()
        .args(["estimate", "--usage-hours", "4863", "--stress-cycles", "0", "--temperature", "515"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("stressCyclesPerYear must be greater than zero"));
}

#[test]
fn negative_usage_hours_fails() {
    mlife()
        .args(["estimate", "--usage-hours", "-5", "--stress-cycles", "200000", "--temperature", "515"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("usageHoursPerYear"));
}

#[test]
fn parameters_from_config_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[dataset]\nparameters = [{{ name = \"Efficiency (%)\", value_2013 = 40.0, value_2023 = 50.0 }}]"
    )
    .unwrap();

    mlife()
        .arg("parameters")
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Efficiency (%)"))
        .stdout(predicate::str::contains("25.00% change"));
}

#[test]
fn missing_config_file_fails() {
    mlife()
        .args(["parameters", "--config", "/nonexistent/mlife.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}

#[test]
fn no_arguments_prints_help() {
    mlife().assert().failure().stderr(predicate::str::contains("Usage"));
}
