use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_default_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("mortgage-calc"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Loan amount       $250,000.00"))
        .stdout(predicate::str::contains("Monthly payment   $1,266.71"))
        .stdout(predicate::str::contains("Total interest    $206,016.78"))
        .stdout(predicate::str::contains("Total payment     $456,016.78"))
        .stdout(predicate::str::contains("This is an estimate."));

    Ok(())
}

#[test]
fn test_cli_sanitizes_principal_text() {
    let mut cmd = Command::new(cargo_bin!("mortgage-calc"));
    cmd.args(["--principal", "$100,000", "--rate", "0", "--term", "10"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Loan amount       $100,000.00"))
        .stdout(predicate::str::contains("Monthly payment   $833.33"))
        .stdout(predicate::str::contains("Total interest    $0.00"))
        .stdout(predicate::str::contains("Total payment     $100,000.00"));
}

#[test]
fn test_cli_json_output() {
    let output = Command::new(cargo_bin!("mortgage-calc"))
        .args(["--format", "json", "--principal", "12000", "--rate", "12", "--term", "1"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let monthly = json["monthlyPayment"].as_f64().unwrap();
    assert!((monthly - 1066.19).abs() < 0.005);
    let schedule = json["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 1);
    assert!(schedule[0]["remainingBalance"].as_f64().unwrap().abs() < 1e-2);
    assert!(json.get("monthlySchedule").is_none());
}

#[test]
fn test_cli_json_monthly_output() {
    let output = Command::new(cargo_bin!("mortgage-calc"))
        .args(["--format", "json", "--monthly", "--term", "5"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["schedule"].as_array().unwrap().len(), 5);
    assert_eq!(json["monthlySchedule"].as_array().unwrap().len(), 60);
}

#[test]
fn test_cli_csv_output() {
    let mut cmd = Command::new(cargo_bin!("mortgage-calc"));
    cmd.args(["--format", "csv", "--principal", "12000", "--rate", "12", "--term", "1"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "year,remaining_balance,total_interest_paid,total_principal_paid",
        ))
        .stdout(predicate::str::contains("1,0.00,794.23,12000.00"));
}

#[test]
fn test_cli_csv_monthly_output() {
    let output = Command::new(cargo_bin!("mortgage-calc"))
        .args(["--format", "csv", "--monthly", "--term", "2"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    // Header + 24 months
    assert_eq!(stdout.lines().count(), 25);
    assert!(stdout.starts_with("month,year,payment,"));
}
