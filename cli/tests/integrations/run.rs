use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct Inputs {
    _dir: TempDir,
    rules: PathBuf,
    knowledge: PathBuf,
    statement: PathBuf,
}

fn write_inputs(rules: &str, knowledge: &str, statement: &str) -> Inputs {
    let dir = TempDir::new().unwrap();
    let rules_path = dir.path().join("rules.txt");
    let knowledge_path = dir.path().join("knowledge.txt");
    let statement_path = dir.path().join("statement.txt");
    fs::write(&rules_path, rules).unwrap();
    fs::write(&knowledge_path, knowledge).unwrap();
    fs::write(&statement_path, statement).unwrap();
    Inputs {
        _dir: dir,
        rules: rules_path,
        knowledge: knowledge_path,
        statement: statement_path,
    }
}

fn entail_cmd(inputs: &Inputs) -> Command {
    let mut cmd = Command::cargo_bin("entail").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg(&inputs.rules)
        .arg(&inputs.knowledge)
        .arg(&inputs.statement);
    cmd
}

#[test]
fn test_cli_definitely_true() {
    let inputs = write_inputs(
        "# rain makes grass wet\n(if rain wet_grass)\n",
        "rain\n",
        "wet_grass\n",
    );

    entail_cmd(&inputs)
        .assert()
        .success()
        .stdout("definitely true\n");
}

#[test]
fn test_cli_all_verdicts() {
    let cases = [
        ("p\n", "", "p\n", "definitely true\n"),
        ("p\n", "", "(not p)\n", "definitely false\n"),
        ("p\n", "(not p)\n", "q\n", "both true and false\n"),
        ("(or p q)\n", "", "p\n", "possibly true, possibly false\n"),
    ];
    for (rules, knowledge, statement, expected) in cases {
        let inputs = write_inputs(rules, knowledge, statement);
        entail_cmd(&inputs).assert().success().stdout(expected);
    }
}

#[test]
fn test_cli_json_output() {
    let inputs = write_inputs("(or p q)\n", "r\n", "p\n");

    let output = entail_cmd(&inputs)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["verdict"], "possibly true, possibly false");
    assert_eq!(json["models"], 3);
    assert_eq!(json["query_true"], 2);
    assert_eq!(json["query_false"], 1);
    assert_eq!(json["free_symbols"], serde_json::json!(["p", "q"]));
    assert_eq!(json["seeded"], serde_json::json!({ "r": true }));
    assert!(json.get("knowledge_base").is_none());
}

#[test]
fn test_cli_verbose_json_includes_canonical_forms() {
    let inputs = write_inputs("(if rain wet)\n", "rain\n", "(and wet rain)\n");

    let output = entail_cmd(&inputs)
        .args(["-f", "json", "-v"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["verdict"], "definitely true");
    assert_eq!(
        json["knowledge_base"],
        serde_json::json!(["(rain impl wet)", "rain"])
    );
    assert_eq!(json["statement"], "(wet and rain)");
}

#[test]
fn test_cli_verbose_text_reports_on_stderr() {
    let inputs = write_inputs("(if rain wet)\n", "rain\n", "wet\n");

    entail_cmd(&inputs)
        .arg("-v")
        .assert()
        .success()
        .stdout("definitely true\n")
        .stderr(predicate::str::contains("(rain impl wet)"))
        .stderr(predicate::str::contains("Models"));
}

#[test]
fn test_cli_output_file() {
    let inputs = write_inputs("a\n", "(if a b)\n", "b\n");
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("verdict.txt");

    entail_cmd(&inputs)
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&out_path).unwrap(), "definitely true\n");
}

#[test]
fn test_cli_missing_file() {
    let inputs = write_inputs("a\n", "", "a\n");
    let missing = inputs.rules.with_file_name("nope.txt");

    let mut cmd = Command::cargo_bin("entail").unwrap();
    cmd.arg(&missing).arg(&inputs.knowledge).arg(&inputs.statement);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"))
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn test_cli_wrong_argument_count() {
    let inputs = write_inputs("a\n", "", "a\n");

    let mut cmd = Command::cargo_bin("entail").unwrap();
    cmd.arg(&inputs.rules).arg(&inputs.knowledge);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("STATEMENT"));
}

#[test]
fn test_cli_parse_error() {
    let inputs = write_inputs("a\n(and a (or b c)\n", "", "a\n");

    entail_cmd(&inputs)
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Unexpected end of input"));
}

#[test]
fn test_cli_validation_error() {
    let inputs = write_inputs("(nand a b)\n", "", "a\n");

    entail_cmd(&inputs)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown connective 'nand'"));
}

#[test]
fn test_cli_statement_with_two_clauses() {
    let inputs = write_inputs("a\n", "", "a\nb\n");

    entail_cmd(&inputs)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exactly one clause"));
}

#[test]
fn test_cli_max_free_symbols() {
    let inputs = write_inputs("(or a b c)\n", "", "a\n");

    entail_cmd(&inputs)
        .args(["--max-free-symbols", "2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("max_free_symbols"));

    entail_cmd(&inputs)
        .args(["--max-free-symbols", "3"])
        .assert()
        .success()
        .stdout("possibly true, possibly false\n");
}

#[test]
fn test_cli_comments_and_crlf() {
    let inputs = write_inputs(
        "# rules\r\n(iff smoke fire)\r\n\r\n",
        "   \n# observed\nsmoke\n",
        "fire\r\n",
    );

    entail_cmd(&inputs)
        .assert()
        .success()
        .stdout("definitely true\n");
}
