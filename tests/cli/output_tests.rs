use crate::common::TestContext;
use serde_json::Value;

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}

#[test]
fn test_inspect_json() {
    let ctx = TestContext::new();
    let catalog = ctx.catalog();

    let output = ctx
        .command()
        .args(["inspect", "-c", catalog.to_str().unwrap(), "-t", "Repository", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "success");
    assert_eq!(json["result"]["name"], "RepositoryMock");
    assert_eq!(json["result"]["target"], "Repository");
    let methods = json["result"]["methods"].as_array().unwrap();
    assert_eq!(methods.len(), 4);
    assert_eq!(methods[0]["name"], "find");
    assert_eq!(methods[0]["declared_in"], "Repository");
}

#[test]
fn test_run_json_report() {
    let ctx = TestContext::new();
    let catalog = ctx.catalog();

    let output = ctx
        .command()
        .args([
            "run",
            "-c",
            catalog.to_str().unwrap(),
            "-t",
            "UserRepository",
            "--stub",
            "findByEmail={\"id\": 9}",
            "--call",
            "findByEmail=\"a@b.c\"",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "success");
    assert!(json.get("errors").map_or(true, Value::is_null));

    let result = &json["result"];
    assert_eq!(result["target"], "UserRepository");
    assert_eq!(result["calls"][0]["returned"]["id"], 9);
    assert_eq!(result["recorded"][0]["method"], "findByEmail");
    assert_eq!(result["recorded"][0]["arguments"][0], "a@b.c");
}

#[test]
fn test_run_json_collects_errors() {
    let ctx = TestContext::new();
    let catalog = ctx.catalog();

    let output = ctx
        .command()
        .args([
            "run",
            "-c",
            catalog.to_str().unwrap(),
            "-t",
            "Repository",
            "--call",
            "missing",
            "--call",
            "count",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "error");
    assert_eq!(json["errors"].as_array().unwrap().len(), 1);
    assert!(json["result"]["calls"][0]["error"]
        .as_str()
        .unwrap()
        .contains("undefined method"));
    assert_eq!(json["result"]["recorded"].as_array().unwrap().len(), 1);
}

#[test]
fn test_config_selects_json_output() {
    let ctx = TestContext::new();
    let catalog = ctx.catalog();
    ctx.create_file(".mockforge.toml", "[output]\nformat = \"json\"\n");

    let output = ctx
        .command()
        .args(["inspect", "-c", catalog.to_str().unwrap(), "-t", "Repository"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["status"], "success");
}
