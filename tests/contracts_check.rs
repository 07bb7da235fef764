mod common;

use common::TestEnv;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();

    let started = env.start_default("x", "busy-professional");
    assert_eq!(started["ok"], true);
    validate("status.schema.json", &started["data"]);

    let answer = env.run_json(&["answer", "hard-requirement", "neither"]);
    assert_eq!(answer["ok"], true);
    validate("answer.schema.json", &answer["data"]);

    let status = env.run_json(&["status"]);
    assert_eq!(status["ok"], true);
    validate("status.schema.json", &status["data"]);

    let run = env.run_json(&[
        "run",
        "--x",
        "Apple Calendar",
        "--y",
        "Google Calendar",
        "--winner",
        "depends",
        "--persona",
        "power-user",
        "--answer",
        "ecosystem=apple",
        "--answer",
        "lens=a",
    ]);
    assert_eq!(run["ok"], true);
    validate("run.schema.json", &run["data"]);

    let classify = env.run_json(&["classify", "Microsoft Bookings"]);
    assert_eq!(classify["ok"], true);
    validate("classify.schema.json", &classify["data"]);

    let gates = env.run_json(&["gates", "list"]);
    assert_eq!(gates["ok"], true);
    validate("gates-list.schema.json", &gates["data"]);
}
