mod common;

use common::TestEnv;
use predicates::str::contains;

#[test]
fn fresh_session_walks_from_prompt_to_suggestion() {
    let env = TestEnv::new();

    let started = env.start_default("depends", "beginner");
    assert_eq!(started["ok"], true);
    assert_eq!(started["data"]["answered_any"], false);
    assert_eq!(
        started["data"]["recommendation"]["headline"],
        "Run the gates to fit this decision to your situation"
    );

    // "Neither" marks interaction but eliminates nothing.
    let neither = env.run_json(&["answer", "hard-requirement", "neither"]);
    assert_eq!(neither["data"]["applied"], true);
    assert_eq!(
        neither["data"]["recommendation"]["headline"],
        "Default verdict: it depends"
    );

    // With no default verdict there is nothing the lens can suggest.
    let lens = env.run_json(&["answer", "lens", "a"]);
    assert_eq!(
        lens["data"]["recommendation"]["headline"],
        "Default verdict: it depends"
    );

    let status = env.run_json(&["status"]);
    assert_eq!(status["data"]["answered_any"], true);
    assert_eq!(status["data"]["eliminated"], "none");
    assert_eq!(status["data"]["suggested"], serde_json::Value::Null);
}

#[test]
fn beginner_minimal_setup_suggests_the_non_default_tool() {
    let env = TestEnv::new();
    env.start_default("x", "beginner");

    let lens = env.run_json(&["answer", "lens", "a"]);
    assert_eq!(
        lens["data"]["recommendation"]["headline"],
        "Recommended by Gate 2: Calendly"
    );
    assert!(lens["data"]["recommendation"]["detail"]
        .as_str()
        .unwrap()
        .contains("No option was eliminated"));
}

#[test]
fn hard_elimination_locks_downstream_gates_until_cleared() {
    let env = TestEnv::new();
    env.start_default("x", "beginner");

    let gate1 = env.run_json(&["answer", "hard-requirement", "x"]);
    assert_eq!(
        gate1["data"]["recommendation"]["headline"],
        "Your gate result: Calendly"
    );

    // Ecosystem answers bounce off the lock without disturbing the state.
    let gate3 = env.run_json(&["answer", "ecosystem", "google"]);
    assert_eq!(gate3["data"]["applied"], false);

    let lens = env.run_json(&["answer", "lens", "a"]);
    assert_eq!(lens["data"]["applied"], false);
    assert!(lens["data"]["lines"][0]
        .as_str()
        .unwrap()
        .contains("Decision already made"));

    let status = env.run_json(&["status"]);
    assert_eq!(status["data"]["eliminated"], "x");
    assert_eq!(status["data"]["source"], "hard_requirement");

    // Only the hard-requirement gate itself can release its elimination.
    env.run_json(&["answer", "hard-requirement", "neither"]);
    let status = env.run_json(&["status"]);
    assert_eq!(status["data"]["eliminated"], "none");
    assert_eq!(status["data"]["source"], "none");
}

#[test]
fn ecosystem_answers_stay_revisable() {
    let env = TestEnv::new();
    env.run_json(&[
        "start",
        "--x",
        "Apple Calendar",
        "--y",
        "Google Calendar",
        "--winner",
        "depends",
        "--persona",
        "minimalist",
    ]);

    let apple = env.run_json(&["answer", "ecosystem", "apple"]);
    assert_eq!(
        apple["data"]["recommendation"]["headline"],
        "Your gate result: Apple Calendar"
    );

    let google = env.run_json(&["answer", "ecosystem", "google"]);
    assert_eq!(
        google["data"]["recommendation"]["headline"],
        "Your gate result: Google Calendar"
    );

    let multi = env.run_json(&["answer", "ecosystem", "multi"]);
    assert_eq!(
        multi["data"]["recommendation"]["headline"],
        "Default verdict: it depends"
    );

    let status = env.run_json(&["status"]);
    assert_eq!(status["data"]["eliminated"], "none");
    assert_eq!(status["data"]["answered_any"], true);
}

#[test]
fn stored_lens_answer_comes_back_after_an_elimination_clears() {
    let env = TestEnv::new();
    env.start_default("x", "solo-user");

    let lens = env.run_json(&["answer", "lens", "a"]);
    assert_eq!(
        lens["data"]["recommendation"]["headline"],
        "Recommended by Gate 2: Square Appointments"
    );

    env.run_json(&["answer", "hard-requirement", "y"]);
    let status = env.run_json(&["status"]);
    assert_eq!(status["data"]["suggested"], serde_json::Value::Null);

    env.run_json(&["answer", "hard-requirement", "neither"]);
    let status = env.run_json(&["status"]);
    assert_eq!(status["data"]["suggested"], "Square Appointments");
    assert_eq!(
        status["data"]["recommendation"]["headline"],
        "Recommended by Gate 2: Square Appointments"
    );
}

#[test]
fn run_applies_scripted_answers_in_order() {
    let env = TestEnv::new();
    let report = env.run_json(&[
        "run",
        "--x",
        "Square Appointments",
        "--y",
        "Calendly",
        "--winner",
        "y",
        "--persona",
        "student",
        "--answer",
        "hard-requirement=neither",
        "--answer",
        "ecosystem=not-sure",
        "--answer",
        "lens=b",
    ]);

    let steps = report["data"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0]["gate"], "hard_requirement");
    assert_eq!(steps[2]["gate"], "lens_scenario");
    // Student "long-term" maps to the default winner.
    assert_eq!(
        report["data"]["recommendation"]["headline"],
        "Recommended by Gate 2: Calendly"
    );
}

#[test]
fn session_lifecycle_start_reset() {
    let env = TestEnv::new();

    env.cmd()
        .arg("status")
        .assert()
        .failure()
        .stderr(contains("no active session"));

    env.start_default("x", "beginner");
    env.cmd()
        .arg("reset")
        .assert()
        .success()
        .stdout(contains("session cleared"));

    env.cmd()
        .arg("reset")
        .assert()
        .success()
        .stdout(contains("no active session"));
}

#[test]
fn start_rejects_duplicate_tool_names() {
    let env = TestEnv::new();
    env.cmd()
        .args([
            "start",
            "--x",
            "Calendly",
            "--y",
            "Calendly",
            "--winner",
            "x",
            "--persona",
            "beginner",
        ])
        .assert()
        .failure()
        .stderr(contains("distinct"));
}
