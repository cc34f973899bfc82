use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use compass_lib::CompassOutput;
use tempfile::TempDir;

fn bin_path() -> PathBuf {
    std::env::var("CARGO_BIN_EXE_compass")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("target")
                .join("debug")
                .join(if cfg!(windows) { "compass.exe" } else { "compass" })
        })
}

fn run_cmd(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .expect("run compass command")
}

fn parse_json(stdout: &[u8]) -> CompassOutput {
    serde_json::from_slice(stdout).expect("output should be valid JSON")
}

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path.to_string_lossy().into_owned()
}

fn survey(dir: &TempDir) -> (String, String) {
    let questions = write(
        dir,
        "questions.json",
        r#"[
  {"index": 0, "type": "económico", "multiplier": 1, "short": true},
  {"index": 1, "type": "social", "multiplier": -1, "short": true},
  {"index": 2, "type": "política", "multiplier": 1, "short": false},
  {"index": 3, "type": "económico", "multiplier": -1, "short": false}
]"#,
    );
    let profiles = write(
        dir,
        "profiles.json",
        r#"{
  "opposite": {"0": -2, "1": 2, "2": -2, "3": 2},
  "twin": {"0": 2, "1": -2, "2": 2, "3": -2},
  "sparse": {"3": -2}
}"#,
    );
    (questions, profiles)
}

#[test]
fn score_reports_axes_position_and_ranking() {
    let dir = TempDir::new().expect("tempdir");
    let (questions, profiles) = survey(&dir);
    let responses = write(&dir, "responses.json", r#"{"0": 2, "1": -2, "2": 2}"#);

    let output = run_cmd(&[
        "score",
        "--questions",
        &questions,
        "--responses",
        &responses,
        "--profiles",
        &profiles,
    ]);
    assert!(output.status.success(), "score should exit 0");

    match parse_json(&output.stdout) {
        CompassOutput::Score(out) => {
            assert_eq!(out.answered, 3);
            assert_eq!(out.report.scores.economic, 1.0);
            assert_eq!(out.report.scores.social, 1.0);
            assert_eq!(out.report.scores.political, 1.0);
            assert_eq!(out.report.position.left, 97.5);
            assert_eq!(out.report.position.top, -2.5);
            assert_eq!(out.report.political_color, "#33d927");

            // "sparse" has no entry for any answered question: optimistic 1.0,
            // tied with "twin" and listed after it.
            let ids: Vec<_> = out
                .affinities
                .iter()
                .map(|e| e.profile_id.as_str())
                .collect();
            assert_eq!(ids, vec!["twin", "sparse", "opposite"]);
            assert_eq!(out.affinities.get("twin"), Some(1.0));
            assert_eq!(out.affinities.get("sparse"), Some(1.0));
            assert_eq!(out.affinities.get("opposite"), Some(0.0));
            assert_eq!(out.top_match.unwrap().profile_id, "twin");

            assert_eq!(out.profiles.len(), 3);
            let twin = out.profiles.iter().find(|p| p.profile_id == "twin").unwrap();
            // economic: (2 + 2) / 4 over questions 0 and 3
            assert_eq!(twin.report.scores.economic, 1.0);
        }
        other => panic!("expected score output, got {:?}", other),
    }
}

#[test]
fn question_ids_restrict_the_comparison() {
    let dir = TempDir::new().expect("tempdir");
    let (questions, profiles) = survey(&dir);
    let responses = write(&dir, "responses.json", r#"{"0": 2, "1": 0}"#);

    let output = run_cmd(&[
        "score",
        "--questions",
        &questions,
        "--responses",
        &responses,
        "--profiles",
        &profiles,
        "--question-ids",
        "1,2",
        "--no-placements",
    ]);
    assert!(output.status.success());

    match parse_json(&output.stdout) {
        CompassOutput::Score(out) => {
            // Only question 1 is both requested and answered: |0 - 2| / 4.
            assert_eq!(out.affinities.get("opposite"), Some(0.5));
            assert_eq!(out.affinities.get("twin"), Some(0.5));
            assert_eq!(out.affinities.get("sparse"), Some(1.0));
            assert!(out.profiles.is_empty());
        }
        other => panic!("expected score output, got {:?}", other),
    }
}

#[test]
fn no_responses_give_neutral_report_and_empty_ranking() {
    let dir = TempDir::new().expect("tempdir");
    let (questions, profiles) = survey(&dir);
    let responses = write(&dir, "responses.json", "{}");

    let output = run_cmd(&[
        "score",
        "--questions",
        &questions,
        "--responses",
        &responses,
        "--profiles",
        &profiles,
    ]);
    assert!(output.status.success());

    match parse_json(&output.stdout) {
        CompassOutput::Score(out) => {
            assert_eq!(out.answered, 0);
            assert_eq!(out.report.position.left, 47.5);
            assert_eq!(out.report.position.top, 47.5);
            assert!(out.affinities.is_empty());
            assert!(out.top_match.is_none());
        }
        other => panic!("expected score output, got {:?}", other),
    }
}

#[test]
fn yaml_inputs_and_config_max_diff() {
    let dir = TempDir::new().expect("tempdir");
    let questions = write(
        &dir,
        "questions.yaml",
        "- index: 0\n  type: social\n  multiplier: 1\n",
    );
    let profiles = write(&dir, "profiles.yml", "far:\n  0: -2\nnear:\n  0: 1\n");
    let responses = write(&dir, "responses.yaml", "0: 2\n");
    let config = write(&dir, "compass.toml", "max_diff_per_question = 8\n");

    let output = run_cmd(&[
        "score",
        "--questions",
        &questions,
        "--responses",
        &responses,
        "--profiles",
        &profiles,
        "--config",
        &config,
    ]);
    assert!(output.status.success());

    match parse_json(&output.stdout) {
        CompassOutput::Score(out) => {
            assert_eq!(out.affinities.get("far"), Some(0.5));
            assert_eq!(out.affinities.get("near"), Some(0.875));
            assert_eq!(out.top_match.unwrap().profile_id, "near");
        }
        other => panic!("expected score output, got {:?}", other),
    }
}

#[test]
fn output_flag_writes_file() {
    let dir = TempDir::new().expect("tempdir");
    let (questions, profiles) = survey(&dir);
    let responses = write(&dir, "responses.json", r#"{"0": 1}"#);
    let out_path = dir.path().join("result.json");

    let output = run_cmd(&[
        "score",
        "--questions",
        &questions,
        "--responses",
        &responses,
        "--profiles",
        &profiles,
        "--output",
        out_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let written = std::fs::read(&out_path).expect("result file");
    assert!(matches!(parse_json(&written), CompassOutput::Score(_)));
}

#[test]
fn color_interpolates_between_given_endpoints() {
    let output = run_cmd(&["color", "--from", "#000", "--to", "#ffffff", "--t", "0.5"]);
    assert!(output.status.success());
    match parse_json(&output.stdout) {
        CompassOutput::Color(out) => assert_eq!(out.color, "#808080"),
        other => panic!("expected color output, got {:?}", other),
    }
}

#[test]
fn color_political_uses_default_gradient() {
    let output = run_cmd(&["color", "--political", "-1"]);
    assert!(output.status.success());
    match parse_json(&output.stdout) {
        CompassOutput::Color(out) => {
            assert_eq!(out.t, 0.0);
            assert_eq!(out.color, "#d92372");
        }
        other => panic!("expected color output, got {:?}", other),
    }
}

#[test]
fn color_requires_a_position() {
    let output = run_cmd(&["color"]);
    assert_eq!(output.status.code(), Some(2));
}
