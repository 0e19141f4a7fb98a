use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tape"))
}

fn temp_xdg_dirs(prefix: &str) -> (PathBuf, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time")
        .as_nanos();
    let base = std::env::temp_dir().join(format!(
        "tape_{}_{}_{}",
        prefix,
        std::process::id(),
        nanos
    ));
    let config = base.join("c");
    let data = base.join("d");
    std::fs::create_dir_all(&config).expect("create config dir");
    std::fs::create_dir_all(&data).expect("create data dir");
    (config, data)
}

fn apply_xdg_env(cmd: &mut Command, config: &Path, data: &Path) {
    cmd.env("XDG_CONFIG_HOME", config)
        .env("XDG_DATA_HOME", data)
        .env_remove("TAPE_CONFIG")
        .env_remove("TAPE_PATH")
        .env_remove("RUST_LOG")
        .env("TERM", "dumb");
}

struct Env {
    config: PathBuf,
    data: PathBuf,
    tape: PathBuf,
}

impl Env {
    fn new(prefix: &str) -> Self {
        let (config, data) = temp_xdg_dirs(prefix);
        let tape = data.join("tape.json");
        Self { config, data, tape }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        apply_xdg_env(&mut cmd, &self.config, &self.data);
        cmd.env("TAPE_PATH", &self.tape);
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run tape")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "tape {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf8 stdout")
    }

    fn run_json(&self, args: &[&str]) -> serde_json::Value {
        serde_json::from_str(&self.run_ok(args)).expect("json output")
    }

    fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn tape");
        child
            .stdin
            .take()
            .expect("stdin")
            .write_all(input.as_bytes())
            .expect("write stdin");
        child.wait_with_output().expect("wait for tape")
    }
}

impl Drop for Env {
    fn drop(&mut self) {
        if let Some(base) = self.config.parent() {
            let _ = std::fs::remove_dir_all(base);
        }
    }
}

#[test]
fn test_eval_prints_formatted_result() {
    let env = Env::new("eval");

    let stdout = env.run_ok(&["eval", "1000*3,5"]);
    assert_eq!(stdout.trim_end(), "3 500");

    let value = env.run_json(&["eval", "--json", "2*(3+1)"]);
    assert_eq!(value["value"], 8.0);
    assert_eq!(value["display"], "8");

    // Nothing is written by eval
    assert!(!env.tape.exists());
}

#[test]
fn test_eval_division_by_zero_is_invalid_input() {
    let env = Env::new("divzero");
    let output = env.run(&["eval", "10/0"]);
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Division by zero"), "stderr: {}", stderr);
}

#[test]
fn test_add_list_total_and_export() {
    let env = Env::new("flow");

    let added = env.run_json(&["add", "--json", "--label", "rent", "1200+350"]);
    assert_eq!(added["value"], 1550.0);
    assert_eq!(added["label"], "rent");

    // No terminal, so an unlabeled value is kept without a label
    let added = env.run_json(&["add", "--json", "-0,5"]);
    assert_eq!(added["label"], "");

    let list = env.run_json(&["list", "--json"]);
    let entries = list.as_array().expect("array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["expr"], "-0,5");
    assert_eq!(entries[1]["expr"], "1200+350");

    let limited = env.run_json(&["list", "--json", "--limit", "1"]);
    assert_eq!(limited.as_array().expect("array").len(), 1);

    let total = env.run_json(&["total", "--json"]);
    assert_eq!(total["total"], 1549.5);
    assert_eq!(total["count"], 2);
    assert_eq!(env.run_ok(&["total"]).trim_end(), "1 549,5");

    let export = env.run_ok(&["export"]);
    assert_eq!(
        export,
        "1\u{2009}550 | 1200+350 — rent\n-0,5 | -0,5\n= 1\u{2009}549,5\n"
    );

    let file = env.data.join("export.txt");
    let file_arg = file.to_string_lossy().to_string();
    env.run_ok(&["export", "-q", "--output", &file_arg]);
    assert_eq!(
        std::fs::read_to_string(&file).expect("read export"),
        export
    );
}

#[test]
fn test_failed_add_keeps_previous_expression() {
    let env = Env::new("failadd");
    env.run_ok(&["expr", "7+"]);

    let output = env.run(&["add", "--label", "oops", "1/0"]);
    assert_eq!(output.status.code(), Some(4));

    let expr = env.run_json(&["expr", "--json"]);
    assert_eq!(expr["expr"], "7+");
    assert!(env.run_json(&["list", "--json"]).as_array().expect("array").is_empty());
}

#[test]
fn test_keys_build_and_evaluate_expression() {
    let env = Env::new("keys");

    let value = env.run_json(&["keys", "--json", "1", "2", ",", "5", "×", "2"]);
    assert_eq!(value["expr"], "12,5*2");
    assert_eq!(value["preview"], "= 25");

    let value = env.run_json(&["keys", "--json", "="]);
    assert_eq!(value["expr"], "25");
    assert_eq!(value["result"], 25.0);

    let value = env.run_json(&["keys", "--json", "BK"]);
    assert_eq!(value["expr"], "2");

    let value = env.run_json(&["expr", "--json", "--clear"]);
    assert_eq!(value["expr"], "");
}

#[test]
fn test_keys_later_equals_clears_earlier_failure() {
    let env = Env::new("keys-retry");

    let value = env.run_json(&["keys", "--json", "1", "+", "=", "2", "="]);
    assert_eq!(value["expr"], "3");
    assert_eq!(value["result"], 3.0);
    assert!(value["error"].is_null());

    let output = env.run(&["keys", "--json", "=", "+", "="]);
    assert_eq!(output.status.code(), Some(4));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["expr"], "3+");
    assert!(value["result"].is_null());
    assert!(value["error"].is_string());
}

#[test]
fn test_edit_and_delete_by_prefix() {
    let env = Env::new("edit");

    let added = env.run_json(&["add", "--json", "--label", "lunch", "12+3"]);
    let id = added["id"].as_str().expect("id").to_string();
    let prefix = &id[..8];

    let edited = env.run_json(&["edit", "--json", prefix, "--value", "20"]);
    assert_eq!(edited["expr"], "20,00");
    assert_eq!(edited["value"], 20.0);
    assert_eq!(edited["label"], "lunch");

    let edited = env.run_json(&["edit", "--json", prefix, "--expr", "4*5+1", "--label", "brunch"]);
    assert_eq!(edited["value"], 21.0);
    assert_eq!(edited["label"], "brunch");

    let output = env.run(&["edit", prefix]);
    assert_eq!(output.status.code(), Some(4));

    env.run_ok(&["delete", prefix]);
    assert!(env.run_json(&["list", "--json"]).as_array().expect("array").is_empty());
}

#[test]
fn test_unknown_entry_is_not_found() {
    let env = Env::new("missing");
    env.run_ok(&["add", "--label", "x", "1"]);

    let output = env.run(&["delete", "00000000-0000-4000-8000-000000000000"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tape list"), "stderr: {}", stderr);
}

#[test]
fn test_reset_requires_confirmation_without_terminal() {
    let env = Env::new("reset");
    env.run_ok(&["add", "--label", "x", "5"]);

    let output = env.run(&["reset"]);
    assert_eq!(output.status.code(), Some(4));
    assert_eq!(env.run_json(&["total", "--json"])["count"], 1);

    env.run_ok(&["reset", "--yes"]);
    let total = env.run_json(&["total", "--json"]);
    assert_eq!(total["count"], 0);
    assert_eq!(total["total"], 0.0);
}

#[test]
fn test_theme_is_persisted() {
    let env = Env::new("theme");
    assert_eq!(env.run_ok(&["theme"]).trim_end(), "dark");
    assert_eq!(env.run_ok(&["theme", "light"]).trim_end(), "light");
    assert_eq!(env.run_ok(&["theme"]).trim_end(), "light");

    let output = env.run(&["theme", "sepia"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_init_writes_config_and_tape() {
    let env = Env::new("init");
    let tape = env.data.join("custom.json");
    let tape_arg = tape.to_string_lossy().to_string();

    let mut cmd = Command::new(bin());
    apply_xdg_env(&mut cmd, &env.config, &env.data);
    let output = cmd
        .args(["init", &tape_arg, "--edit-decimals", "3"])
        .output()
        .expect("run tape init");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let config = std::fs::read_to_string(env.config.join("tape").join("config.toml"))
        .expect("read config");
    assert!(config.contains("custom.json"));
    assert!(config.contains("edit_decimals = 3"));
    assert!(tape.exists());

    // Without TAPE_PATH the configured tape is used
    let mut cmd = Command::new(bin());
    apply_xdg_env(&mut cmd, &env.config, &env.data);
    let output = cmd
        .args(["add", "--json", "--label", "cfg", "2"])
        .output()
        .expect("run tape add");
    assert!(output.status.success());
    let saved = std::fs::read_to_string(&tape).expect("read tape");
    assert!(saved.contains("cfg"));

    let mut cmd = Command::new(bin());
    apply_xdg_env(&mut cmd, &env.config, &env.data);
    let output = cmd.args(["init", &tape_arg]).output().expect("run tape init");
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_session_reads_piped_commands() {
    let env = Env::new("session");

    let output = env.run_with_stdin(
        &["session"],
        "100 + 20 =\n:add\ngroceries\n2 × 3\n:add coffee\n9\n:add\n:discard\n:quit\n",
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let list = env.run_json(&["list", "--json"]);
    let entries = list.as_array().expect("array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["label"], "coffee");
    assert_eq!(entries[0]["value"], 6.0);
    assert_eq!(entries[1]["label"], "groceries");
    assert_eq!(entries[1]["value"], 120.0);
}

#[test]
fn test_no_command_prints_quickstart() {
    let env = Env::new("bare");
    let stdout = env.run_ok(&[]);
    assert!(stdout.contains("Quickstart:"));
}
