#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");

        Self {
            _tmp: tmp,
            home,
            work,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("desks");
        cmd.env("HOME", &self.home)
            .env_remove("DESKS_STORE")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn store_path(&self) -> PathBuf {
        self.home.join(".config/desks/store.json")
    }

    pub fn write_config(&self, raw: &str) {
        let dir = self.home.join(".config/desks");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), raw).expect("write config");
    }

    pub fn write_people(&self, people: &Value) -> PathBuf {
        let path = self.work.join("people.json");
        fs::write(
            &path,
            serde_json::to_string_pretty(people).expect("serialize people"),
        )
        .expect("write people");
        path
    }

    pub fn add_team(&self, name: &str) -> String {
        let out = self.run_json(&["team", "put", name]);
        out["data"]["id"].as_str().expect("team id").to_string()
    }

    pub fn add_person(&self, name: &str, team: Option<&str>, dog: Option<&str>) -> String {
        let mut args = vec!["person", "put", name];
        if let Some(t) = team {
            args.extend(["--team", t]);
        }
        if let Some(d) = dog {
            args.extend(["--dog", d]);
        }
        let out = self.run_json(&args);
        out["data"]["id"].as_str().expect("person id").to_string()
    }

    pub fn layout_names(&self, extra: &[&str]) -> Vec<String> {
        let mut args = vec!["layout"];
        args.extend_from_slice(extra);
        let out = self.run_json(&args);
        out["data"]["desks"]
            .as_array()
            .expect("desks array")
            .iter()
            .map(|d| d["name"].as_str().expect("desk name").to_string())
            .collect()
    }
}
