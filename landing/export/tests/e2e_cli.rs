//! End-to-end CLI tests for forecast-export

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn forecast_export() -> Command {
    let mut cmd = cargo_bin_cmd!("forecast-export");
    cmd.env_remove("RUST_LOG");
    cmd
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        forecast_export()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--out"))
            .stdout(predicate::str::contains("--assets"));
    }

    #[test]
    fn shows_version() {
        forecast_export()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod export {
    use super::*;

    #[test]
    fn writes_index_into_out_dir() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("site");

        forecast_export()
            .current_dir(temp.path())
            .arg("--out")
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let html = std::fs::read_to_string(out.join("index.html")).expect("index.html");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Model Comparison"));
    }

    #[test]
    fn defaults_to_dist_in_working_directory() {
        let temp = TempDir::new().expect("temp dir");

        forecast_export().current_dir(temp.path()).assert().success();

        assert!(temp.path().join("dist").join("index.html").is_file());
    }

    #[test]
    fn title_flag_overrides_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("forecast-landing.toml"),
            "[page]\ntitle = \"From Config\"\n",
        )
        .expect("config");

        forecast_export()
            .current_dir(temp.path())
            .args(["--title", "From Flag"])
            .assert()
            .success();

        let html = std::fs::read_to_string(temp.path().join("dist/index.html")).expect("page");
        assert!(html.contains("From Flag"));
        assert!(!html.contains("From Config"));
    }

    #[test]
    fn reads_output_settings_from_config() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("site.toml");
        std::fs::write(&config, "[output]\ndir = \"public_html\"\nfile_name = \"home.html\"\n")
            .expect("config");

        forecast_export()
            .current_dir(temp.path())
            .arg("--config")
            .arg(&config)
            .assert()
            .success()
            .stdout(predicate::str::contains("home.html"));

        assert!(temp.path().join("public_html/home.html").is_file());
    }

    #[test]
    fn bad_explicit_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("broken.toml");
        std::fs::write(&config, "[output\n").expect("config");

        forecast_export()
            .current_dir(temp.path())
            .arg("--config")
            .arg(&config)
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid config"));
    }

    #[test]
    fn warns_when_sample_dataset_is_missing() {
        let temp = TempDir::new().expect("temp dir");
        let public = temp.path().join("public");
        std::fs::create_dir_all(&public).expect("public");
        std::fs::write(public.join("robots.txt"), "User-agent: *\n").expect("robots");

        forecast_export()
            .current_dir(temp.path())
            .arg("--assets")
            .arg(&public)
            .assert()
            .success()
            .stderr(predicate::str::contains("sample dataset missing"));

        assert!(temp.path().join("dist/robots.txt").is_file());
    }
}
