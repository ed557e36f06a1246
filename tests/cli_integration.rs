//! End-to-end tests for the terminal221b binary.
//!
//! Every test runs with its own data root so stored keys and config files
//! never leak between tests or into the real home directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PRO_KEY: &str = "PRO_12345678901234567890";
const ENT_KEY: &str = "ENT_12345678901234567890";

/// A command isolated under `home`, with no license key in the environment.
fn t221b(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("terminal221b").unwrap();
    cmd.env("HOME", home.path())
        .env("TERMINAL221B_HOME", home.path().join(".terminal221b"))
        .env_remove("TERMINAL221B_CONFIG")
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("LICENSE_KEY");
    cmd
}

fn with_key(home: &TempDir, key: &str) -> Command {
    let mut cmd = t221b(home);
    cmd.env("LICENSE_KEY", key);
    cmd
}

mod startup {
    use super::*;

    #[test]
    fn version_flag_prints_version_only() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .arg("-v")
            .assert()
            .success()
            .stdout(format!("Terminal221b v{}\n", env!("CARGO_PKG_VERSION")))
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn bare_invocation_shows_overview() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .assert()
            .success()
            .stdout(predicate::str::contains("Polymathic Autonomous Organization"))
            .stdout(predicate::str::contains("License Tier: FREE"))
            .stdout(predicate::str::contains("Available commands:"))
            .stderr(predicate::str::contains("FREE TIER ACTIVE"));
    }

    #[test]
    fn free_tier_license_info() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .arg("-l")
            .assert()
            .success()
            .stdout(predicate::str::contains("License Tier: FREE"))
            .stdout(predicate::str::contains("  • Runs/day: 5"))
            .stdout(predicate::str::contains("  • Max agents: 1"))
            .stdout(predicate::str::contains("  • Blockchain: ✗"));
    }

    #[test]
    fn pro_tier_license_info() {
        let home = TempDir::new().unwrap();
        with_key(&home, PRO_KEY)
            .arg("--license-info")
            .assert()
            .success()
            .stdout(predicate::str::contains("License Tier: PRO"))
            .stdout(predicate::str::contains("  • Runs/day: 100"))
            .stdout(predicate::str::contains("  • Blockchain: ✓"))
            .stderr(predicate::str::contains(
                "✅ Pro License activated - 100 runs/day, 3 agents",
            ))
            .stderr(predicate::str::contains("FREE TIER ACTIVE").not());
    }

    #[test]
    fn enterprise_tier_license_info() {
        let home = TempDir::new().unwrap();
        with_key(&home, ENT_KEY)
            .arg("-l")
            .assert()
            .success()
            .stdout(predicate::str::contains("License Tier: ENTERPRISE"))
            .stdout(predicate::str::contains("  • Runs/day: Unlimited"))
            .stderr(predicate::str::contains(
                "✅ Enterprise License activated - Unlimited usage",
            ));
    }

    #[test]
    fn invalid_key_falls_back_to_free() {
        let home = TempDir::new().unwrap();
        with_key(&home, "PRO_short")
            .arg("-l")
            .assert()
            .success()
            .stdout(predicate::str::contains("License Tier: FREE"))
            .stderr(predicate::str::contains(
                "Invalid license key. Falling back to Free Tier.",
            ))
            .stderr(predicate::str::contains("FREE TIER ACTIVE"));
    }

    #[test]
    fn key_is_never_printed() {
        let home = TempDir::new().unwrap();
        with_key(&home, PRO_KEY)
            .args(["--debug", "license", "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains(PRO_KEY).not())
            .stderr(predicate::str::contains(PRO_KEY).not());
    }

    #[test]
    fn quiet_suppresses_notices() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["-q", "agents"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::is_empty());
    }
}

mod agents {
    use super::*;

    #[test]
    fn listing_marks_locked_agents_on_free() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .arg("agents")
            .assert()
            .success()
            .stdout(predicate::str::contains("Available Agents:"))
            .stdout(predicate::str::contains(
                "  analyst      Data analysis, research, and insights (Free+)\n",
            ))
            .stdout(predicate::str::contains("(Pro+) [locked]"));
    }

    #[test]
    fn nothing_locked_on_pro() {
        let home = TempDir::new().unwrap();
        with_key(&home, PRO_KEY)
            .arg("agents")
            .assert()
            .success()
            .stdout(predicate::str::contains("[locked]").not());
    }
}

mod run {
    use super::*;

    #[test]
    fn default_agent_allowed_on_free() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .arg("run")
            .assert()
            .success()
            .stdout(predicate::str::contains("Starting analyst agent..."))
            .stdout(predicate::str::contains("Agent system not yet implemented."));
    }

    #[test]
    fn prompt_reaches_agent_stub() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["run", "--prompt", "summarise the logs"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Agent system not yet implemented."));
    }

    #[test]
    fn other_agent_denied_on_free() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["run", "--agent", "writer"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("Starting").not())
            .stderr(predicate::str::contains(
                "error: Free tier only supports the analyst agent.",
            ))
            .stderr(predicate::str::contains("Upgrade to Pro for all agents:"));
    }

    #[test]
    fn other_agent_allowed_on_pro() {
        let home = TempDir::new().unwrap();
        with_key(&home, PRO_KEY)
            .args(["run", "-a", "engineer"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Starting engineer agent..."));
    }

    #[test]
    fn unknown_agent_is_a_usage_error() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["run", "--agent", "wizard"])
            .assert()
            .failure()
            .code(2);
    }

    #[test]
    fn configured_default_agent_is_used() {
        let home = TempDir::new().unwrap();
        with_key(&home, PRO_KEY)
            .args(["config", "set", "agents.default", "writer"])
            .assert()
            .success();
        with_key(&home, PRO_KEY)
            .arg("run")
            .assert()
            .success()
            .stdout(predicate::str::contains("Starting writer agent..."));
    }
}

mod tui {
    use super::*;

    #[test]
    fn tui_is_a_stub() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .arg("tui")
            .assert()
            .success()
            .stdout(predicate::str::contains("Launching Terminal221b TUI..."))
            .stdout(predicate::str::contains("TUI not yet implemented."));
    }
}

mod wallet {
    use super::*;

    #[test]
    fn denied_on_free() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["wallet", "--balance"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("Solana Wallet Manager").not())
            .stderr(predicate::str::contains(
                "error: Blockchain features require Pro or Enterprise tier.",
            ))
            .stderr(predicate::str::contains("Upgrade at:"));
    }

    #[test]
    fn allowed_on_pro() {
        let home = TempDir::new().unwrap();
        with_key(&home, PRO_KEY)
            .args(["wallet", "--create"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Solana Wallet Manager"))
            .stdout(predicate::str::contains(
                "Blockchain integration not yet implemented.",
            ));
    }
}

mod license {
    use super::*;

    #[test]
    fn status_without_key() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .arg("license")
            .assert()
            .success()
            .stdout(predicate::str::contains("License: Free | Runs: 0/5 | Agents: 1"))
            .stdout(predicate::str::contains("Key: none"))
            .stdout(predicate::str::contains("Runs left today: 5"));
    }

    #[test]
    fn status_json() {
        let home = TempDir::new().unwrap();
        let output = with_key(&home, ENT_KEY)
            .args(["license", "status", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["tier"], "enterprise");
        assert_eq!(value["key_source"], "environment");
        assert_eq!(value["runs_today"], 0);
        assert!(value["remaining_runs"].is_null());
        assert!(value["key_fingerprint"].is_string());
    }

    #[test]
    fn activate_then_status_uses_stored_key() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["license", "activate", "--key", PRO_KEY])
            .assert()
            .success()
            .stdout(predicate::str::contains("Pro License activated"));

        t221b(&home)
            .args(["license", "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("License: Pro | Runs: 0/100 | Agents: 3"))
            .stdout(predicate::str::contains("(from secret store)"))
            .stdout(predicate::str::contains(PRO_KEY).not());
    }

    #[test]
    fn activate_rejects_invalid_key() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["license", "activate", "--key", "FREE_12345678901234567890"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid license key"));

        t221b(&home)
            .args(["license", "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Key: none"));
    }

    #[test]
    fn activate_requires_key_when_not_interactive() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["--no-interactive", "license", "activate"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("License key required"));
    }

    #[test]
    fn env_key_takes_precedence_over_stored_key() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["license", "activate", "--key", PRO_KEY])
            .assert()
            .success();

        with_key(&home, ENT_KEY)
            .args(["license", "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("License: Enterprise"))
            .stdout(predicate::str::contains("(from $LICENSE_KEY)"));
    }

    #[test]
    fn deactivate_removes_stored_key() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["license", "activate", "--key", ENT_KEY])
            .assert()
            .success();

        t221b(&home)
            .args(["--no-interactive", "license", "deactivate"])
            .assert()
            .success()
            .stdout(predicate::str::contains("License key removed."));

        t221b(&home)
            .arg("-l")
            .assert()
            .success()
            .stdout(predicate::str::contains("License Tier: FREE"));
    }

    #[test]
    fn deactivate_without_stored_key() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["license", "deactivate"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No stored license key."));
    }
}

mod config {
    use super::*;

    #[test]
    fn set_get_list() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["config", "set", "agents.temperature", "0.3"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Set agents.temperature = 0.3"));

        t221b(&home)
            .args(["config", "get", "agents.temperature"])
            .assert()
            .success()
            .stdout("0.3\n");

        t221b(&home)
            .args(["config", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"))
            .stdout(predicate::str::contains("agents.temperature = 0.3"))
            .stdout(predicate::str::contains("secrets.provider = (not set)"));

        assert!(home.path().join(".terminal221b/config.toml").exists());
    }

    #[test]
    fn list_defaults_without_file() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["config", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("# defaults (no config file)"));
    }

    #[test]
    fn rejects_unknown_key() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["config", "get", "agents.colour"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("agents.colour"));
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["config", "set", "agents.temperature", "7"])
            .assert()
            .failure();
        assert!(!home.path().join(".terminal221b/config.toml").exists());
    }

    #[test]
    fn explicit_config_path_is_honoured() {
        let home = TempDir::new().unwrap();
        let path = home.path().join("custom.toml");
        std::fs::write(&path, "[agents]\ndefault = \"analyst\"\n").unwrap();

        t221b(&home)
            .env("TERMINAL221B_CONFIG", &path)
            .args(["config", "get", "agents.default"])
            .assert()
            .success()
            .stdout("analyst\n");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let home = TempDir::new().unwrap();
        let path = home.path().join("broken.toml");
        std::fs::write(&path, "interactive = \"maybe\"\n").unwrap();

        t221b(&home)
            .env("TERMINAL221B_CONFIG", &path)
            .arg("agents")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load config"));
    }
}

mod misc {
    use super::*;

    #[test]
    fn bash_completion() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["completion", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("terminal221b"));
    }

    #[test]
    fn upgrade_without_browser() {
        let home = TempDir::new().unwrap();
        t221b(&home)
            .args(["upgrade", "--no-browser"])
            .assert()
            .success()
            .stdout(predicate::str::contains("FREE TIER ACTIVE"))
            .stdout(predicate::str::contains(
                "Pricing: https://bakerstreetproject221B.store/pricing",
            ));
    }

    #[test]
    fn upgrade_on_enterprise() {
        let home = TempDir::new().unwrap();
        with_key(&home, ENT_KEY)
            .arg("upgrade")
            .assert()
            .success()
            .stdout(predicate::str::contains("nothing to upgrade"));
    }
}
