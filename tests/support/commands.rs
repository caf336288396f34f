//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// A lockbox command isolated to this test's repository and home.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("lockbox").expect("failed to find lockbox binary");
        cmd.env("LOCKBOX_HOME", self.home.path());
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("LOCKBOX_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .unwrap_or_else(|e| panic!("failed to run lockbox {:?}: {}", args, e))
    }

    pub fn init_cmd(&self) -> Output {
        self.run(&["init"])
    }

    pub fn key_add(&self, name: &str) -> Output {
        self.run(&["key", "add", "--name", name])
    }

    pub fn key_list(&self) -> Output {
        self.run(&["key", "list"])
    }

    pub fn key_list_json(&self) -> Output {
        self.run(&["key", "list", "--json"])
    }

    pub fn key_remove(&self, name: &str) -> Output {
        self.run(&["key", "remove", "--name", name, "--yes"])
    }

    pub fn key_use(&self, name: &str) -> Output {
        self.run(&["key", "use", "--name", name])
    }

    pub fn team_add_me(&self, key: &str) -> Output {
        self.run(&["team", "add", "--me", key])
    }

    pub fn team_add(&self, name: &str, public_key: &str) -> Output {
        self.run(&["team", "add", "--name", name, "--key", public_key])
    }

    pub fn team_list(&self) -> Output {
        self.run(&["team", "list"])
    }

    pub fn team_list_json(&self) -> Output {
        self.run(&["team", "list", "--json"])
    }

    pub fn team_remove_key(&self, public_key: &str) -> Output {
        self.run(&["team", "remove", "--key", public_key, "--yes"])
    }

    pub fn team_remove_name(&self, name: &str) -> Output {
        self.run(&["team", "remove", "--name", name, "--yes"])
    }

    pub fn encrypt(&self, input: &str) -> Output {
        self.run(&["secret", "encrypt", input, "--yes"])
    }

    pub fn decrypt(&self, input: &str, key: &str) -> Output {
        self.run(&["secret", "decrypt", input, "--key", key])
    }
}
