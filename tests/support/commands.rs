//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a genvy command rooted at the test project directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("genvy").expect("failed to find genvy binary");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run `genvy` with no target environment.
    pub fn generate(&self) -> Output {
        self.cmd().output().expect("failed to run genvy")
    }

    /// Run `genvy <env>`.
    pub fn generate_for(&self, env: &str) -> Output {
        self.cmd().arg(env).output().expect("failed to run genvy")
    }

    /// Run `genvy` from a subdirectory of the project.
    pub fn generate_in(&self, subdir: &str) -> Output {
        let path = self.dir.path().join(subdir);
        std::fs::create_dir_all(&path).expect("failed to create subdir");

        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("genvy").expect("failed to find genvy binary");
        cmd.current_dir(path);
        cmd.output().expect("failed to run genvy")
    }
}
