//! Runs the compiled `colorhash` binary for end-to-end tests.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Builder for one invocation of the binary.
pub struct TestCli {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<Vec<u8>>,
}

impl TestCli {
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            stdin: None,
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs
            .push((key.to_string(), value.as_ref().display().to_string()));
        self
    }

    pub fn stdin(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(data.into());
        self
    }

    pub fn run(self) -> TestRun {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_colorhash"));
        cmd.args(&self.args)
            .env_remove("CONFIG_FILE")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to spawn colorhash");
        {
            let mut stdin = child.stdin.take().expect("stdin is piped");
            if let Some(data) = &self.stdin {
                stdin.write_all(data).expect("Failed to write stdin");
            }
        }
        let output = child.wait_with_output().expect("Failed to wait for colorhash");
        TestRun { output }
    }
}

/// Captured result of a run.
pub struct TestRun {
    pub output: Output,
}

impl TestRun {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn stdout(&self) -> &[u8] {
        &self.output.stdout
    }

    pub fn stdout_text(&self) -> String {
        String::from_utf8(self.output.stdout.clone()).expect("stdout is not UTF-8")
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }
}
