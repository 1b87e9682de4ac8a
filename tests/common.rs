use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// Not every test binary uses every helper.
#[allow(dead_code)]
pub struct TestContext {
    pub temp_dir: TempDir,
    pub folders_bin: PathBuf,
    pub latest_release_bin: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        Self {
            temp_dir,
            folders_bin: PathBuf::from(env!("CARGO_BIN_EXE_folders")),
            latest_release_bin: PathBuf::from(env!("CARGO_BIN_EXE_latest-release")),
        }
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `folders` running inside the temp dir.
    pub fn folders(&self) -> Command {
        let mut cmd = Command::new(&self.folders_bin);
        cmd.current_dir(self.dir());
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// `latest-release` pointed at `api_url`.
    pub fn latest_release(&self, api_url: &str) -> Command {
        let mut cmd = Command::new(&self.latest_release_bin);
        cmd.env("LATEST_RELEASE_API_URL", api_url);
        cmd.env_remove("RUST_LOG");
        cmd
    }

    pub fn touch(&self, name: &str) -> PathBuf {
        let path = self.dir().join(name);
        fs::write(&path, name).expect("Failed to create file");
        path
    }

    /// File names in the temp dir, sorted.
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir())
            .expect("Failed to read temp dir")
            .map(|entry| {
                entry
                    .expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .to_string()
            })
            .collect();
        names.sort();
        names
    }
}

#[allow(dead_code)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: std::process::ExitStatus,
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            status: output.status,
        }
    }
}

#[allow(dead_code)]
impl CommandOutput {
    pub fn assert_success(&self) -> &Self {
        if !self.status.success() {
            panic!(
                "Command failed with status {:?}\nstdout: {}\nstderr: {}",
                self.status.code(),
                self.stdout,
                self.stderr
            );
        }
        self
    }

    pub fn assert_failure(&self) -> &Self {
        assert!(
            !self.status.success(),
            "Command unexpectedly succeeded\nstdout: {}\nstderr: {}",
            self.stdout,
            self.stderr
        );
        self
    }

    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Stdout did not contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }

    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "Stderr did not contain '{}'\nActual stderr: {}",
            text,
            self.stderr
        );
        self
    }
}
