// tests/common/mod.rs

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A fake launcher install rooted in a tempdir, mirroring the layout the
/// launcher expects next to its own binary.
pub struct FakeInstall {
    root: TempDir,
}

impl FakeInstall {
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn bin_dir(&self) -> PathBuf {
        let venv = self.path().join("venv");
        if cfg!(windows) {
            venv.join("Scripts")
        } else {
            venv.join("bin")
        }
    }

    pub fn activate_script(&self) -> PathBuf {
        self.bin_dir()
            .join(if cfg!(windows) { "activate.bat" } else { "activate" })
    }

    pub fn interpreter(&self) -> PathBuf {
        self.bin_dir()
            .join(if cfg!(windows) { "python.exe" } else { "python" })
    }

    pub fn entry_point(&self) -> PathBuf {
        self.path().join("src").join("cli.py")
    }
}

/// Builder for fake installs. By default everything is present and the
/// interpreter is an inert stub file.
pub struct InstallBuilder {
    activate: bool,
    interpreter: bool,
    entry_point: bool,
    interpreter_script: Option<String>,
}

impl InstallBuilder {
    pub fn new() -> Self {
        Self {
            activate: true,
            interpreter: true,
            entry_point: true,
            interpreter_script: None,
        }
    }

    pub fn without_activate(mut self) -> Self {
        self.activate = false;
        self
    }

    pub fn without_interpreter(mut self) -> Self {
        self.interpreter = false;
        self
    }

    pub fn without_entry_point(mut self) -> Self {
        self.entry_point = false;
        self
    }

    /// Install an executable script as the fake interpreter (unix only;
    /// relies on the shebang line in `body`).
    pub fn interpreter_script(mut self, body: &str) -> Self {
        self.interpreter_script = Some(body.to_string());
        self
    }

    pub fn build(self) -> FakeInstall {
        let install = FakeInstall {
            root: tempfile::tempdir().expect("tempdir"),
        };

        fs::create_dir_all(install.bin_dir()).expect("venv bin dir");
        fs::create_dir_all(install.path().join("src")).expect("src dir");

        if self.activate {
            fs::write(install.activate_script(), "# stand-in activation script\n")
                .expect("activate script");
        }
        if let Some(body) = &self.interpreter_script {
            write_executable(&install.interpreter(), body);
        } else if self.interpreter {
            fs::write(install.interpreter(), "").expect("interpreter stub");
        }
        if self.entry_point {
            fs::write(install.entry_point(), "print('placeholder')\n").expect("entry point");
        }

        install
    }
}

impl Default for InstallBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn write_executable(path: &Path, body: &str) {
    fs::write(path, body).expect("interpreter script");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod interpreter");
    }
}
