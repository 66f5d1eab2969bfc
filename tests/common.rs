#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

pub fn rds() -> Command {
    cargo_bin_cmd!("rdriverstats")
}

/// A throwaway directory tree under the system temp dir:
/// `<root>/input`, `<root>/output`, `<root>/plots`.
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    /// Create a fresh workspace, removing leftovers from earlier runs
    pub fn new(name: &str) -> Self {
        let root = env::temp_dir().join(format!("rdriverstats_{}", name));
        fs::remove_dir_all(&root).ok();
        fs::create_dir_all(root.join("input")).expect("create input dir");
        Self { root }
    }

    pub fn input(&self) -> PathBuf {
        self.root.join("input")
    }

    pub fn output(&self) -> PathBuf {
        self.root.join("output")
    }

    pub fn plots(&self) -> PathBuf {
        self.root.join("plots")
    }

    /// A config path that does not exist, so runs never pick up $HOME
    pub fn config(&self) -> PathBuf {
        self.root.join("rdriverstats.conf")
    }

    pub fn summary(&self) -> PathBuf {
        self.output().join("summary.csv")
    }

    pub fn chart(&self) -> PathBuf {
        self.plots().join("top10_drivers.png")
    }

    pub fn write_drivers(&self, content: &str) -> &Self {
        fs::write(self.input().join("drivers.csv"), content).expect("write drivers.csv");
        self
    }

    pub fn write_timesheet(&self, content: &str) -> &Self {
        fs::write(self.input().join("timesheet.csv"), content).expect("write timesheet.csv");
        self
    }

    pub fn read_summary(&self) -> String {
        fs::read_to_string(self.summary()).expect("read summary.csv")
    }

    /// Directory flags for the CLI
    pub fn dir_args(&self) -> Vec<String> {
        vec![
            "--config".into(),
            path_str(&self.config()),
            "--input".into(),
            path_str(&self.input()),
            "--output".into(),
            path_str(&self.output()),
            "--plots".into(),
            path_str(&self.plots()),
        ]
    }
}

pub fn path_str(p: &Path) -> String {
    p.to_string_lossy().to_string()
}

/// The two-driver dataset used by most tests
pub fn alice_and_bob(ws: &Workspace) {
    ws.write_drivers("driverId,name\n1,Alice\n2,Bob\n");
    ws.write_timesheet("driverId,hours-logged,miles-logged\n1,5,100\n1,3,50\n2,8,200\n");
}

/// Parse summary.csv text into (driverId, name, hours, miles) tuples
pub fn parse_summary(content: &str) -> Vec<(String, String, f64, f64)> {
    content
        .lines()
        .skip(1)
        .map(|line| {
            let cells: Vec<&str> = line.split(',').collect();
            (
                cells[0].to_string(),
                cells[1].to_string(),
                cells[2].parse().expect("hours"),
                cells[3].parse().expect("miles"),
            )
        })
        .collect()
}

pub fn is_png(path: &Path) -> bool {
    fs::read(path)
        .map(|bytes| bytes.starts_with(PNG_SIGNATURE))
        .unwrap_or(false)
}
