use std::path::PathBuf;

use scoresheet_model::ScoreSheet;

#[derive(Debug)]
pub struct BuildResult {
    pub sheet: ScoreSheet,
    pub output: Option<PathBuf>,
}
