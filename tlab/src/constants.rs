use std::path::PathBuf;

use dirs::preference_dir;

pub const PROMPT: &str = "Enter the maze size (odd, >= 5): ";
pub const SEPARATOR: &str = "============================";
pub const NO_SOLUTION: &str = "No solution.";

pub fn base_path() -> Option<PathBuf> {
    preference_dir().map(|dir| dir.join("tlab"))
}
