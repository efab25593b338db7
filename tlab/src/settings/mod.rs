use std::{fmt::Display, fs, path::PathBuf};

use clab::{algorithms::Params, render::Glyphs, Cell};
use crossterm::style::{Color, ContentStyle};
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::base_path;

pub const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub wall: Color,
    pub path: Color,
    pub solution: Color,
    pub entrance: Color,
    pub exit: Color,
}

impl ColorScheme {
    pub fn color(&self, cell: Cell) -> Color {
        match cell {
            Cell::Wall => self.wall,
            Cell::Path => self.path,
            Cell::Solution => self.solution,
            Cell::Entrance => self.entrance,
            Cell::Exit => self.exit,
        }
    }

    pub fn style(&self, cell: Cell) -> ContentStyle {
        ContentStyle {
            foreground_color: Some(self.color(cell)),
            background_color: None,
            ..Default::default()
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            wall: Color::DarkGrey,
            path: Color::White,
            solution: Color::Green,
            entrance: Color::Yellow,
            exit: Color::Red,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub glyphs: Option<Glyphs>,
    #[serde(default)]
    pub color: Option<bool>,
    #[serde(default)]
    pub color_scheme: Option<ColorScheme>,
    #[serde(default)]
    pub generator_params: Option<Params>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_glyphs(mut self, value: Glyphs) -> Self {
        self.glyphs = Some(value);
        self
    }

    pub fn get_glyphs(&self) -> Glyphs {
        self.glyphs.unwrap_or_default()
    }

    pub fn set_color(mut self, value: bool) -> Self {
        self.color = Some(value);
        self
    }

    pub fn get_color(&self) -> bool {
        self.color.unwrap_or_default()
    }

    pub fn get_color_scheme(&self) -> ColorScheme {
        self.color_scheme.unwrap_or_default()
    }

    pub fn set_generator_params(mut self, value: Params) -> Self {
        self.generator_params = Some(value);
        self
    }

    pub fn get_generator_params(&self) -> Params {
        self.generator_params.clone().unwrap_or_default()
    }

    /// Conventional location of the settings file, it's only read when passed explicitly.
    pub fn default_path() -> Option<PathBuf> {
        base_path().map(|base| base.join("settings.ron"))
    }

    /// Help text for the `--config` flag, naming the conventional location when there is one.
    pub fn config_help() -> String {
        match Self::default_path() {
            Some(path) => format!(
                "Load settings from this RON file (conventionally {})",
                path.display()
            ),
            None => "Load settings from this RON file".to_string(),
        }
    }

    pub fn parse(source: &str) -> Result<Self, LoadError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(source)?)
    }

    pub fn load(path: PathBuf) -> Result<Self, LoadError> {
        log::debug!("Loading settings from {:?}", path);

        let source = fs::read_to_string(&path)?;
        Self::parse(&source)
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    Io(#[from] std::io::Error),
    Ron(#[from] ron::error::SpannedError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "IO error: {}", e),
            LoadError::Ron(e) => write!(f, "RON parse error: {}", e),
        }
    }
}
