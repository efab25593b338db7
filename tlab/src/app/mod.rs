#[allow(clippy::module_inception)]
pub mod app;
pub mod input;

use std::io;

pub use app::{App, Outcome};

use clab::GridError;
use thiserror::Error;

use crate::settings::LoadError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Could not load settings: {0}")]
    Settings(#[from] LoadError),
    #[error("Could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("Could not create maze: {0}")]
    Grid(#[from] GridError),
}
