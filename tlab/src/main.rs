use std::{io, path::PathBuf};

use tlab::{
    app::{App, AppError},
    logging,
    settings::{Settings, DEFAULT_SETTINGS},
};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "tlab")]
struct Args {
    #[clap(short, long, help = "Maze size, asked for interactively when missing")]
    size: Option<i64>,
    #[clap(long, help = "Seed for reproducible mazes")]
    seed: Option<u64>,
    #[clap(short, long, help = Settings::config_help())]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Colorize the output")]
    color: bool,
    #[clap(long, action, help = "Print the default settings and quit")]
    default_config: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, can be repeated")]
    verbose: u8,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.default_config {
        print!("{}", DEFAULT_SETTINGS);
        return Ok(());
    }

    better_panic::install();
    logging::init(args.verbose)?;

    let settings = match args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    log::debug!("Settings: {:?}", settings);

    let app = App::new(settings)
        .size(args.size)
        .seed(args.seed)
        .color(args.color);

    app.run(&mut io::stdin().lock(), &mut io::stdout().lock())?;

    Ok(())
}
