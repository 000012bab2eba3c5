use clap::Parser;
use fit_tracker::commands;
use fit_tracker::config::Cli;
use fit_tracker::images::ImageCatalog;
use fit_tracker::loader::load_grid;
use fit_tracker::Schedule;
use std::io;

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_default_env()
        .init();

    let grid = match load_grid(&cli.workbook, cli.sheet.as_deref()) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    let schedule = Schedule::decode_with(&grid, cli.decode_options());

    if cli.json {
        match serde_json::to_string_pretty(&schedule) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        }
        return;
    }

    let images = match &cli.images {
        Some(path) => match ImageCatalog::from_file(path) {
            Ok(images) => images,
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        },
        None => ImageCatalog::builtin(),
    };

    let stdin = io::stdin();
    if let Err(err) = commands::run(&schedule, &images, stdin.lock(), io::stdout()) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
