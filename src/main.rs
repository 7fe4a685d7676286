use clap::{Arg, Command as ClapCommand, ArgAction};
use std::path::Path;
use std::process;
use std::sync::Arc;
use log::{error, LevelFilter};

use palettekit::api::PaletteKit;
use palettekit::config::AppConfig;
use palettekit::utils::logger::Logger;
use palettekit::commands::{CommandFactory, PalettekitCommandFactory};

fn main() {
    let matches = ClapCommand::new("palettekit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Report the most frequent colors of an image")
        .arg(
            Arg::new("input")
                .help("Input image files (png, jpg, jpeg, gif)")
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .help("Number of colors to report per image (default from config, 10)")
                .value_name("N")
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Report format (text, json)")
                .value_name("FORMAT")
                .default_value("text")
                .required(false),
        )
        .arg(
            Arg::new("export")
                .short('e')
                .long("export")
                .help("Write the palette as 'RGB: ..., HEX: ...' lines to FILE ('-' for stdout)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file (TOML)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("serve")
                .long("serve")
                .help("Run the web front end")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("bind")
                .long("bind")
                .help("Address for the web front end (overrides config)")
                .value_name("ADDR")
                .required(false),
        )
        .arg(
            Arg::new("contact")
                .long("contact")
                .help("Send a contact message instead of extracting colors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("first-name")
                .long("first-name")
                .help("Sender first name for --contact")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("last-name")
                .long("last-name")
                .help("Sender last name for --contact")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("email")
                .long("email")
                .help("Sender email address for --contact")
                .value_name("EMAIL")
                .required(false),
        )
        .arg(
            Arg::new("message")
                .long("message")
                .help("Message text for --contact")
                .value_name("TEXT")
                .required(false),
        )
        .get_matches();

    let config_path = matches.get_one::<String>("config").map(Path::new);
    let config = match AppConfig::load(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = Logger::init_global_logger(&config.global_log_file, level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let kit = match PaletteKit::new(config) {
        Ok(k) => Arc::new(k),
        Err(e) => {
            error!("Failed to initialize: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let factory = PalettekitCommandFactory::new();

    let command_result = factory.create_command(&matches, kit);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
