use auction_runner::{Arena, ArenaConfig};

fn print_help() {
    eprintln!(
        r#"Auction Arena - round-robin sealed-bid auction tournament

USAGE:
    auction-arena [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --single <A> <B>    Run one verbose auction between line-up entries A and B
                        (letters as in the results legend, e.g. `--single e f`)
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Full tournament with the default line-up
    auction-arena

    # Tournament from a config file
    auction-arena --config arena.json

    # Watch the high constant bidder against the adaptive bidder
    auction-arena --single e f
"#
    );
}

/// Line-up index from a legend letter or a plain number
fn parse_index(arg: &str) -> Option<usize> {
    match arg.as_bytes() {
        [letter @ b'a'..=b'z'] => Some((letter - b'a') as usize),
        _ => arg.parse().ok(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut single: Option<(usize, usize)> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            "--single" | "-s" => {
                if i + 2 >= args.len() {
                    eprintln!("Error: --single requires two bidders");
                    std::process::exit(1);
                }
                match (parse_index(&args[i + 1]), parse_index(&args[i + 2])) {
                    (Some(a), Some(b)) => single = Some((a, b)),
                    _ => {
                        eprintln!(
                            "Error: invalid bidders '{}' '{}'",
                            args[i + 1],
                            args[i + 2]
                        );
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            ArenaConfig::from_file(&path)?
        }
        None => ArenaConfig::default(),
    };

    let arena = Arena::new(config)?;

    if let Some((a, b)) = single {
        arena.run_single(a, b)?;
        return Ok(());
    }

    let matrix = arena.run()?;
    println!();
    print!("{}", matrix);
    Ok(())
}
