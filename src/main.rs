use std::path::PathBuf;

use steep::app::{error, logger, FiletreeConfig, Program};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    error::install_hooks()?;
    logger::init()?;

    let config = parse_args(std::env::args().skip(1))?;
    Program::new(config)?.run()?;
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> error::Result<FiletreeConfig> {
    let mut config = FiletreeConfig::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--hidden" => config.show_hidden = true,
            "--no-icons" => config.show_icons = false,
            "--selection-path" => {
                let value = args
                    .next()
                    .ok_or_else(|| eyre::eyre!("--selection-path requires a file path"))?;
                config.selection_path = Some(PathBuf::from(value));
            }
            "--editor" => {
                let value = args
                    .next()
                    .ok_or_else(|| eyre::eyre!("--editor requires a command"))?;
                config.editor = Some(value);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if other.starts_with('-') => {
                return Err(eyre::eyre!("unknown flag: {other}"));
            }
            directory => config.start_dir = directory.to_string(),
        }
    }

    Ok(config)
}

fn print_usage() {
    println!("usage: steep [directory] [flags]");
    println!();
    println!("  --hidden                show hidden entries");
    println!("  --no-icons              plain names, no icons");
    println!("  --selection-path FILE   write the picked file path to FILE and exit");
    println!("  --editor CMD            editor command (default: $EDITOR, then vim)");
}
