use std::{env, path::PathBuf};

use getopts::Options;
use tracing::warn;

use crate::config::CONFIG_FILE;

#[derive(Clone, Debug, Default)]
pub struct Args {
    pub cfg_file: PathBuf,
}

pub fn print_usage(program: &str, opts: Options) {
    let brief = format!("Usage: {} [options] [config_file]", program);
    print!("{}", opts.usage(&brief));
}

pub fn get_args() -> Args {
    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();
    let opts = Options::new();

    let default_args = Args { cfg_file: PathBuf::from(CONFIG_FILE) };
    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            warn!("Error parsing arguments: {}", f);
            warn!("Proceeding with defaults.");
            print_usage(&program, opts);
            return default_args;
        }
    };

    let Some(config_file_path) = matches.free.first() else {
        return default_args;
    };
    let path = PathBuf::from(config_file_path);

    // Proceed with defaults rather than dying on a missing file
    if !path.exists() {
        warn!("Config file '{}' does not exist. Proceeding with defaults.", config_file_path);
        return default_args;
    }

    Args { cfg_file: path }
}
