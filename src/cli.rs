use clap::Parser;
use std::path::PathBuf;

/// dynaform - serves schema-driven HTML forms
#[derive(Parser, Debug, Clone)]
#[command(name = "dynaform", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file; form files are read from `config/forms` next to it
    #[arg(short, long, env = "DYNAFORM_CONFIG", default_value = "dynaform.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "DYNAFORM_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "DYNAFORM_PORT")]
    pub port: Option<u16>,
}
