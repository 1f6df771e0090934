// crates/calotrig-cli/src/cmd/config.rs

use calotrig_core::config::defaults::default_config;
use calotrig_core::config::format::config_id_hex;
use calotrig_core::config::params::{AlgoMode, ClusterShape, StitchPredicate};
use calotrig_core::ClusterConfig;
use clap::{Args, Subcommand, ValueEnum};

use crate::io::config_file;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub cmd: ConfigCmd,
}

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Write a config file (.ctc); unspecified knobs take the defaults
    Init(InitArgs),
    /// Print a config file and its id
    Show(ShowArgs),
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ModeArg {
    Cluster,
    Passthrough,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ShapeArg {
    /// 3 eta strips x 5 phi around the peak
    Strips,
    /// 3x3 crystals around the peak
    Square,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum PredicateArg {
    /// Edge bins plus equal orthogonal peak
    Orthogonal,
    /// Edge bins only
    Boundary,
}

#[derive(Args)]
pub struct InitArgs {
    #[arg(long)]
    pub out: String,

    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    #[arg(long, value_enum)]
    pub shape: Option<ShapeArg>,

    #[arg(long, value_enum)]
    pub predicate: Option<PredicateArg>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Config path (.ctc)
    #[arg(long)]
    pub r#in: String,
}

pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.cmd {
        ConfigCmd::Init(a) => cmd_init(a),
        ConfigCmd::Show(a) => cmd_show(a),
    }
}

fn cmd_init(a: InitArgs) -> anyhow::Result<()> {
    let mut c = default_config();
    if let Some(m) = a.mode {
        c.mode = match m {
            ModeArg::Cluster => AlgoMode::Cluster,
            ModeArg::Passthrough => AlgoMode::Passthrough,
        };
    }
    if let Some(s) = a.shape {
        c.shape = match s {
            ShapeArg::Strips => ClusterShape::EtaStrips3x5,
            ShapeArg::Square => ClusterShape::Square3x3,
        };
    }
    if let Some(p) = a.predicate {
        c.predicate = match p {
            PredicateArg::Orthogonal => StitchPredicate::OrthogonalMatch,
            PredicateArg::Boundary => StitchPredicate::BoundaryOnly,
        };
    }

    config_file::save_ctc(&a.out, &c)?;
    eprintln!("wrote config = {}", a.out);
    print_config(&c);
    Ok(())
}

fn cmd_show(a: ShowArgs) -> anyhow::Result<()> {
    let c = config_file::load_ctc(&a.r#in)?;
    println!("config_path = {}", a.r#in);
    print_config(&c);
    Ok(())
}

fn print_config(c: &ClusterConfig) {
    println!("config_id   = {}", config_id_hex(c));
    println!("version     = {}", c.version);
    println!("mode        = {:?}", c.mode);
    println!("shape       = {:?}", c.shape);
    println!("predicate   = {:?}", c.predicate);
}
