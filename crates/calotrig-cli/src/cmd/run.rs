// crates/calotrig-cli/src/cmd/run.rs

use calotrig_core::capture::Capture;
use calotrig_core::config::format::config_id_hex;
use calotrig_core::config::params::AlgoMode;
use calotrig_core::frame::process_batch;
use calotrig_core::ClusterConfig;
use clap::Args;

use crate::io::{capture_file, config_file, jsonl};

use std::time::Instant;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Input capture (.ctf, 32 links x 6 words)
    #[arg(long)]
    pub r#in: String,

    /// Output capture (.ctf, 4 links x 6 words)
    #[arg(long)]
    pub out: String,

    /// Config path (.ctc). If omitted, uses the default config.
    #[arg(long)]
    pub config: Option<String>,

    /// Force passthrough mode regardless of the config
    #[arg(long)]
    pub passthrough: bool,

    /// Also dump stitched towers as JSONL
    #[arg(long)]
    pub towers: Option<String>,

    /// zstd level for the output capture (0 = raw container)
    #[arg(long, default_value_t = 0)]
    pub zstd_level: i32,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let mut config = match args.config.as_deref() {
        Some(p) => config_file::load_ctc(p)?,
        None => ClusterConfig::default(),
    };
    if args.passthrough {
        config.mode = AlgoMode::Passthrough;
    }

    let input = capture_file::load_capture(&args.r#in)?;
    if !input.is_input_shaped() {
        anyhow::bail!(
            "{} is not an input capture ({} links x {} words)",
            args.r#in,
            input.n_links(),
            input.words_per_link()
        );
    }

    let t0 = Instant::now();
    let (results, counters) = process_batch(&config, &input.all_frames())?;
    let elapsed = t0.elapsed();

    let mut output = Capture::output();
    let mut dump = String::new();
    for (i, r) in results.iter().enumerate() {
        output.push_output(&r.links)?;
        if let Some(grid) = r.towers.as_ref() {
            jsonl::push_towers(&mut dump, i, grid);
        }
    }

    let written = capture_file::save_capture(&args.out, &output, args.zstd_level)?;
    if let Some(p) = args.towers.as_deref() {
        jsonl::write_file(p, &dump)?;
    }

    tracing::info!(frames = counters.frames, "run complete");

    eprintln!("--- run ---");
    eprintln!("in                 = {}", args.r#in);
    eprintln!("out                = {} ({} bytes)", args.out, written);
    eprintln!("config_id          = {}", config_id_hex(&config));
    eprintln!("mode               = {:?}", config.mode);
    eprintln!("shape              = {:?}", config.shape);
    eprintln!("predicate          = {:?}", config.predicate);
    eprintln!("frames             = {}", counters.frames);
    eprintln!("passthrough_frames = {}", counters.passthrough_frames);
    eprintln!("spike_crystals     = {}", counters.spike_crystals);
    eprintln!("saturated_towers   = {}", counters.saturated_towers);
    eprintln!("saturated_clusters = {}", counters.saturated_clusters);
    eprintln!("eta_merges_phase1  = {}", counters.eta_merges_phase1);
    eprintln!("eta_merges_phase2  = {}", counters.eta_merges_phase2);
    eprintln!("phi_merges         = {}", counters.phi_merges);
    eprintln!("elapsed            = {:.3?}", elapsed);
    Ok(())
}
