// crates/calotrig-cli/src/cmd/gen.rs

use calotrig_core::capture::Capture;
use calotrig_core::frame::pack_frame;
use calotrig_core::synth::{synth_frame, Lcg};
use clap::Args;

use crate::io::capture_file;

#[derive(Args, Debug)]
pub struct GenArgs {
    /// Output capture path (.ctf)
    #[arg(long)]
    pub out: String,

    /// Frames (bunch crossings) to generate
    #[arg(long, default_value_t = 16)]
    pub frames: usize,

    /// LCG seed; same seed, same capture
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Showers per frame
    #[arg(long, default_value_t = 8)]
    pub deposits: usize,

    /// zstd level for the written file (0 = raw container)
    #[arg(long, default_value_t = 0)]
    pub zstd_level: i32,
}

pub fn run(args: GenArgs) -> anyhow::Result<()> {
    if args.frames == 0 {
        anyhow::bail!("--frames must be > 0");
    }

    let mut rng = Lcg(args.seed);
    let mut cap = Capture::input();
    for _ in 0..args.frames {
        let frame = synth_frame(&mut rng, args.deposits);
        cap.push_frame(&pack_frame(&frame))?;
    }

    let written = capture_file::save_capture(&args.out, &cap, args.zstd_level)?;

    eprintln!("--- gen ---");
    eprintln!("out            = {}", args.out);
    eprintln!("frames         = {}", cap.frames());
    eprintln!("links          = {} x {} words", cap.n_links(), cap.words_per_link());
    eprintln!("seed           = {}", args.seed);
    eprintln!("deposits/frame = {}", args.deposits);
    eprintln!("bytes          = {}", written);
    Ok(())
}
