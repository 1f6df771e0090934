// crates/calotrig-cli/src/cmd/inspect.rs

use calotrig_core::frame::unpack_frame;
use calotrig_core::geometry::input_link_index;
use calotrig_core::link::input::link_crc_slot;
use calotrig_core::link::output::{output_links_from_words, unpack_output_links};
use calotrig_core::object::crystal::{tile_energies, tile_spikes};
use clap::{Args, ValueEnum};

use crate::io::capture_file;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DecodeAs {
    /// Crystal tiles (per-tower energy sums)
    Input,
    /// Stitched tower records
    Output,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Capture path (.ctf, raw or zstd)
    #[arg(long)]
    pub r#in: String,

    /// Decode this frame to stdout
    #[arg(long)]
    pub frame: Option<usize>,

    /// How to decode --frame; inferred from the capture shape when omitted
    #[arg(long, value_enum)]
    pub decode: Option<DecodeAs>,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let cap = capture_file::load_capture(&args.r#in)?;

    let shape = if cap.is_input_shaped() {
        "input"
    } else if cap.is_output_shaped() {
        "output"
    } else {
        "other"
    };

    eprintln!("--- inspect ---");
    eprintln!("file           = {}", args.r#in);
    eprintln!("ctf_ok         = true (magic + crc32 verified)");
    eprintln!("shape          = {}", shape);
    eprintln!("n_links        = {}", cap.n_links());
    eprintln!("words_per_link = {}", cap.words_per_link());
    eprintln!("frames         = {}", cap.frames());

    let Some(frame) = args.frame else {
        return Ok(());
    };

    let decode = match (args.decode, shape) {
        (Some(d), _) => d,
        (None, "input") => DecodeAs::Input,
        (None, "output") => DecodeAs::Output,
        (None, _) => anyhow::bail!("cannot infer --decode for a {shape} capture"),
    };

    let links = cap.frame_links(frame)?;
    match decode {
        DecodeAs::Input => print_input(frame, &links),
        DecodeAs::Output => print_output(frame, &links),
    }
}

fn print_input(frame: usize, links: &[Vec<u64>]) -> anyhow::Result<()> {
    let crystals = unpack_frame(links)?;
    for (phi, row) in crystals.iter().enumerate() {
        for (eta, tile) in row.iter().enumerate() {
            let total: u32 = tile_energies(tile).iter().flatten().map(|&e| e as u32).sum();
            if total == 0 {
                continue;
            }
            let link = input_link_index(eta, phi);
            println!(
                "frame={} phi={} eta={} link={} energy_sum={} spikes={} crc_slot=0x{:04x}",
                frame,
                phi,
                eta,
                link,
                total,
                tile_spikes(tile),
                link_crc_slot(&links[link])
            );
        }
    }
    Ok(())
}

fn print_output(frame: usize, links: &[Vec<u64>]) -> anyhow::Result<()> {
    let out = output_links_from_words(links)?;
    let grid = unpack_output_links(&out);
    for (phi, row) in grid.iter().enumerate() {
        for (eta, t) in row.iter().enumerate() {
            if t.cluster_et == 0 && t.tower_et == 0 {
                continue;
            }
            println!("frame={} phi={} eta={} {}", frame, phi, eta, t);
        }
    }
    Ok(())
}
