use calotrig_core::error::CaloError;
use calotrig_core::geometry::{empty_grid, input_link_index, input_link_position};
use calotrig_core::link::input::{link_crc_slot, pack_input_link, unpack_input_link, CRC_SLOT_SHIFT};
use calotrig_core::link::output::{
    output_links_from_words, output_word_position, pack_output_links, unpack_output_links,
};
use calotrig_core::synth::Lcg;
use calotrig_core::{Crystal, CrystalTile, Tower};

fn blank_tile() -> CrystalTile {
    [[Crystal::ZERO; 5]; 5]
}

fn random_tile(rng: &mut Lcg) -> CrystalTile {
    let mut tile = blank_tile();
    for row in tile.iter_mut() {
        for c in row.iter_mut() {
            *c = Crystal::from_word(rng.below(1 << 14) as u16);
        }
    }
    tile
}

#[test]
fn crystal_word_fields() {
    let c = Crystal::from_word(0x3FFF);
    assert_eq!((c.energy, c.timing, c.spike), (1023, 7, true));
    assert_eq!(c.to_word(), 0x3FFF);

    let c = Crystal::from_word((5 << 10) | 321);
    assert_eq!((c.energy, c.timing, c.spike), (321, 5, false));

    // bits above 13 are not part of the crystal
    assert_eq!(Crystal::from_word(0xC000), Crystal::ZERO);
}

#[test]
fn first_spanning_crystal_splits_across_words_0_and_1() {
    let mut tile = blank_tile();
    tile[0][4] = Crystal::from_word(0x3FFF);
    let words = pack_input_link(&tile);

    assert_eq!(words[0], 0xFFu64 << 56);
    assert_eq!(words[1], 0x3F);
    assert_eq!(unpack_input_link(&words), tile);
}

#[test]
fn second_spanning_crystal_splits_across_words_2_and_3() {
    let mut tile = blank_tile();
    tile[2][3] = Crystal::from_word(0x2ABC);
    let words = pack_input_link(&tile);

    assert_eq!(words[2], 0xBCu64 << 56);
    assert_eq!(words[3], 0x2A);
    assert_eq!(unpack_input_link(&words), tile);
}

#[test]
fn last_crystal_sits_below_crc_slot() {
    let mut tile = blank_tile();
    tile[4][4] = Crystal::from_word(0x1234);
    let words = pack_input_link(&tile);

    assert_eq!(words[5], 0x1234u64 << 20);
    assert_eq!(link_crc_slot(&words), 0);
}

#[test]
fn word_offsets_of_unsplit_crystals() {
    let mut tile = blank_tile();
    tile[0][1] = Crystal::from_word(1);
    tile[1][0] = Crystal::from_word(2);
    tile[1][4] = Crystal::from_word(3);
    tile[3][0] = Crystal::from_word(4);
    tile[4][1] = Crystal::from_word(5);
    let words = pack_input_link(&tile);

    assert_eq!(words[0], 1 << 14);
    assert_eq!(words[1], 2 << 6);
    assert_eq!(words[2], 3);
    assert_eq!(words[3], 4 << 20);
    assert_eq!(words[4], 5 << 42);
    assert_eq!(words[5], 0);
}

#[test]
fn crc_slot_is_carried_but_ignored() {
    let mut rng = Lcg(0xC0FFEE);
    let tile = random_tile(&mut rng);
    let mut words = pack_input_link(&tile);
    words[5] |= 0xBEEFu64 << CRC_SLOT_SHIFT;

    assert_eq!(link_crc_slot(&words), 0xBEEF);
    assert_eq!(unpack_input_link(&words), tile);
}

#[test]
fn short_link_leaves_missing_crystals_zero() {
    let mut rng = Lcg(99);
    let tile = random_tile(&mut rng);
    let words = pack_input_link(&tile);

    let got = unpack_input_link(&words[..2]);
    assert_eq!(got[0], tile[0]);
    assert_eq!(&got[1][..4], &tile[1][..4]);
    assert_eq!(got[1][4], Crystal::ZERO);
    for row in &got[2..] {
        assert!(row.iter().all(|c| *c == Crystal::ZERO));
    }

    assert_eq!(unpack_input_link(&[]), blank_tile());
    assert_eq!(link_crc_slot(&words[..3]), 0);
}

#[test]
fn random_tiles_survive_the_link() {
    let mut rng = Lcg(1);
    for _ in 0..500 {
        let tile = random_tile(&mut rng);
        assert_eq!(unpack_input_link(&pack_input_link(&tile)), tile);
    }
}

#[test]
fn input_link_geometry() {
    assert_eq!(input_link_position(0), (0, 0));
    assert_eq!(input_link_position(1), (0, 1));
    assert_eq!(input_link_position(9), (4, 1));
    assert_eq!(input_link_position(31), (15, 1));
    for l in 0..32 {
        let (ieta, iphi) = input_link_position(l);
        assert_eq!(input_link_index(ieta, iphi), l);
    }
}

#[test]
fn tower_word_layout() {
    let t = Tower {
        cluster_et: 800,
        tower_et: 500,
        peak_phi: 2,
        peak_eta: 4,
        peak_time: 0,
        hoe: 0,
    };
    assert_eq!(t.pack(), 36_164_384);
    assert_eq!(Tower::unpack(t.pack()), t);

    let full = Tower {
        cluster_et: 1023,
        tower_et: 1023,
        peak_phi: 7,
        peak_eta: 7,
        peak_time: 7,
        hoe: 7,
    };
    assert_eq!(full.pack(), u32::MAX);
}

#[test]
fn output_word_positions() {
    assert_eq!(output_word_position(0, 0), (0, 0));
    assert_eq!(output_word_position(0, 4), (0, 8));
    assert_eq!(output_word_position(1, 0), (0, 10));
    assert_eq!(output_word_position(1, 2), (0, 14));
    assert_eq!(output_word_position(2, 1), (1, 2));
    assert_eq!(output_word_position(3, 2), (1, 14));
}

#[test]
fn output_links_carry_every_tower_once() {
    let mut rng = Lcg(2024);
    let mut grid = empty_grid();
    for row in grid.iter_mut() {
        for t in row.iter_mut() {
            *t = Tower {
                cluster_et: rng.below(1024) as u16,
                tower_et: rng.below(1024) as u16,
                peak_phi: rng.below(5) as u8,
                peak_eta: rng.below(5) as u8,
                peak_time: 0,
                hoe: 0,
            };
        }
    }

    let links = pack_output_links(&grid);

    assert_eq!(links[0][0], ((grid[0][1].pack() as u64) << 32) | grid[0][0].pack() as u64);
    assert_eq!(links[3][2], ((grid[1][15].pack() as u64) << 32) | grid[1][14].pack() as u64);
    // odd links run out of towers after eta 15
    for link in [1, 3] {
        assert_eq!(links[link][3], 0);
        assert_eq!(links[link][4], 0);
    }
    for link in links.iter() {
        assert_eq!(link[5], 0);
    }

    assert_eq!(unpack_output_links(&links), grid);
}

#[test]
fn captured_output_words_are_shape_checked() {
    let links: Vec<Vec<u64>> = (0..4u64).map(|l| (0..6u64).map(|w| l * 10 + w).collect()).collect();
    let out = output_links_from_words(&links).expect("shape");
    assert_eq!(out[3], [30, 31, 32, 33, 34, 35]);

    assert!(matches!(
        output_links_from_words(&links[..3]),
        Err(CaloError::LinkFormat(_))
    ));

    let mut short = links.clone();
    short[1].pop();
    assert!(matches!(output_links_from_words(&short), Err(CaloError::LinkFormat(_))));
}
