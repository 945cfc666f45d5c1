//! Self-play simulator: the strategy fires at its own spaced layouts on
//! the standard fleet and reports shots-to-clear statistics.

use anyhow::{bail, Context};
use broadside::{standard_roster, Board, Cell, Strategy, BOARD_SIZE};
use log::info;
use rand::{rngs::SmallRng, SeedableRng};

fn main() -> anyhow::Result<()> {
    broadside::init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;

    let bot = broadside::strategy("adjacency").context("strategy not registered")?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut total = 0usize;
    let mut best = usize::MAX;
    let mut worst = 0usize;
    for game in 0..games {
        let shots = play_one(bot.as_ref(), &mut rng)?;
        info!("game {game}: cleared in {shots} shots");
        total += shots;
        best = best.min(shots);
        worst = worst.max(shots);
    }
    if games > 0 {
        info!(
            "{games} games: avg {:.1} shots, best {best}, worst {worst}",
            total as f64 / games as f64
        );
    }
    Ok(())
}

/// One full game: lay out a fleet, then fire at the masked view until
/// every ship is sunk.
fn play_one(bot: &dyn Strategy, rng: &mut SmallRng) -> anyhow::Result<usize> {
    let full = standard_roster();
    let mut own = Board::new(BOARD_SIZE, BOARD_SIZE);
    let placements = bot.propose_layout(rng, &mut own, &full);

    let mut view = Board::new(BOARD_SIZE, BOARD_SIZE);
    let mut hits_per_ship = vec![0usize; full.len()];
    let mut shots = 0usize;

    loop {
        let afloat = view.afloat(&full);
        if afloat.is_empty() {
            break;
        }
        let (r, c) = bot.propose_shot(rng, &view, &afloat)?;
        shots += 1;
        match own.get(r, c) {
            Some(Cell::Ship(id)) => {
                view.set(r, c, Cell::Hit);
                hits_per_ship[id] += 1;
                let placement = placements
                    .iter()
                    .find(|p| p.ship_id == id)
                    .context("hit a ship with no recorded placement")?;
                if hits_per_ship[id] == placement.length {
                    for (sr, sc) in placement.cells() {
                        view.set(sr, sc, Cell::Sunk(id));
                    }
                }
            }
            Some(Cell::Empty) => {
                view.set(r, c, Cell::Miss);
            }
            other => bail!("shot at ({r}, {c}) landed on unexpected cell {other:?}"),
        }
    }

    let (hits, misses) = view.shot_census();
    info!("  census: {hits} hits, {misses} misses");
    Ok(shots)
}
