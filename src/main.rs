//! Interactive rock-paper-scissors.

use std::io;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rpsrs::cli::{Console, Menu};
use rpsrs::{Session, StatsStore};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let seed: u64 = ChaCha8Rng::from_os_rng().random();

    let store = StatsStore::from_env();
    log::debug!("data directory: {}", store.dir().display());
    let session = Session::open(store, seed);

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    Menu::new(session, console).run()
}
