//! Greedy Chess UCI engine

use greedy_chess::uci::UCI;

fn main() -> std::io::Result<()> {
    let mut uci = UCI::new();
    uci.run()
}
