//! ccub main entrypoint.

use ccub::{init_tracing, run, ui::messages};

fn main() {
    init_tracing();
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
