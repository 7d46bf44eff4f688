//! rShiftGrid main entrypoint.

use rshiftgrid::run;
use rshiftgrid::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
