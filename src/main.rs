//! shiftcal main entrypoint.

use shiftcal::run;
use shiftcal::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
