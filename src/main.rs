//! timetally main entrypoint.

use timetally::run;
use timetally::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
