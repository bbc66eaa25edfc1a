use std::{env::args, process::exit};

use lifecell::{app, Config, Error};
use log::error;

pub fn main() {
    env_logger::init();

    let result = Config::from_args(args().skip(1))
        .map_err(Error::from)
        .and_then(|config| app::run(&config));

    match result {
        Ok(rendered) => print!("{rendered}"),
        Err(err) => {
            error!("{err}");
            exit(1);
        }
    }
}
