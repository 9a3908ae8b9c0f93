use clap::Parser;
use sector_mapper::app::MapperCli;

fn main() {
    env_logger::init();
    let args = MapperCli::parse();
    if let Err(e) = args.run() {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
