fn main() {
    if let Err(err) = calorie_tracker_lib::run() {
        log::error!("{err:#}");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
