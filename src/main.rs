fn main() {
    if let Err(err) = greeter::run() {
        // clap errors carry their own "error:" prefix
        let message = format!("{err:#}");
        eprintln!("{}", message.trim_end());
        std::process::exit(1);
    }
}
