fn main() {
    if let Err(e) = kindscope_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
