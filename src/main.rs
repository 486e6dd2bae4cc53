fn main() {
    if let Err(err) = ocrmatch::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
