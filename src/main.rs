use pass_variants::core::cli;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if let Err(e) = cli::run(&args) {
        if e.is_usage() {
            eprintln!("{}", e);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
