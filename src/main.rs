use htmltoc::cli;

fn main() {
    // Run the CLI
    std::process::exit(cli::run());
}
