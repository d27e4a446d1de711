use clap::Parser;

fn main() {
    let cli = taiji_multinet::cli::Cli::parse();
    taiji_multinet::logging::init(cli.verbose);

    if let Err(err) = taiji_multinet::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}
