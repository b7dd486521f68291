use mason::{
    cli::{get_log_level_from_verbose, parse_cli, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    match cli.command {
        Commands::Create(args) => {
            env_logger::Builder::new()
                .filter_level(get_log_level_from_verbose(args.verbose))
                .init();
            if let Err(err) = mason::cli::run(args) {
                default_error_handler(err);
            }
        }
    }
}
