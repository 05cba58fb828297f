use colored::Colorize;
use terroir::command_argument_builder;
use terroir::handlers::{
    handle_harvest, handle_report, harvest_config_from_args, init_logging,
    translate_endpoint_from_args,
};
use terroir_core::HarvestConfig;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    // Global flags may sit before or after the subcommand
    let flag = |name: &str| {
        chosen_command.get_flag(name)
            || chosen_command
                .subcommand()
                .is_some_and(|(_, sub)| sub.get_flag(name))
    };
    let quiet = flag("quiet");
    let verbose = flag("verbose");

    init_logging(verbose);

    let result = match chosen_command.subcommand() {
        Some(("harvest", primary_command)) => {
            handle_harvest(
                harvest_config_from_args(primary_command),
                translate_endpoint_from_args(primary_command),
                quiet,
            )
            .await
        }
        Some(("report", primary_command)) => handle_report(primary_command),
        // No subcommand: harvest with the built-in settings
        None => handle_harvest(HarvestConfig::default(), None, quiet).await,
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
