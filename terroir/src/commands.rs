use clap::{ArgAction, arg, command};
use terroir_core::store::DEFAULT_STORE_FILE;
use terroir_scanner::DEFAULT_TRANSLATE_ENDPOINT;
use terroir_scanner::profile::DEFAULT_BLOCK_CLASS;
use url::Url;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

fn store_arg() -> clap::Arg {
    arg!(-o --"output" <PATH>)
        .required(false)
        .help("Profile store file (CSV). A leading ~ is expanded")
        .default_value(DEFAULT_STORE_FILE)
}

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("terroir")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("terroir")
        .about("Harvests winemaker profiles from a winery sitemap and translates them")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-q --"quiet" "Suppress banner and per-profile progress output")
                .required(false)
                .global(true),
        )
        .arg(
            arg!(-v --"verbose" "Log every request to stderr")
                .required(false)
                .global(true),
        )
        .subcommand_required(false)
        .subcommand(
            command!("harvest")
                .about(
                    "Fetch every profile listed in the sitemap that is not yet in the store, \
                translate it and add it to the store. This is the default.",
                )
                .arg(
                    arg!(-s --"sitemap" <URL>)
                        .required(false)
                        .help("Sitemap to read profile pages from")
                        .value_parser(clap::value_parser!(Url))
                        .default_value(terroir_core::harvest::DEFAULT_SITEMAP_URL),
                )
                .arg(store_arg())
                .arg(
                    arg!(-x --"exclude" <URL>)
                        .required(false)
                        .help("Skip sitemap locations containing this string (repeatable)")
                        .action(ArgAction::Append),
                )
                .arg(
                    arg!(--"no-default-excludes")
                        .required(false)
                        .help("Do not apply the built-in list of non-profile pages")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    arg!(--"source" <LANG>)
                        .required(false)
                        .help("Language of the profile pages")
                        .default_value(terroir_core::harvest::DEFAULT_SOURCE_LANGUAGE),
                )
                .arg(
                    arg!(--"target" <LANG>)
                        .required(false)
                        .help("Language to translate into")
                        .default_value(terroir_core::harvest::DEFAULT_TARGET_LANGUAGE),
                )
                .arg(
                    arg!(--"translate-endpoint" <URL>)
                        .required(false)
                        .help("Base URL of the translation service")
                        .value_parser(clap::value_parser!(Url))
                        .default_value(DEFAULT_TRANSLATE_ENDPOINT),
                )
                .arg(
                    arg!(--"block-class" <CLASS>)
                        .required(false)
                        .help("CSS class of the page blocks holding profile text")
                        .default_value(DEFAULT_BLOCK_CLASS),
                )
                .arg(
                    arg!(--"dry-run")
                        .required(false)
                        .help("List the profiles that would be harvested without fetching them")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            command!("report")
                .about("Summarise the profiles already in the store")
                .arg(store_arg()),
        )
}
