pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ArgAction, ColorChoice, Command,
};

pub const ARG_MANIFEST: &str = "manifest";
pub const ARG_ROUTE: &str = "route";
pub const ARG_ROLE: &str = "role";
pub const ARG_APPROVED: &str = "approved";
pub const ARG_LOADING: &str = "loading";

pub const CMD_CHECK: &str = "check";
pub const CMD_ROUTES: &str = "routes";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("gardi")
        .about("Role-based route access guard engine")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_MANIFEST)
                .short('m')
                .long("manifest")
                .help("Route manifest file (JSON); defaults to the built-in route table")
                .env("GARDI_MANIFEST")
                .global(true)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .subcommand(check())
        .subcommand(routes());

    logging::with_args(command)
}

fn check() -> Command {
    Command::new(CMD_CHECK)
        .about("Evaluate the access decision for one route and identity")
        .arg(
            Arg::new(ARG_ROUTE)
                .short('r')
                .long("route")
                .help("Route path to evaluate")
                .env("GARDI_ROUTE")
                .required(true),
        )
        .arg(
            Arg::new(ARG_ROLE)
                .long("role")
                .help("Primary role of the signed-in user; omit for an anonymous visitor")
                .env("GARDI_ROLE"),
        )
        .arg(
            Arg::new(ARG_APPROVED)
                .short('a')
                .long("approved")
                .help("Additionally approved role (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(ARG_LOADING)
                .long("loading")
                .help("Evaluate with the session still resolving")
                .action(ArgAction::SetTrue),
        )
}

fn routes() -> Command {
    Command::new(CMD_ROUTES).about("Print the declared route table with effective policies")
}
