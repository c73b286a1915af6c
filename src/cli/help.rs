// file: src/cli/help.rs
// version: 1.0.0
// guid: 1aaf0e23-94e5-448f-aea5-8d34083e5a6d

//! Help rendering strategies.
//!
//! The renderer is chosen once at startup and only changes how `--help` looks.
//! Command handlers never see any of this.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ColorChoice, Command};
use std::ffi::OsString;

/// A named set of options shown under one help heading
#[derive(Debug, Clone, Copy)]
pub struct OptionGroup {
    pub name: &'static str,
    pub options: &'static [&'static str],
}

/// Option groups keyed by command path
pub const OPTION_GROUPS: &[(&str, &[OptionGroup])] = &[
    (
        "ubuntu-drivers",
        &[
            OptionGroup {
                name: "Standard output logging",
                options: &["--stdout-log-level"],
            },
            OptionGroup {
                name: "Logfile",
                options: &["--logfile", "--logfile-log-level"],
            },
        ],
    ),
    (
        "ubuntu-drivers install",
        &[
            OptionGroup {
                name: "Basic Usage",
                options: &["--recommended", "--sources", "--package-list"],
            },
            OptionGroup {
                name: "Graphics drivers",
                options: &["--gpgpu", "--include-dkms"],
            },
            OptionGroup {
                name: "OEM packages",
                options: &["--no-oem"],
            },
        ],
    ),
];

/// Strategy for presenting help output
pub trait HelpRenderer {
    fn name(&self) -> &'static str;

    /// Apply presentation settings to the command tree
    fn configure(&self, command: Command) -> Command;
}

/// Baseline clap help without colors or option groups
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHelp;

impl HelpRenderer for PlainHelp {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn configure(&self, command: Command) -> Command {
        command.styles(Styles::plain()).color(ColorChoice::Never)
    }
}

/// Styled help with options grouped under headings
#[derive(Debug, Clone, Copy, Default)]
pub struct RichHelp;

impl HelpRenderer for RichHelp {
    fn name(&self) -> &'static str {
        "rich"
    }

    fn configure(&self, command: Command) -> Command {
        let mut command = command.styles(rich_styles());
        for (path, groups) in OPTION_GROUPS {
            // The first path element is the program itself
            let subcommands: Vec<&str> = path.split_whitespace().skip(1).collect();
            command = group_options_at(command, &subcommands, groups);
        }
        command
    }
}

fn rich_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Cyan.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Yellow.on_default())
}

fn group_options_at(command: Command, path: &[&str], groups: &[OptionGroup]) -> Command {
    match path.split_first() {
        None => apply_groups(command, groups),
        Some((name, rest)) => {
            if command.find_subcommand(name).is_none() {
                return command;
            }
            command.mut_subcommand(name, |sub| group_options_at(sub, rest, groups))
        }
    }
}

fn apply_groups(mut command: Command, groups: &[OptionGroup]) -> Command {
    for group in groups {
        for option in group.options {
            let long = option.trim_start_matches("--");
            let id = command
                .get_arguments()
                .find(|arg| arg.get_long() == Some(long))
                .map(|arg| arg.get_id().clone());
            // Unknown names are skipped
            let Some(id) = id else { continue };
            command = command.mut_arg(id, |arg| arg.help_heading(group.name));

            // The other half of a --x/--no-x pair shares the heading
            let partner = paired_flags(long).into_iter().find_map(|name| {
                command
                    .get_arguments()
                    .find(|arg| arg.get_long() == Some(name.as_str()))
                    .filter(|arg| arg.get_help_heading().is_none())
                    .map(|arg| arg.get_id().clone())
            });
            if let Some(partner) = partner {
                command = command.mut_arg(partner, |arg| arg.help_heading(group.name));
            }
        }
    }
    command
}

/// Long names that may form an on/off pair with `long`
fn paired_flags(long: &str) -> Vec<String> {
    match long.strip_prefix("no-") {
        Some(base) => vec![base.to_string(), format!("include-{}", base)],
        None => {
            let base = long.strip_prefix("include-").unwrap_or(long);
            vec![format!("no-{}", base)]
        }
    }
}

/// Pick the help renderer for this process
pub fn select_renderer() -> Box<dyn HelpRenderer> {
    renderer_for(std::env::var_os("NO_COLOR"))
}

/// Pick a renderer given the value of `NO_COLOR`
pub fn renderer_for(no_color: Option<OsString>) -> Box<dyn HelpRenderer> {
    let colors_disabled = no_color.is_some_and(|value| !value.is_empty());
    if cfg!(feature = "rich-help") && !colors_disabled {
        Box::new(RichHelp)
    } else {
        Box::new(PlainHelp)
    }
}
