use crate::CLAP_STYLING;
use clap::arg;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("blankcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("blankcheck")
        .styles(CLAP_STYLING)
        .about(
            "Audits pages for target=\"_blank\" anchors missing the rel=\"noopener \
            noreferrer\" tabnabbing mitigations.",
        )
        .arg(
            arg!(<TARGET>)
                .help("URL to audit, or path to a .txt file with one URL per line"),
        )
        .arg(
            arg!(-o --"output" <FILENAME>)
                .required(false)
                .help("Save the report to this file (default: terminal only)"),
        )
        .arg(
            arg!(-d --"directory" <DIR>)
                .required(false)
                .help("Directory in which the output file is created, made recursively if missing")
                .default_value("."),
        )
        .arg(
            arg!(-f --"format" <FORMAT>)
                .required(false)
                .help("Report file format: text, json")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            arg!(-t --"timeout" <SECONDS>)
                .required(false)
                .help("Per-page navigation timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("15"),
        )
        .arg(
            arg!(--"no-color" "Disable ANSI color in terminal output").required(false),
        )
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
}
