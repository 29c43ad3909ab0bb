use clap::{ArgAction, Parser};
use tagkit_core::conf::N_TAGS_PER_PAGE_DEFAULT;
use tagkit_io_xlsx::conf::C_SHEET_NAME_BASE_DEFAULT;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tagkit",
    version,
    about = "TSV name-tag sheet generator",
    long_about = "Tagkit turns tab-separated spreadsheet exports into a print-ready workbook of name tags.\n\nExamples:\n  tagkit -i roster.tsv -o nametags.xlsx\n  tagkit --sample\n  tagkit            (reuses the last saved input)\n\nTip: The raw input is saved under ~/.tagkit so a bare `tagkit` reprints the last roster."
)]
pub struct CliArgs {
    #[arg(
        short = 'i',
        long = "in",
        visible_alias = "input",
        value_name = "FILE",
        conflicts_with = "sample",
        help_heading = "Input",
        help = "Read tab-separated input from a file."
    )]
    pub input: Option<std::path::PathBuf>,

    #[arg(
        long = "sample",
        help_heading = "Input",
        help = "Use the bundled sample roster instead of a file."
    )]
    pub sample: bool,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        default_value = "nametags.xlsx",
        help_heading = "Output",
        help = "Workbook file to write."
    )]
    pub out: std::path::PathBuf,

    #[arg(
        long = "ps",
        visible_alias = "page-size",
        value_name = "N",
        default_value_t = N_TAGS_PER_PAGE_DEFAULT as u16,
        value_parser = clap::value_parser!(u16).range(1..),
        help_heading = "Output",
        help = "Name tags per page (must be >= 1)."
    )]
    pub page_size: u16,

    #[arg(
        long = "sn",
        visible_alias = "sheet-name",
        value_name = "NAME",
        default_value = C_SHEET_NAME_BASE_DEFAULT,
        help_heading = "Output",
        help = "Base worksheet name; pages get _N suffixes."
    )]
    pub sheet_name: String,

    #[arg(
        long = "ns",
        visible_alias = "no-save",
        help_heading = "Persistence",
        help = "Do not persist this input as the last roster."
    )]
    pub no_save: bool,

    #[arg(
        long = "clear",
        help_heading = "Persistence",
        help = "Remove the saved roster and exit."
    )]
    pub clear: bool,

    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'n',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,
}
