//! Configs that are gathered from the command line -- see [CommandLineOptions]

use structopt::StructOpt;
use urt_server_log::protocol::Protocol;


/// Command-line options
#[derive(Debug,StructOpt)]
#[structopt(about = "
=====================================================================
Turns Urban Terror server log lines into a stream of Json events and
chat commands, as an administration bot would consume them.
By default, reads the log lines from the standard input.
=====================================================================
")]
pub struct CommandLineOptions {

    // FLAGS
    ////////

    /// Logs the lines that couldn't be handled -- and why -- to stderr
    #[structopt(long)]
    pub verbose: bool,

    /// Stops on any output error, instead of skipping the item that couldn't be shown
    #[structopt(long)]
    pub pedantic: bool,

    /// Keeps waiting for new lines at the end of the log file, as the game server appends them
    #[structopt(long)]
    pub follow: bool,


    // OPTIONS
    //////////

    /// Input file with Urban Terror server log lines
    #[structopt(long)]
    pub log_file: Option<String>,

    /// The protocol revision of the game server: `iourt41` or `iourt42`
    #[structopt(long, default_value = "iourt42")]
    pub protocol: Protocol,

}

pub fn parse_from_args() -> CommandLineOptions {
    fill_in_defaults(CommandLineOptions::from_args())
}

fn fill_in_defaults(command_line_options: CommandLineOptions) -> CommandLineOptions {
    // no defaults to fill in yet
    command_line_options
}
