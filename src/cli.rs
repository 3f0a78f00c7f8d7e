use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "auto-assign", about = "Auto-assign reviewers and assignees")]
/// Options for the CLI
pub struct Opt {
    #[structopt(
        long,
        default_value(".github/auto_assign.yml"),
        help = "repository path of the configuration file"
    )]
    pub config: String,
    #[structopt(
        long,
        parse(from_os_str),
        help = "path to the pull_request event payload, defaults to $GITHUB_EVENT_PATH"
    )]
    pub event: Option<PathBuf>,
}
