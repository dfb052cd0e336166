use course_table::cli::run_cli;
use course_table::common::exception::CliError;

fn main() -> Result<(), CliError> {
    run_cli()
}
