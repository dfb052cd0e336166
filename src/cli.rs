use crate::catalog::course::Course;
use crate::common::config::{TableConfig, HISTORY_FILE};
use crate::common::exception::CliError;
use crate::common::logger::initialize_logger;
use crate::common::result_writer::{course_headers, CliResultWriter, ResultWriter};
use crate::common::time::timed;
use crate::container::chained_hash_table::ChainedHashTable;
use crate::loader::load_courses;
use clap::Parser;
use colored::*;
use log::info;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Course CSV file used by `load` when no path is given [default: data/courses.csv]
    #[arg(short, long)]
    csv_path: Option<PathBuf>,

    /// Number of hash buckets [default: 179]
    #[arg(short, long)]
    buckets: Option<usize>,

    /// Course id used by menu option 3
    #[arg(short, long)]
    find: Option<String>,

    /// Load the CSV file before the first prompt
    #[arg(short, long)]
    autoload: bool,
}

/// Applies command-line overrides on top of the default table settings.
fn table_config(args: &Args) -> TableConfig {
    let mut config = TableConfig::default();
    if let Some(path) = &args.csv_path {
        config.csv_path = path.clone();
    }
    if let Some(buckets) = args.buckets {
        config.bucket_count = buckets;
    }
    config
}

/// What the read loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive session. Owns the course table for as long as the session
/// runs; each `load` replaces it with a freshly populated one.
pub struct CourseSession {
    config: TableConfig,
    table: Option<ChainedHashTable>,
    default_find: Option<String>,
}

impl CourseSession {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            table: None,
            default_find: None,
        }
    }

    pub fn with_default_find(mut self, id: Option<String>) -> Self {
        self.default_find = id;
        self
    }

    pub fn table(&self) -> Option<&ChainedHashTable> {
        self.table.as_ref()
    }

    pub fn execute_command(
        &mut self,
        command: &str,
        writer: &mut impl ResultWriter,
    ) -> Result<Flow, CliError> {
        let mut parts = command.split_whitespace();
        let verb = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next();

        match (verb.as_str(), arg) {
            ("1" | "load", path) => self.handle_load(path.map(PathBuf::from), writer)?,
            ("2" | "list", _) => self.handle_list(writer)?,
            ("3", None) => {
                let id = self
                    .default_find
                    .clone()
                    .ok_or(CliError::Usage("find <course id>"))?;
                self.handle_find(&id, writer)?
            }
            ("3" | "find", Some(id)) => self.handle_find(id, writer)?,
            ("find", None) => return Err(CliError::Usage("find <course id>")),
            ("remove", Some(id)) => self.handle_remove(id, writer)?,
            ("remove", None) => return Err(CliError::Usage("remove <course id>")),
            ("status", _) => self.handle_status(writer)?,
            ("help", _) => display_help(writer),
            ("4" | "exit" | "quit", _) => return Ok(Flow::Exit),
            _ => return Err(CliError::UnknownCommand(command.trim().to_string())),
        }

        Ok(Flow::Continue)
    }

    fn handle_load(
        &mut self,
        path: Option<PathBuf>,
        writer: &mut impl ResultWriter,
    ) -> Result<(), CliError> {
        let path = path.unwrap_or_else(|| self.config.csv_path.clone());
        let mut table = ChainedHashTable::new(self.config.bucket_count)?;

        let (result, elapsed) = timed(|| load_courses(&path, &mut table));
        let summary = match result {
            Ok(summary) => summary,
            Err(e) => {
                writer.write_message(&format!("time: {}", elapsed));
                // Rows read before the failure replace the session table; a
                // load that stored nothing leaves the previous table in place.
                if !table.is_empty() {
                    self.table = Some(table);
                }
                return Err(e.into());
            }
        };
        let loaded = table.len();
        self.table = Some(table);

        writer.write_message(&format!(
            "Loaded {} courses from {} ({})",
            summary.loaded,
            path.display(),
            summary.headers.join(" | ")
        ));
        writer.write_message(&format!("time: {}", elapsed));
        info!("Session table holds {} courses", loaded);
        Ok(())
    }

    fn handle_list(&self, writer: &mut impl ResultWriter) -> Result<(), CliError> {
        let table = self.loaded_table()?;

        let (courses, elapsed) = timed(move || table.iter().collect::<Vec<&Course>>());
        writer.write_schema_header(course_headers());
        for course in &courses {
            writer.write_course_row(course);
        }
        writer.write_message(&format!("{} courses", courses.len()));
        writer.write_message(&format!("time: {}", elapsed));
        Ok(())
    }

    fn handle_find(&self, id: &str, writer: &mut impl ResultWriter) -> Result<(), CliError> {
        let table = self.loaded_table()?;

        let (found, elapsed) = timed(move || table.find(id));
        match found {
            Some(course) => writer.write_course(course),
            None => writer.write_message(&format!("Course Id {} not found.", id)),
        }
        writer.write_message(&format!("time: {}", elapsed));
        Ok(())
    }

    fn handle_remove(&mut self, id: &str, writer: &mut impl ResultWriter) -> Result<(), CliError> {
        let table = self.table.as_mut().ok_or(CliError::NotLoaded)?;

        let (removed, elapsed) = timed(|| table.remove(id));
        match removed {
            Some(course) => writer.write_message(&format!("Removed {}", course)),
            None => writer.write_message(&format!("Course Id {} not found.", id)),
        }
        writer.write_message(&format!("time: {}", elapsed));
        Ok(())
    }

    fn handle_status(&self, writer: &mut impl ResultWriter) -> Result<(), CliError> {
        writer.write_schema_header(vec!["Setting".to_string(), "Value".to_string()]);
        writer.write_row(vec![
            "CSV File".to_string(),
            self.config.csv_path.display().to_string(),
        ]);
        writer.write_row(vec![
            "Buckets".to_string(),
            self.config.bucket_count.to_string(),
        ]);

        if let Some(table) = &self.table {
            writer.write_row(vec!["Courses".to_string(), table.len().to_string()]);
            writer.write_row(vec![
                "Occupied Buckets".to_string(),
                table.occupied_slots().to_string(),
            ]);
            writer.write_row(vec![
                "Load Factor".to_string(),
                format!("{:.3}", table.load_factor()),
            ]);
            writer.write_row(vec![
                "Longest Chain".to_string(),
                table.longest_chain().to_string(),
            ]);
        } else {
            writer.write_row(vec!["Courses".to_string(), "not loaded".to_string()]);
        }
        writer.write_message("");
        Ok(())
    }

    fn loaded_table(&self) -> Result<&ChainedHashTable, CliError> {
        self.table.as_ref().ok_or(CliError::NotLoaded)
    }
}

fn display_help(writer: &mut impl ResultWriter) {
    writer.write_message(&format!("\n{}", "Available Commands:".bold()));
    writer.write_message("  1 | load [path]  - Load courses from a CSV file");
    writer.write_message("  2 | list         - Display all courses");
    writer.write_message("  3 | find <id>    - Find a course by id");
    writer.write_message("  remove <id>      - Remove a course by id");
    writer.write_message("  status           - Show table configuration and statistics");
    writer.write_message("  help             - Show this help message");
    writer.write_message("  4 | exit         - Exit");
}

pub fn run_cli() -> Result<(), CliError> {
    initialize_logger();
    let args = Args::parse();

    let config = table_config(&args);

    println!("{}", "\nCourse Table".blue().bold());
    println!("Type 'help' for commands\n");

    let mut session = CourseSession::new(config).with_default_find(args.find);
    let mut writer = CliResultWriter::new();

    if args.autoload {
        if let Err(e) = session.execute_command("load", &mut writer) {
            println!("{}", format!("Error: {}", e).red());
        }
    }

    let mut rl = DefaultEditor::new()?;
    if rl.load_history(HISTORY_FILE).is_err() {
        println!("{}", "No previous history.".yellow());
    }

    loop {
        match rl.readline("courses> ") {
            Ok(line) => {
                let command = line.trim();
                if command.is_empty() {
                    continue;
                }

                rl.add_history_entry(command)?;

                match session.execute_command(command, &mut writer) {
                    Ok(Flow::Exit) => break,
                    Ok(Flow::Continue) => {}
                    Err(e) => println!("{}", format!("Error: {}", e).red()),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    println!("Good bye.");
    rl.save_history(HISTORY_FILE)?;
    Ok(())
}
