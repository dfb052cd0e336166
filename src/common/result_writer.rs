use crate::catalog::course::Course;
use colored::Colorize;
use prettytable::{format, Cell, Row, Table};

/// Trait for writing command results in a tabular format
pub trait ResultWriter {
    fn write_schema_header(&mut self, headers: Vec<String>);
    fn write_row(&mut self, values: Vec<String>);
    fn write_message(&mut self, message: &str);

    /// Renders one course on its own line as `id: name | prerequisite |`.
    fn write_course(&mut self, course: &Course) {
        self.write_message(&course.to_string());
    }

    fn write_course_row(&mut self, course: &Course) {
        self.write_row(vec![
            course.id().to_string(),
            course.name().to_string(),
            course.prerequisite().to_string(),
        ]);
    }
}

/// Column titles used when listing courses.
pub fn course_headers() -> Vec<String> {
    vec![
        "Course ID".to_string(),
        "Course Name".to_string(),
        "Prerequisites".to_string(),
    ]
}

#[derive(Default)]
pub struct CliResultWriter {
    table: Option<Table>,
    headers: Vec<String>,
}

/// Collects output instead of printing it.
#[derive(Debug, Default)]
pub struct BufferedResultWriter {
    pub column_names: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub messages: Vec<String>,
}

impl BufferedResultWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CliResultWriter {
    pub fn new() -> Self {
        Self {
            table: None,
            headers: Vec::new(),
        }
    }

    fn ensure_table(&mut self) -> &mut Table {
        let headers = &self.headers;
        self.table.get_or_insert_with(|| {
            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_BOX_CHARS);

            if !headers.is_empty() {
                table.set_titles(Row::new(
                    headers
                        .iter()
                        .map(|h| Cell::new(&h.bold().to_string()))
                        .collect(),
                ));
            }
            table
        })
    }

    fn flush_table(&mut self) {
        if let Some(table) = self.table.take() {
            table.printstd();
            println!();
        }
    }
}

impl ResultWriter for CliResultWriter {
    fn write_schema_header(&mut self, headers: Vec<String>) {
        self.flush_table();
        self.headers = headers;
        self.ensure_table();
    }

    fn write_row(&mut self, values: Vec<String>) {
        let table = self.ensure_table();
        table.add_row(Row::new(values.iter().map(|v| Cell::new(v)).collect()));
    }

    fn write_message(&mut self, message: &str) {
        self.flush_table();
        println!("{}", message);
    }
}

impl ResultWriter for BufferedResultWriter {
    fn write_schema_header(&mut self, column_names: Vec<String>) {
        self.column_names = column_names;
    }

    fn write_row(&mut self, values: Vec<String>) {
        self.rows.push(values);
    }

    fn write_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

impl Drop for CliResultWriter {
    fn drop(&mut self) {
        self.flush_table();
    }
}
