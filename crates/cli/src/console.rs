//! Interactive console menu.

use std::io::{self, BufRead, Write};

use todolist_core::{Percentage, Time};
use todolist_service::{parse_date, ServiceError, TodoListService};
use todolist_storage::TodoListRepository;
use tracing::{error, info};

use crate::render::render_items;

/// Whether the menu loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu-driven front end reading commands from `input`.
///
/// End of input behaves like choosing Exit.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hand back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until Exit or end of input.
    pub async fn run<S: TodoListRepository>(
        &mut self,
        service: &TodoListService<S>,
    ) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(option) = self.read_line()? else {
                break;
            };

            let flow = match option.as_str() {
                "1" => self.add_item(service).await?,
                "2" => self.update_item(service).await?,
                "3" => self.remove_item(service).await?,
                "4" => self.register_progression(service).await?,
                "5" => self.print_items(service).await?,
                "6" => Flow::Exit,
                _ => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        info!("Application exiting");
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Todo List Application")?;
        writeln!(self.output, "1. Add Item")?;
        writeln!(self.output, "2. Update Item")?;
        writeln!(self.output, "3. Remove Item")?;
        writeln!(self.output, "4. Register Progression")?;
        writeln!(self.output, "5. Print Items")?;
        writeln!(self.output, "6. Exit")?;
        write!(self.output, "Select an option: ")?;
        self.output.flush()
    }

    async fn add_item<S: TodoListRepository>(
        &mut self,
        service: &TodoListService<S>,
    ) -> io::Result<Flow> {
        let Some(title) = self.prompt("Enter title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(Flow::Exit);
        };
        writeln!(
            self.output,
            "Available categories: {}",
            service.categories().join(", ")
        )?;
        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(Flow::Exit);
        };

        let result = service
            .add_item(&title, &description, &category)
            .await
            .map(|item| format!("Item {} added.", item.id));
        self.report("1", result)
    }

    async fn update_item<S: TodoListRepository>(
        &mut self,
        service: &TodoListService<S>,
    ) -> io::Result<Flow> {
        let Some(id) = self.read_id("Enter item ID to update: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(description) = self.prompt("Enter new description: ")? else {
            return Ok(Flow::Exit);
        };

        let result = service
            .update_item(id, &description)
            .await
            .map(|item| format!("Item {} updated.", item.id));
        self.report("2", result)
    }

    async fn remove_item<S: TodoListRepository>(
        &mut self,
        service: &TodoListService<S>,
    ) -> io::Result<Flow> {
        let Some(id) = self.read_id("Enter item ID to remove: ")? else {
            return Ok(Flow::Exit);
        };

        let result = service
            .remove_item(id)
            .await
            .map(|()| format!("Item {id} removed."));
        self.report("3", result)
    }

    async fn register_progression<S: TodoListRepository>(
        &mut self,
        service: &TodoListService<S>,
    ) -> io::Result<Flow> {
        let Some(id) = self.read_id("Enter item ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(date) = self.read_date("Enter date (yyyy-MM-dd): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(percentage) = self.read_percentage("Enter percent: ")? else {
            return Ok(Flow::Exit);
        };

        let result = service
            .register_progression(id, date, percentage)
            .await
            .map(|item| {
                format!(
                    "Progression registered. Item {} is at {}%.",
                    item.id, item.total_progress
                )
            });
        self.report("4", result)
    }

    async fn print_items<S: TodoListRepository>(
        &mut self,
        service: &TodoListService<S>,
    ) -> io::Result<Flow> {
        match service.list_items().await {
            Ok(items) => {
                write!(self.output, "{}", render_items(&items))?;
                Ok(Flow::Continue)
            }
            Err(err) => self.report("5", Err(err)),
        }
    }

    fn report(&mut self, option: &str, result: Result<String, ServiceError>) -> io::Result<Flow> {
        match result {
            Ok(message) => {
                info!(option, "{}", message);
                writeln!(self.output, "{message}")?;
            }
            Err(err) => {
                error!(option, "Operation failed: {}", err);
                writeln!(self.output, "Error: {err}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompt until `parse` accepts the answer or input ends.
    fn prompt_parsed<T>(
        &mut self,
        label: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(None);
            };
            if let Some(value) = parse(answer.trim()) {
                return Ok(Some(value));
            }
            writeln!(self.output, "{retry}")?;
        }
    }

    fn read_id(&mut self, label: &str) -> io::Result<Option<u32>> {
        self.prompt_parsed(label, "Invalid number. Try again.", |s| s.parse().ok())
    }

    fn read_date(&mut self, label: &str) -> io::Result<Option<Time>> {
        self.prompt_parsed(label, "Invalid date format. Use yyyy-MM-dd.", |s| {
            parse_date(s).ok()
        })
    }

    fn read_percentage(&mut self, label: &str) -> io::Result<Option<Percentage>> {
        self.prompt_parsed(label, "Invalid decimal value. Try again.", |s| {
            s.parse().ok()
        })
    }
}
