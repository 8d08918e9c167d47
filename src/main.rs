use clap::Parser;
use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

mod cli;
mod state;
mod table;
mod ui;

use state::data::Dataset;
use state::dataset::{load_dataset_async, DatasetOrigin};
use state::view::ViewState;
use table::cost::Unit;
use table::sort::Column;
use table::TableModel;

const TITLE: &str = "privacy ain't free";
const TAGLINE: &str = "In order to reach adoption, we need cheap, fast, great UX privacy \
                       to be on par with transparent transfers.";

/// Main application state
struct ComparisonApp {
    /// Rows of the table (baseline + solutions)
    dataset: Dataset,
    /// Where `dataset` was loaded from
    origin: DatasetOrigin,
    /// Selected unit and active sort
    view: ViewState,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User picked a display unit
    UnitSelected(Unit),
    /// User clicked a column header
    ColumnActivated(Column),
    /// User clicked the "Open dataset…" button
    OpenDataset,
    /// Background load finished
    DatasetLoaded(PathBuf, Result<Dataset, String>),
}

impl ComparisonApp {
    /// Create a new instance of the application
    fn new(dataset: Dataset, origin: DatasetOrigin, view: ViewState) -> (Self, Task<Message>) {
        let status = status_line(&dataset, &origin);
        info!("🔐 Comparison ready: {}", status);

        (
            ComparisonApp {
                dataset,
                origin,
                view,
                status,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::UnitSelected(unit) => {
                self.view.select_unit(unit);
                Task::none()
            }
            Message::ColumnActivated(column) => {
                self.view.activate_column(column);
                Task::none()
            }
            Message::OpenDataset => {
                let file = FileDialog::new()
                    .set_title("Select a comparison dataset")
                    .add_filter("JSON", &["json"])
                    .pick_file();

                if let Some(path) = file {
                    self.status = format!("Loading {}...", path.display());

                    return Task::perform(load_dataset_async(path.clone()), move |result| {
                        Message::DatasetLoaded(path.clone(), result)
                    });
                }

                Task::none()
            }
            Message::DatasetLoaded(path, Ok(dataset)) => {
                // Sort and unit carry over; rows are re-sorted on the next view
                self.dataset = dataset;
                self.origin = DatasetOrigin::File(path);
                self.status = status_line(&self.dataset, &self.origin);
                Task::none()
            }
            Message::DatasetLoaded(path, Err(err)) => {
                warn!("⚠️  Keeping current dataset, {} failed to load: {}", path.display(), err);
                self.status = format!("❌ {err} (still showing {})", self.origin);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let model = TableModel::build(&self.dataset, &self.view);

        let toolbar = row![
            ui::table::unit_toggle(self.view.unit),
            horizontal_space(),
            button("Open dataset…")
                .on_press(Message::OpenDataset)
                .padding(10),
        ]
        .align_y(Alignment::Center);

        let content = column![
            text(TITLE).size(40),
            text(TAGLINE).size(16),
            toolbar,
            ui::table::view(&model),
            text(&self.status).size(12),
        ]
        .spacing(20)
        .padding(40);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// "4 solutions from <origin>, updated <date>"
fn status_line(dataset: &Dataset, origin: &DatasetOrigin) -> String {
    let mut status = format!("{} solutions from {}", dataset.solutions.len(), origin);
    if let Some(date) = dataset.last_updated {
        status.push_str(&format!(", updated {}", date.format("%Y-%m-%d")));
    }
    status
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    cli::init_tracing(cli.verbose);

    let (dataset, origin) = match Dataset::resolve(cli.data.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            error!("❌ {err}");
            return ExitCode::FAILURE;
        }
    };
    let view = cli.initial_view();

    if cli.print {
        print!("{}", ui::plain::render(&TableModel::build(&dataset, &view)));
        return ExitCode::SUCCESS;
    }

    let result = iced::application(TITLE, ComparisonApp::update, ComparisonApp::view)
        .theme(ComparisonApp::theme)
        .window_size((1280.0, 720.0))
        .centered()
        .run_with(move || ComparisonApp::new(dataset, origin, view));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("❌ {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::sort::Direction;

    fn app() -> ComparisonApp {
        let dataset = Dataset::bundled().unwrap();
        ComparisonApp::new(dataset, DatasetOrigin::Bundled, ViewState::new()).0
    }

    #[test]
    fn test_header_clicks_drive_sort() {
        let mut app = app();
        let _ = app.update(Message::ColumnActivated(Column::Speed));
        let _ = app.update(Message::ColumnActivated(Column::Speed));
        assert_eq!(app.view.sort, Some((Column::Speed, Direction::Descending)));

        let _ = app.update(Message::UnitSelected(Unit::Eth));
        assert_eq!(app.view.unit, Unit::Eth);
        assert_eq!(app.view.sort, Some((Column::Speed, Direction::Descending)));
    }

    #[test]
    fn test_failed_load_keeps_dataset() {
        let mut app = app();
        let before = app.dataset.clone();

        let _ = app.update(Message::DatasetLoaded(
            PathBuf::from("/tmp/broken.json"),
            Err("invalid dataset: EOF".to_string()),
        ));

        assert_eq!(app.dataset, before);
        assert_eq!(app.origin, DatasetOrigin::Bundled);
        assert!(app.status.contains("invalid dataset"));
    }

    #[test]
    fn test_loaded_dataset_replaces_rows() {
        let mut app = app();
        let mut replacement = Dataset::bundled().unwrap();
        replacement.solutions.truncate(1);
        replacement.last_updated = None;

        let path = PathBuf::from("/data/custom.json");
        let _ = app.update(Message::DatasetLoaded(path.clone(), Ok(replacement)));

        assert_eq!(app.dataset.solutions.len(), 1);
        assert_eq!(app.origin, DatasetOrigin::File(path));
        assert_eq!(app.status, "1 solutions from /data/custom.json");
    }

    #[test]
    fn test_status_line_mentions_update_date() {
        let dataset = Dataset::bundled().unwrap();
        let status = status_line(&dataset, &DatasetOrigin::Bundled);
        assert!(status.starts_with(&format!("{} solutions from bundled dataset", dataset.solutions.len())));
        assert!(status.contains(", updated 2026-09-30"));
    }
}
