use crate::api::ApiClient;
use crate::components::tab_toggle;
use crate::config::ApiConfig;
use crate::error::SubmitError;
use crate::flow::{self, Flow, Session, Ticket};
use crate::message::Message;
use crate::model::{ResultArea, ServiceState, Tab};
use crate::render::render_document;
use crate::utils::{count_label, truncate_status};
use crate::views::{file_tab, loading_indicator, report_panel, status_bar, text_tab};
use iced::widget::{button, column, container, scrollable, text, text_editor, Column};
use iced::{application, Alignment, Element, Length, Task, Theme};
use rfd::AsyncFileDialog;
use std::path::PathBuf;

const APP_TITLE: &str = "ICD Assist";
const REPORT_FILE_NAME: &str = "icd-report.html";

pub fn run(config: ApiConfig) -> iced::Result {
    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .run_with(move || App::new(config))
}

pub struct App {
    client: ApiClient,
    active_tab: Tab,
    selected_file: Option<PathBuf>,
    notes: text_editor::Content,
    session: Session,
    result: ResultArea,
    service: ServiceState,
    status_line: Option<String>,
}

impl App {
    pub fn new(config: ApiConfig) -> (Self, Task<Message>) {
        log::info!("Using coding service at {}", config.base_url());
        let client = ApiClient::new(config);
        let probe = client.clone();

        let app = Self {
            client,
            active_tab: Tab::default(),
            selected_file: None,
            notes: text_editor::Content::new(),
            session: Session::default(),
            result: ResultArea::Empty,
            service: ServiceState::Checking,
            status_line: None,
        };

        (
            app,
            Task::perform(async move { probe.health().await }, Message::HealthChecked),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowTab(id) => {
                self.show_tab(id);
                Task::none()
            }
            Message::PickFile => Task::perform(
                async {
                    AsyncFileDialog::new()
                        .set_title("Select patient records")
                        .add_filter("Spreadsheets", flow::spreadsheet_extensions())
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::FilePicked,
            ),
            Message::FilePicked(picked) => {
                if let Some(path) = picked {
                    log::info!("Selected {}", path.display());
                    self.selected_file = Some(path);
                }
                Task::none()
            }
            Message::NotesEdited(action) => {
                self.notes.perform(action);
                Task::none()
            }
            Message::SubmitFile => self.submit_file(),
            Message::SubmitText => self.submit_text(),
            Message::Completed(ticket, outcome) => {
                if !self.session.complete(ticket) {
                    return Task::none();
                }
                match outcome {
                    Ok(report) => {
                        let noun = match ticket.flow() {
                            Flow::File => "record",
                            Flow::Text => "code",
                        };
                        self.status_line = Some(format!(
                            "Rendered {}",
                            count_label(report.entry_count(), noun)
                        ));
                        self.result = ResultArea::Report(report);
                    }
                    Err(err) => {
                        log::error!("{} submission failed: {err}", ticket.flow().name());
                        self.show_error(&err, ticket.flow());
                    }
                }
                Task::none()
            }
            Message::ExportHtml => match self.result.report() {
                Some(report) => Task::perform(
                    export_report(render_document(report)),
                    Message::Exported,
                ),
                None => Task::none(),
            },
            Message::Exported(outcome) => {
                match outcome {
                    Ok(Some(path)) => {
                        log::info!("Report saved to {}", path.display());
                        self.status_line = Some(format!("Saved report to {}", path.display()));
                    }
                    Ok(None) => {}
                    Err(err) => {
                        log::error!("{err}");
                        self.status_line = Some(truncate_status(&err));
                    }
                }
                Task::none()
            }
            Message::HealthChecked(outcome) => {
                if let Err(err) = &outcome {
                    log::warn!("Coding service health check failed: {err}");
                }
                self.service = ServiceState::from_probe(outcome);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let input: Element<'_, Message> = match self.active_tab {
            Tab::File => file_tab(self.selected_file.as_deref()),
            Tab::Text => text_tab(&self.notes),
        };
        let input_panel = container(input).padding(16).width(Length::Fill);

        let mut results = Column::new().spacing(12);
        if self.session.is_loading() {
            results = results.push(loading_indicator());
        }
        results = results.push(report_panel(&self.result));
        if self.result.report().is_some() {
            results = results.push(button("Export HTML").on_press(Message::ExportHtml));
        }

        column![
            text("AI Medical Coding Assistant").size(26),
            tab_toggle(self.active_tab),
            input_panel,
            scrollable(results).height(Length::Fill),
            status_bar(&self.service, self.status_line.as_deref()),
        ]
        .padding(20)
        .spacing(16)
        .align_x(Alignment::Start)
        .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Activates exactly one tab; unknown identifiers select the text tab.
    fn show_tab(&mut self, id: &str) {
        self.active_tab = Tab::from_id(id);
    }

    fn submit_file(&mut self) -> Task<Message> {
        let upload = match flow::validate_file_selection(self.selected_file.as_deref()) {
            Ok(upload) => upload,
            Err(err) => {
                self.show_error(&SubmitError::from(err), Flow::File);
                return Task::none();
            }
        };

        let ticket = self.begin(Flow::File);
        let client = self.client.clone();
        Task::perform(flow::submit_file(client, upload), move |outcome| {
            Message::Completed(ticket, outcome)
        })
    }

    fn submit_text(&mut self) -> Task<Message> {
        let text = match flow::validate_text(&self.notes.text()) {
            Ok(text) => text,
            Err(err) => {
                self.show_error(&SubmitError::from(err), Flow::Text);
                return Task::none();
            }
        };

        let ticket = self.begin(Flow::Text);
        let client = self.client.clone();
        Task::perform(flow::submit_text(client, text), move |outcome| {
            Message::Completed(ticket, outcome)
        })
    }

    /// Shows the loading indicator and clears the previous result.
    fn begin(&mut self, flow: Flow) -> Ticket {
        self.result = ResultArea::Empty;
        self.status_line = None;
        self.session.begin(flow)
    }

    fn show_error(&mut self, err: &SubmitError, flow: Flow) {
        self.result = ResultArea::Error(err.user_message(flow));
    }
}

async fn export_report(document: String) -> Result<Option<PathBuf>, String> {
    let Some(handle) = AsyncFileDialog::new()
        .set_title("Save report")
        .add_filter("HTML", &["html"])
        .set_file_name(REPORT_FILE_NAME)
        .save_file()
        .await
    else {
        return Ok(None);
    };

    let path = handle.path().to_path_buf();
    tokio::fs::write(&path, document)
        .await
        .map_err(|err| format!("{}: failed to save report ({err})", path.display()))?;
    Ok(Some(path))
}
