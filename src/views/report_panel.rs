use crate::message::Message;
use crate::model::{Diagnosis, MatchReport, PatientRecord, ResultArea, TextMatchResult};
use iced::widget::text::Wrapping;
use iced::widget::{column, container, row, text, Column};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};

const GREEN: Color = Color::from_rgb(0.15, 0.68, 0.38);
const BLUE: Color = Color::from_rgb(0.2, 0.6, 0.86);
const RED: Color = Color::from_rgb(0.91, 0.3, 0.24);
const ORANGE: Color = Color::from_rgb(0.95, 0.61, 0.07);
const AMBER: Color = Color::from_rgb(1.0, 0.76, 0.03);

pub fn report_panel(area: &ResultArea) -> Element<'_, Message> {
    match area {
        ResultArea::Empty => text("Submit a file or clinical notes to see suggested ICD codes").into(),
        ResultArea::Error(message) => notice(text(message).color(RED), RED),
        ResultArea::Report(report) => report_view(report).into(),
    }
}

pub fn loading_indicator() -> Element<'static, Message> {
    text("Analyzing with AI, please wait…").size(16).color(ORANGE).into()
}

fn report_view(report: &MatchReport) -> Column<'_, Message> {
    let stats = report
        .statistics()
        .into_iter()
        .fold(column![text("Statistics").size(18)].spacing(6), |column, line| {
            column.push(row![
                text(format!("{}:", line.label)).width(Length::FillPortion(2)),
                text(line.value.to_string()).width(Length::FillPortion(1)),
            ])
        });

    let content = column![
        text("AI-Suggested ICD Codes").size(22),
        card(stats.into(), BLUE),
    ]
    .spacing(16);

    match report {
        MatchReport::File(result) if result.has_records() => result
            .results
            .iter()
            .fold(content, |column, record| column.push(record_block(record))),
        MatchReport::Text(result) if result.has_codes() => {
            content.push(matched_codes_block(result))
        }
        _ => content.push(notice(
            column![
                text("No Data Found").size(18).color(AMBER),
                text(report.no_data_message()).color(AMBER),
            ]
            .spacing(6),
            AMBER,
        )),
    }
}

fn record_block(record: &PatientRecord) -> Element<'_, Message> {
    let principal = &record.principal_diagnosis;
    let mut block = column![
        text(format!("AN: {}", record.visit_id())).size(18).color(GREEN),
        text("Principal Diagnosis:").size(16),
        row![
            badge(principal.code_or_placeholder(), GREEN),
            text(principal.description_or_placeholder()).wrapping(Wrapping::Word),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    ]
    .spacing(8);

    if !record.secondary_diagnoses.is_empty() {
        block = block.push(diagnosis_list(
            "Secondary Diagnoses:",
            BLUE,
            &record.secondary_diagnoses,
        ));
    }
    if !record.complications.is_empty() {
        block = block.push(diagnosis_list("Complications:", RED, &record.complications));
    }
    if !record.laboratory_findings.is_empty() {
        block = record.laboratory_findings.iter().fold(
            block.push(text("Laboratory Findings:").color(ORANGE)),
            |column, finding| column.push(text(format!("• {finding}")).wrapping(Wrapping::Word)),
        );
    }

    card(block.into(), GREEN)
}

fn diagnosis_list<'a>(title: &'a str, color: Color, items: &'a [Diagnosis]) -> Column<'a, Message> {
    items.iter().fold(
        column![text(title).color(color)].spacing(6),
        |column, item| {
            column.push(
                row![
                    badge(item.code().unwrap_or_default(), color),
                    text(item.description().unwrap_or_default()).wrapping(Wrapping::Word),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            )
        },
    )
}

fn matched_codes_block(result: &TextMatchResult) -> Element<'_, Message> {
    let list = result.matched_codes.iter().fold(
        column![text("Extracted Findings").size(18).color(GREEN)].spacing(8),
        |column, entry| {
            column.push(
                row![
                    badge(&entry.code, BLUE),
                    text(&entry.description)
                        .wrapping(Wrapping::Word)
                        .width(Length::Fill),
                    text(entry.found_in_column()).size(13),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            )
        },
    );

    card(list.into(), GREEN)
}

fn badge(label: &str, color: Color) -> Element<'_, Message> {
    container(text(label).size(14).color(Color::WHITE))
        .padding([3, 8])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn card(content: Element<'_, Message>, accent: Color) -> Element<'_, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(move |theme: &Theme| container::Style {
            background: Some(Background::Color(theme.extended_palette().background.weak.color)),
            border: Border {
                color: accent,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

fn notice<'a>(content: impl Into<Element<'a, Message>>, accent: Color) -> Element<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(accent.scale_alpha(0.12))),
            border: Border {
                color: accent,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}
