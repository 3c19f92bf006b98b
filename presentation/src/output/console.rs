//! Console output formatter for fetch runs

use crate::output::formatter::{OutputFormatter, RunReport};
use colored::Colorize;
use roster_application::{FetchError, FetchOutcome};
use roster_domain::Person;
use serde::Serialize;

/// Formats fetch run results for console display
pub struct ConsoleFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    outcome: &'static str,
    mode: String,
    started: String,
    finished: String,
    elapsed_ms: i64,
    people: &'a [Person],
    errors: Vec<JsonError>,
}

#[derive(Serialize)]
struct JsonError {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    message: String,
}

impl ConsoleFormatter {
    fn text(report: &RunReport<'_>) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("People ({})", report.mode)));
        output.push('\n');

        match report.outcome {
            FetchOutcome::Succeeded(people) => {
                output.push_str(&Self::section_header(&format!("Fetched {}", people.len())));
                output.push_str(&Self::people_list(people));
            }
            FetchOutcome::Canceled => {
                output.push_str(&format!("\n{}\n", "The operation was canceled".yellow().bold()));
            }
            FetchOutcome::Failed { errors, partial } => {
                output.push_str(&Self::section_header(&format!(
                    "{} error(s)",
                    errors.len()
                )));
                for error in errors {
                    output.push_str(&format!(
                        "  {} {}\n",
                        format!("[{}]", Self::error_kind(error)).red().bold(),
                        error
                    ));
                }
                if !partial.is_empty() {
                    output.push_str(&Self::section_header(&format!(
                        "Fetched before failure ({})",
                        partial.len()
                    )));
                    output.push_str(&Self::people_list(partial));
                }
            }
        }

        output.push_str(&Self::timing(report));
        output.push_str(&Self::footer());

        output
    }

    fn json(report: &RunReport<'_>) -> String {
        let (people, errors): (&[Person], Vec<JsonError>) = match report.outcome {
            FetchOutcome::Succeeded(people) => (people, Vec::new()),
            FetchOutcome::Canceled => (&[], Vec::new()),
            FetchOutcome::Failed { errors, partial } => (
                partial,
                errors
                    .iter()
                    .map(|e| JsonError {
                        kind: Self::error_kind(e),
                        id: e.person_id().map(|id| id.value()),
                        message: e.to_string(),
                    })
                    .collect(),
            ),
        };

        let json = JsonReport {
            outcome: report.outcome.label(),
            mode: report.mode.to_string(),
            started: report.started.to_rfc3339(),
            finished: report.finished.to_rfc3339(),
            elapsed_ms: report.elapsed_ms(),
            people,
            errors,
        };
        serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string())
    }

    fn error_kind(error: &FetchError) -> &'static str {
        error.source_error().map_or("worker", |source| source.kind())
    }

    fn people_list(people: &[Person]) -> String {
        people
            .iter()
            .map(|person| {
                format!(
                    "  {:>4}  {:<24} {}  {}\n",
                    person.id().to_string().dimmed(),
                    person.to_string(),
                    person.start_date().format("%Y-%m-%d"),
                    format!("rating {}", person.rating()).dimmed()
                )
            })
            .collect()
    }

    fn timing(report: &RunReport<'_>) -> String {
        format!(
            "\n{} {}\n{} {}\n{} {:.3}s\n",
            "Request start:".cyan(),
            report.started.format("%H:%M:%S%.3f"),
            "Request end:  ".cyan(),
            report.finished.format("%H:%M:%S%.3f"),
            "Elapsed:      ".cyan(),
            report.elapsed_ms() as f64 / 1000.0
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &RunReport<'_>) -> String {
        Self::text(report)
    }

    fn format_json(&self, report: &RunReport<'_>) -> String {
        Self::json(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate, TimeDelta};
    use roster_application::{AggregateError, SourceError};
    use roster_domain::{FetchMode, OutputFormat, PersonId};

    fn person(id: i64, given: &str, family: &str) -> Person {
        let start = NaiveDate::from_ymd_opt(1999, 3, 19).unwrap();
        Person::new(PersonId::new(id), given, family, start).with_rating(7)
    }

    fn report(outcome: &FetchOutcome) -> RunReport<'_> {
        let started = Local::now();
        RunReport {
            mode: FetchMode::Concurrent,
            outcome,
            started,
            finished: started + TimeDelta::milliseconds(1500),
        }
    }

    fn failed() -> FetchOutcome {
        let errors = AggregateError::from_errors(vec![
            FetchError::Person {
                id: PersonId::new(1),
                source: SourceError::Status {
                    status: 500,
                    url: "http://localhost:9874/people/1".to_string(),
                },
            },
            FetchError::Person {
                id: PersonId::new(3),
                source: SourceError::Timeout,
            },
        ])
        .unwrap();
        FetchOutcome::Failed {
            errors,
            partial: vec![person(2, "Dylan", "Hunt")],
        }
    }

    #[test]
    fn test_format_success_lists_people() {
        let outcome = FetchOutcome::Succeeded(vec![
            person(1, "John", "Koenig"),
            person(2, "Dylan", "Hunt"),
        ]);
        let text = ConsoleFormatter.format(&report(&outcome));
        assert!(text.contains("John Koenig"));
        assert!(text.contains("Dylan Hunt"));
        assert!(text.contains("1999-03-19"));
        assert!(text.contains("1.500s"));
    }

    #[test]
    fn test_format_canceled() {
        let text = ConsoleFormatter.format(&report(&FetchOutcome::Canceled));
        assert!(text.contains("The operation was canceled"));
    }

    #[test]
    fn test_format_failure_lists_every_error() {
        let outcome = failed();
        let text = ConsoleFormatter.format(&report(&outcome));
        assert!(text.contains("2 error(s)"));
        assert!(text.contains("[status]"));
        assert!(text.contains("[timeout]"));
        assert!(text.contains("Failed to fetch person 3"));
        assert!(text.contains("Dylan Hunt"));
    }

    #[test]
    fn test_format_json() {
        let outcome = failed();
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter.format_json(&report(&outcome))).unwrap();
        assert_eq!(json["outcome"], "failed");
        assert_eq!(json["mode"], "concurrent");
        assert_eq!(json["elapsed_ms"], 1500);
        assert_eq!(json["errors"].as_array().unwrap().len(), 2);
        assert_eq!(json["errors"][0]["kind"], "status");
        assert_eq!(json["errors"][0]["id"], 1);
        assert_eq!(json["people"][0]["givenName"], "Dylan");
    }

    #[test]
    fn test_render_dispatches_on_output_format() {
        let outcome = FetchOutcome::Canceled;
        let formatter: Box<dyn OutputFormatter> = Box::new(ConsoleFormatter);

        let text = formatter.render(&report(&outcome), OutputFormat::Text);
        assert!(text.contains("The operation was canceled"));

        let json: serde_json::Value =
            serde_json::from_str(&formatter.render(&report(&outcome), OutputFormat::Json)).unwrap();
        assert_eq!(json["outcome"], "canceled");
    }

    #[test]
    fn test_format_json_canceled_is_empty() {
        let json: serde_json::Value = serde_json::from_str(&ConsoleFormatter.format_json(
            &report(&FetchOutcome::Canceled),
        ))
        .unwrap();
        assert_eq!(json["outcome"], "canceled");
        assert!(json["people"].as_array().unwrap().is_empty());
    }
}
