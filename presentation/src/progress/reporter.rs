//! Progress reporting for fetch runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use roster_application::ports::people_source::SourceError;
use roster_application::ports::progress::ProgressNotifier;
use roster_domain::{FetchMode, Percent, Person, PersonId};
use std::sync::Mutex;

/// Reports progress during a fetch run with a percentage bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_fetch_start(&self, total: usize, mode: FetchMode) {
        let pb = ProgressBar::new(u64::from(Percent::COMPLETE.value()));
        pb.set_style(Self::bar_style());
        pb.set_prefix(format!("Fetching {} ({})", total, mode));
        pb.set_message("Starting...");

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_progress(&self, percent: Percent) {
        self.with_bar(|pb| pb.set_position(u64::from(percent.value())));
    }

    fn on_person_fetched(&self, person: &Person) {
        self.with_bar(|pb| pb.set_message(format!("{} {}", "v".green(), person)));
    }

    fn on_person_failed(&self, id: PersonId, error: &SourceError) {
        self.with_bar(|pb| pb.println(format!("  {} person {}: {}", "x".red(), id, error)));
    }

    fn on_fetch_complete(&self) {
        let Ok(mut guard) = self.bar.lock() else {
            return;
        };
        if let Some(pb) = guard.take() {
            if pb.position() >= u64::from(Percent::COMPLETE.value()) {
                pb.finish_with_message(format!("{}", "complete!".green()));
            } else {
                pb.abandon_with_message(format!("{}", "stopped".yellow()));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Prints one `"N% Complete"` line per successful fetch to stderr.
pub struct SimpleProgress;

impl SimpleProgress {
    pub fn line(percent: Percent) -> String {
        format!("{}% Complete", percent.value())
    }
}

impl ProgressNotifier for SimpleProgress {
    fn on_fetch_start(&self, total: usize, mode: FetchMode) {
        eprintln!(
            "{} Fetching {} people ({})",
            "->".cyan(),
            total.to_string().bold(),
            mode
        );
    }

    fn on_progress(&self, percent: Percent) {
        eprintln!("{}", Self::line(percent));
    }

    fn on_person_failed(&self, id: PersonId, error: &SourceError) {
        eprintln!("  {} person {} ({})", "x".red(), id, error.kind());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_progress_line() {
        assert_eq!(SimpleProgress::line(Percent::of(1, 3)), "33% Complete");
        assert_eq!(SimpleProgress::line(Percent::COMPLETE), "100% Complete");
    }

    #[test]
    fn test_reporter_tracks_percent() {
        let reporter = ProgressReporter::new();
        // Callbacks before start are ignored
        reporter.on_progress(Percent::new(10));

        reporter.on_fetch_start(4, FetchMode::Concurrent);
        reporter.on_progress(Percent::of(2, 4));
        reporter.with_bar(|pb| assert_eq!(pb.position(), 50));

        reporter.on_fetch_complete();
        assert!(reporter.bar.lock().unwrap().is_none());
    }
}
