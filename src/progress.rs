use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";

pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    /// Reporter only when stderr is attached to a terminal
    pub fn for_terminal() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .expect("Progress bar template should be valid")
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn collecting_changes(&self, source: &str) {
        let _ = self.term.clear_line();
        eprint!(
            "\r{} Collecting changed files from {}... ",
            style(self.next_frame()).cyan(),
            style(source).dim()
        );
    }

    pub fn finish_changes(&self, count: usize) {
        let _ = self.term.clear_line();
        eprintln!(
            "\r{} Found {} changed {}",
            style("✓").green(),
            style(count).yellow().bold(),
            pluralize("file", count)
        );
    }

    pub fn start_dependency_lookup(&mut self, total_projects: usize) -> ProgressBar {
        let pb = self.create_progress_bar(total_projects as u64, "Looking up dependencies");
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn finish_dependency_lookup(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
    }

    pub fn finish_detection(&self, dirty: usize, total: usize) {
        if dirty == 0 {
            eprintln!("{} Nothing to rebuild", style("✓").green().bold());
        } else {
            eprintln!(
                "{} {} of {} {} dirty",
                style("🌊").cyan(),
                style(dirty).yellow().bold(),
                total,
                pluralize("project", total)
            );
        }
    }
}
