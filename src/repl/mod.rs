use chrono::FixedOffset;
use rustyline::{history::MemHistory, Editor};
use snafu::{ResultExt, Snafu};

use crate::{
    config::{Config, ConfigError},
    model::{EntryState, Job, Timeline, TimelineEntry, TransportNumber},
    service::{jobs_for_driver, reconstruct, select_job, Snapshot, SnapshotError},
    time,
};

mod parse;

pub struct Repl {
    inner: Editor<(), MemHistory>,
    message: Option<String>,
}

impl Repl {
    pub fn new() -> Result<Self, ReplError> {
        let config = rustyline::Config::default();
        let inner =
            rustyline::Editor::with_history(config, MemHistory::new()).context(RustylineSnafu)?;

        let repl = Self {
            inner,
            message: None,
        };
        Ok(repl)
    }

    pub async fn prompt(&mut self) -> Action {
        let message = self
            .message
            .as_ref()
            .map(|msg| format!("{msg}\n"))
            .unwrap_or_default();
        let prompt = format!("{}timeline> ", message);

        let Ok(input) = self.inner.readline(&prompt) else {
            return Action::Exit;
        };

        self.message = None;

        self.inner.add_history_entry(input.clone()).ok();

        match parse::parse(&input) {
            Ok(action) => action,
            Err(err) => {
                self.reply(err.to_string());
                Action::None
            }
        }
    }

    pub fn reply(&mut self, message: String) {
        if let Some(msg) = self.message.as_mut() {
            msg.push('\n');
            msg.push_str(&message);
        } else {
            self.message = Some(message);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Action {
    List,
    Driver { name: String },
    Show { transport_no: TransportNumber },
    Reload,
    Exit,
    None,
}

#[derive(Debug, Snafu)]
pub enum ReplError {
    #[snafu(transparent)]
    Config { source: ConfigError },

    #[snafu(transparent)]
    Snapshot { source: SnapshotError },

    #[snafu(display("failed to initialize REPL: {}", source))]
    Rustyline {
        source: rustyline::error::ReadlineError,
    },
}

pub async fn start(repl: &mut Repl, config: &Config) -> Result<(), ReplError> {
    tracing::info!("starting timeline inspector");

    let offset = config.utc_offset()?;
    let mut snapshot = Snapshot::load(&config.snapshot).await?;
    repl.reply(format!("loaded {} jobs", snapshot.jobs().len()));

    loop {
        match repl.prompt().await {
            Action::Exit => break,
            Action::Reload => match Snapshot::load(&config.snapshot).await {
                Ok(reloaded) => {
                    snapshot = reloaded;
                    repl.reply(format!("reloaded {} jobs", snapshot.jobs().len()));
                }
                Err(err) => {
                    tracing::error!(error = ?err, "could not reload the snapshot: {}", err);
                    repl.reply(format!("reload failed, keeping the previous snapshot: {err}"));
                }
            },
            Action::List => {
                let jobs = snapshot.newest_first();
                if jobs.is_empty() {
                    repl.reply("no jobs in the snapshot".to_string());
                    continue;
                }

                let lines = jobs
                    .iter()
                    .map(|job| describe_job(job, offset))
                    .collect::<Vec<_>>()
                    .join("\n");
                repl.reply(lines);
            }
            Action::Driver { name } => {
                let visible = jobs_for_driver(snapshot.jobs(), &name);
                match select_job(visible) {
                    Some(job) => repl.reply(render(job, &reconstruct(job), offset)),
                    None => repl.reply(format!("no job assigned to `{name}`")),
                }
            }
            Action::Show { transport_no } => match snapshot.find(&transport_no) {
                Some(job) => repl.reply(render(job, &reconstruct(job), offset)),
                None => repl.reply(format!("no job `{transport_no}` in the snapshot")),
            },
            _ => continue,
        }
    }

    Ok(())
}

fn describe_job(job: &Job, offset: FixedOffset) -> String {
    format!(
        "  {}  {:<14} {:<20} {}",
        time::display(job.created_at, offset),
        job.status,
        job.driver_name.as_deref().unwrap_or("-"),
        job.transport_no,
    )
}

fn render(job: &Job, timeline: &Timeline, offset: FixedOffset) -> String {
    let mut lines = vec![format!(
        "{} ({}, {})",
        job.transport_no,
        job.status,
        job.vehicle.as_deref().unwrap_or("no vehicle"),
    )];

    lines.extend(timeline.entries.iter().map(|entry| render_entry(entry, offset)));

    let progress = timeline.progress();
    lines.push(format!("{}/{} steps completed", progress.completed, progress.total));

    lines.join("\n")
}

fn render_entry(entry: &TimelineEntry, offset: FixedOffset) -> String {
    let marker = match entry.state {
        EntryState::Completed => "[x]",
        EntryState::Active => "[>]",
        EntryState::Pending => "[ ]",
    };

    let time = match entry.state {
        EntryState::Completed => time::display(entry.timestamp, offset),
        EntryState::Active | EntryState::Pending => time::PLACEHOLDER.to_string(),
    };

    match &entry.subtitle {
        Some(subtitle) => format!("  {marker} {time}  {} ({subtitle})", entry.title),
        None => format!("  {marker} {time}  {}", entry.title),
    }
}
