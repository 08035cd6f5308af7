use clap::Parser;
use hourly_core::config::Settings;
use hourly_plan::TaskForm;

/// Spread the hours a task needs over a date window as one recurring calendar event.
#[derive(Debug, Parser)]
#[command(name = "hourly", version)]
pub struct Cli {
    /// Event name
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub location: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// First day of the window (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: String,

    /// Last day of the window (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: String,

    /// Daily start, `22:30` or `10:30 PM`
    #[arg(long, default_value = "10:00 AM")]
    pub start_time: String,

    /// Total hours the task needs
    #[arg(long)]
    pub hours: String,

    /// Permitted weekdays, comma separated
    #[arg(long, value_delimiter = ',', default_value = "MO,TU,WE,TH,FR,SA,SU")]
    pub days: Vec<String>,

    /// IANA time zone; defaults to `schedule.time_zone`
    #[arg(long)]
    pub time_zone: Option<String>,

    /// Calendar to save into; defaults to `schedule.calendar_id`
    #[arg(long)]
    pub calendar_id: Option<String>,

    /// Print up to this many occurrence start times
    #[arg(long)]
    pub preview: Option<u16>,

    /// Write the event to the outbox
    #[arg(long)]
    pub save: bool,
}

impl Cli {
    /// Builds the raw form, filling unset values from configuration.
    #[must_use]
    pub fn to_form(&self, settings: &Settings) -> TaskForm {
        TaskForm {
            name: self.name.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            start_time: self.start_time.clone(),
            hours: self.hours.clone(),
            days: self.days.clone(),
            time_zone: self
                .time_zone
                .clone()
                .unwrap_or_else(|| settings.schedule.time_zone.clone()),
        }
    }

    #[must_use]
    pub fn calendar_id<'a>(&'a self, settings: &'a Settings) -> &'a str {
        self.calendar_id
            .as_deref()
            .unwrap_or(&settings.schedule.calendar_id)
    }
}
