use crate::data::{AppSettings, HolidayData};
use crate::ui::planner_view::{App, run_app};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use chrono::Local;
use tracing::info;

pub fn run() -> Result<()> {
    let settings = AppSettings::load()?;
    let holiday_data = HolidayData::builtin();

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    let today = Local::now().date_naive();
    let mut app = App::new(&holiday_data, settings, today);
    info!(%today, "interactive session started");

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;

    // Leave dates belong to the session; only the settings are kept.
    info!(leave_days = app.leave.len(), "interactive session ended");
    app.settings.save()?;

    result
}
