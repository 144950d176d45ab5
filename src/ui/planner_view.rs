use crate::calc::{YearPlan, calculate_year_plan, is_workday};
use crate::data::app_settings::parse_percent;
use crate::data::{AppSettings, HolidayData, LeaveSet, PLAN_YEAR};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use crossterm::event::{self, Event as CEvent, KeyCode, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use std::io::Stdout;
use std::time::Duration as StdDuration;
use tracing::{info, warn};

// Section header background
const SECTION_BG: Color = Color::Rgb(40, 44, 52);

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, PartialEq)]
enum Mode {
    Normal,
    AddDate,
    RangeStart,
    RangeEnd,
    EditPercent,
    EditPresent,
}

impl Mode {
    fn prompt(&self) -> &'static str {
        match self {
            Mode::Normal => "",
            Mode::AddDate => "Leave date (YYYY-MM-DD)",
            Mode::RangeStart => "Range start (YYYY-MM-DD)",
            Mode::RangeEnd => "Range end (YYYY-MM-DD)",
            Mode::EditPercent => "Office target % (0-100)",
            Mode::EditPresent => "Office days already present",
        }
    }
}

/// One interactive planning session. Leave added here lives only as long as
/// the session; settings are handed back to the caller for saving.
pub struct App<'a> {
    holiday_data: &'a HolidayData,
    pub leave: LeaveSet,
    pub settings: AppSettings,
    today: NaiveDate,
    current_month: u32,
    mode: Mode,
    input_buffer: String,
    range_start: Option<NaiveDate>,
    /// Result of the last action (message, color). Cleared on next keypress.
    status: Option<(String, Color)>,
    plan: Option<YearPlan>,
}

impl<'a> App<'a> {
    pub fn new(holiday_data: &'a HolidayData, settings: AppSettings, today: NaiveDate) -> Self {
        let mut app = App {
            holiday_data,
            leave: LeaveSet::new(),
            settings,
            today,
            current_month: today.month(),
            mode: Mode::Normal,
            input_buffer: String::new(),
            range_start: None,
            status: None,
            plan: None,
        };
        app.update_plan();
        app
    }

    fn update_plan(&mut self) {
        match calculate_year_plan(
            PLAN_YEAR,
            &self.settings,
            self.holiday_data,
            &self.leave,
            Some(self.current_month),
        ) {
            Ok(plan) => self.plan = Some(plan),
            Err(e) => {
                warn!("plan evaluation failed: {e:#}");
                self.plan = None;
                self.status = Some((format!("Error: {e}"), Color::Red));
            }
        }
    }

    fn start_input(&mut self, mode: Mode, prefill: String) {
        self.mode = mode;
        self.input_buffer = prefill;
    }

    fn cancel_input(&mut self) {
        self.mode = Mode::Normal;
        self.input_buffer.clear();
        self.range_start = None;
    }

    fn parse_date_input(&mut self) -> Option<NaiveDate> {
        match NaiveDate::parse_from_str(self.input_buffer.trim(), DATE_FORMAT) {
            Ok(d) => Some(d),
            Err(_) => {
                self.status = Some(("Invalid date, use YYYY-MM-DD".to_string(), Color::Red));
                None
            }
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.status = None;

        if self.mode == Mode::Normal {
            match code {
                KeyCode::Char('l') => {
                    let today = self.today.format(DATE_FORMAT).to_string();
                    self.start_input(Mode::AddDate, today);
                }
                KeyCode::Char('r') => {
                    let today = self.today.format(DATE_FORMAT).to_string();
                    self.start_input(Mode::RangeStart, today);
                }
                KeyCode::Char('p') => {
                    let current = self.settings.target_percent.to_string();
                    self.start_input(Mode::EditPercent, current);
                }
                KeyCode::Char('o') => {
                    let current = self.settings.days_present.to_string();
                    self.start_input(Mode::EditPresent, current);
                }
                KeyCode::Char('q') => return true,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
                _ => {}
            }
            return false;
        }

        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Esc => self.cancel_input(),
            KeyCode::Enter => self.submit_input(),
            _ => {}
        }
        false
    }

    fn submit_input(&mut self) {
        match self.mode {
            Mode::Normal => {}
            Mode::AddDate => {
                let Some(date) = self.parse_date_input() else {
                    return;
                };
                let msg = if self.leave.add_date(date) {
                    format!("Added single leave date: {}", date)
                } else {
                    format!("{} is already a leave date", date)
                };
                self.status = Some((msg, Color::Green));
                self.cancel_input();
                self.update_plan();
            }
            Mode::RangeStart => {
                let Some(start) = self.parse_date_input() else {
                    return;
                };
                self.range_start = Some(start);
                self.mode = Mode::RangeEnd;
            }
            Mode::RangeEnd => {
                let Some(end) = self.parse_date_input() else {
                    return;
                };
                let Some(start) = self.range_start else {
                    self.cancel_input();
                    return;
                };
                match self.leave.add_range(start, end) {
                    Ok(added) => {
                        info!(%start, %end, added, "leave range added in session");
                        self.status = Some((
                            format!("Added leave range: {} to {} ({} new day(s))", start, end, added),
                            Color::Green,
                        ));
                        self.update_plan();
                    }
                    Err(e) => {
                        self.status = Some((format!("Rejected: {}", e), Color::Red));
                    }
                }
                self.cancel_input();
            }
            Mode::EditPercent => match parse_percent(&self.input_buffer) {
                Ok(value) => {
                    self.settings.target_percent = value;
                    self.cancel_input();
                    self.update_plan();
                }
                Err(msg) => self.status = Some((msg, Color::Red)),
            },
            Mode::EditPresent => match self.input_buffer.trim().parse::<u32>() {
                Ok(value) => {
                    self.settings.days_present = value;
                    self.cancel_input();
                    self.update_plan();
                }
                Err(_) => {
                    self.status = Some((
                        "Office days must be a whole number, 0 or more".to_string(),
                        Color::Red,
                    ))
                }
            },
        }
    }

    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(10), // summary
                Constraint::Min(16),    // monthly tables + leave list
                Constraint::Length(4),  // status + input/help
            ])
            .split(f.area());

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(45),
                Constraint::Percentage(25),
            ])
            .split(chunks[1]);

        match &self.plan {
            Some(plan) => {
                self.render_summary(f, chunks[0], plan);
                self.render_full_year(f, middle[0], plan);
                self.render_remaining(f, middle[1], plan);
            }
            None => {
                let p = Paragraph::new("No plan available.");
                f.render_widget(p, chunks[0]);
            }
        }
        self.render_leave(f, middle[2]);
        self.render_footer(f, chunks[2]);
    }

    fn render_summary(&self, f: &mut Frame, area: Rect, plan: &YearPlan) {
        let rows = vec![
            section_header("Summary"),
            data_row("Total weekdays (excluding weekends)", plain(plan.total_weekdays.to_string())),
            data_row("Total weekdays (excluding holidays)", plain(plan.total_after_holidays.to_string())),
            data_row(
                format!("Work-from-office target ({}%)", plan.target_percent),
                plain(plan.office_target.to_string()),
            ),
            data_row("Office days already present", plain(plan.days_present.to_string())),
            data_row(
                "Days still needed to cover",
                if plan.days_still_needed == 0 {
                    colored("0", Color::Green)
                } else {
                    plain(plan.days_still_needed.to_string())
                },
            ),
            data_row("Average days/month to reach goal", plain(plan.monthly_target.to_string())),
        ];

        let table = Table::new(rows, [Constraint::Length(40), Constraint::Length(10)]).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Work From Office Planner {} ", plan.year)),
        );
        f.render_widget(table, area);
    }

    fn render_full_year(&self, f: &mut Frame, area: Rect, plan: &YearPlan) {
        let header_style = Style::default().add_modifier(Modifier::BOLD);
        let header = Row::new(vec![
            Cell::from("Month").style(header_style),
            Cell::from("Days").style(header_style),
        ]);
        let mut rows: Vec<Row> = plan
            .monthly_availability
            .iter()
            .map(|m| {
                let style = if m.month == plan.current_month {
                    Style::default().add_modifier(Modifier::BOLD)
                } else if m.month < plan.current_month {
                    Style::default().add_modifier(Modifier::DIM)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(m.name),
                    Cell::from(m.available_days.to_string()),
                ])
                .style(style)
            })
            .collect();
        rows.push(
            Row::new(vec![
                Cell::from("Total"),
                Cell::from(plan.total_available.to_string()),
            ])
            .style(Style::default().bg(SECTION_BG).add_modifier(Modifier::BOLD)),
        );

        let table = Table::new(rows, [Constraint::Length(12), Constraint::Length(6)])
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Available (holidays + leave) "),
            );
        f.render_widget(table, area);
    }

    fn render_remaining(&self, f: &mut Frame, area: Rect, plan: &YearPlan) {
        let header_style = Style::default().add_modifier(Modifier::BOLD);
        let header = Row::new(vec![
            Cell::from("Month").style(header_style),
            Cell::from("Office days").style(header_style),
            Cell::from("Must do").style(header_style),
            Cell::from("From home").style(header_style),
        ]);
        let rows: Vec<Row> = plan
            .remaining_months
            .iter()
            .map(|m| {
                let wfh = if m.work_from_home < 0 {
                    colored(m.work_from_home.to_string(), Color::Red)
                } else {
                    plain(m.work_from_home.to_string())
                };
                Row::new(vec![
                    Cell::from(m.name),
                    Cell::from(m.available_days.to_string()),
                    Cell::from(m.must_do.to_string()),
                    wfh,
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Remaining months ({} to go) ", plan.total_days_to_go)),
        );
        f.render_widget(table, area);
    }

    fn render_leave(&self, f: &mut Frame, area: Rect) {
        let rows: Vec<Row> = self
            .leave
            .sorted_dates()
            .into_iter()
            .map(|d| {
                // Dimmed when the day off costs no working day
                let style = if self.holiday_data.get(d).is_some() || !is_workday(d) {
                    Style::default().add_modifier(Modifier::DIM)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(d.format(DATE_FORMAT).to_string()),
                    Cell::from(d.format("%a").to_string()),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(rows, [Constraint::Length(12), Constraint::Length(4)]).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Leave ({}) ", self.leave.len())),
        );
        f.render_widget(table, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        if let Some((msg, color)) = &self.status {
            lines.push(Line::from(Span::styled(msg.clone(), Style::default().fg(*color))));
        } else {
            lines.push(Line::from(""));
        }
        if self.mode == Mode::Normal {
            lines.push(Line::from(Span::styled(
                "l=add leave date  r=add leave range  p=target %  o=days present  q=quit",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            let mut prompt = self.mode.prompt().to_string();
            if let (Mode::RangeEnd, Some(start)) = (&self.mode, self.range_start) {
                prompt = format!("{} [from {}]", prompt, start);
            }
            lines.push(Line::from(format!("{}: {}_", prompt, self.input_buffer)));
            lines.push(Line::from(Span::styled(
                "Enter=confirm  Esc=cancel",
                Style::default().fg(Color::DarkGray),
            )));
        }
        let p = Paragraph::new(lines).block(Block::default().borders(Borders::NONE));
        f.render_widget(p, area);
    }
}

// ── Row construction helpers ──────────────────────────────────────────────────

/// A section header row with a dark background and bold text.
fn section_header(title: &str) -> Row<'static> {
    Row::new(vec![
        Cell::from(title.to_string())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Cell::from(""),
    ])
    .style(Style::default().bg(SECTION_BG))
}

/// A data row with a two-space indent on the metric label.
fn data_row(metric: impl Into<String>, value: Cell<'static>) -> Row<'static> {
    Row::new(vec![Cell::from(format!("  {}", metric.into())), value])
}

fn plain(s: impl Into<String>) -> Cell<'static> {
    Cell::from(s.into())
}

fn colored(s: impl Into<String>, color: Color) -> Cell<'static> {
    Cell::from(s.into()).style(Style::default().fg(color))
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            if let CEvent::Key(key) = event::read()? {
                if app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }
    Ok(())
}
