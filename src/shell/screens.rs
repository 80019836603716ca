use std::fmt::Write as _;
use std::fs::File;
use std::path::Path;

use async_trait::async_trait;
use chrono::Local;

use super::{Action, Screen, ScreenId, ShellContext};
use crate::engine::{self, Outcome};
use crate::error::{AppError, Result};
use crate::{report, roster, sync};

fn time_col(t: Option<chrono::NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// First-time setup. The shell starts here whenever no school is registered.
pub struct SettingsPage;

#[async_trait]
impl Screen for SettingsPage {
    async fn refresh(&self, _ctx: &ShellContext) -> Result<String> {
        Ok("=== SCHOOL REGISTRATION ===\n\
            Enter: <school id>,<school name>"
            .to_string())
    }

    async fn handle(&mut self, ctx: &ShellContext, line: &str) -> Result<Action> {
        let Some((id, name)) = line.split_once(',') else {
            return Ok(Action::Notice(
                "Expected: <school id>,<school name>".to_string(),
            ));
        };
        let (id, name) = (id.trim(), name.trim());
        if id.is_empty() || name.is_empty() {
            return Ok(Action::Notice(
                "Both school id and name are required".to_string(),
            ));
        }

        ctx.store.register_school(id, name).await?;
        Ok(Action::Switch {
            to: ScreenId::Dashboard,
            notice: Some("School Registered Successfully!".to_string()),
        })
    }
}

pub struct Dashboard;

#[async_trait]
impl Screen for Dashboard {
    async fn refresh(&self, ctx: &ShellContext) -> Result<String> {
        let title = match ctx.store.school().await? {
            Some(school) => format!("{} NODE", school.name.to_uppercase()),
            None => "ADMIN DASHBOARD".to_string(),
        };
        Ok(format!(
            "=== {title} ===\n\
             [1] Clock station\n\
             [2] Staff management\n\
             [3] Attendance history\n\
             [4] Reports & sync\n\
             [s] Station setup\n\
             [q] Quit"
        ))
    }

    async fn handle(&mut self, _ctx: &ShellContext, line: &str) -> Result<Action> {
        let to = match line {
            "1" => ScreenId::ClockStation,
            "2" => ScreenId::StaffManager,
            "3" => ScreenId::History,
            "4" => ScreenId::Reports,
            "s" => ScreenId::Settings,
            "q" => return Ok(Action::Quit),
            _ => return Ok(Action::Stay),
        };
        Ok(Action::Switch { to, notice: None })
    }
}

/// The kiosk. Any line that is not a command is treated as a staff id.
pub struct ClockStation;

#[async_trait]
impl Screen for ClockStation {
    async fn refresh(&self, _ctx: &ShellContext) -> Result<String> {
        Ok("=== STAFF ID ENTRY ===\n\
            Scan or type your staff id ([b] dashboard)"
            .to_string())
    }

    async fn handle(&mut self, ctx: &ShellContext, line: &str) -> Result<Action> {
        if line == "b" {
            return Ok(Action::Switch {
                to: ScreenId::Dashboard,
                notice: None,
            });
        }

        let now = Local::now();
        let outcome = engine::submit(&ctx.store, line, now.date_naive(), now.time()).await?;

        let msg = match outcome {
            Outcome::ClockedIn(name) => format!("Welcome {name}! Clocked In."),
            Outcome::ClockedOut(name) => format!("Goodbye {name}! Clocked Out."),
            Outcome::AlreadyComplete => "You have already clocked out for today.".to_string(),
            Outcome::Denied => "ID not found or not approved by Admin.".to_string(),
        };
        Ok(Action::Notice(msg))
    }
}

pub struct StaffManager;

#[async_trait]
impl Screen for StaffManager {
    async fn refresh(&self, ctx: &ShellContext) -> Result<String> {
        let mut out = String::from("=== STAFF MANAGEMENT ===\n");
        let _ = writeln!(out, "{:<12} {:<24} {:<16} STATUS", "ID", "NAME", "DEPT");
        for member in ctx.store.staff_list().await? {
            let status = if member.is_approved {
                "APPROVED"
            } else {
                "PENDING"
            };
            let _ = writeln!(
                out,
                "{:<12} {:<24} {:<16} {status}",
                member.id, member.name, member.dept
            );
        }
        out.push_str("Commands: import <csv path> | approve <id> | [b] dashboard");
        Ok(out)
    }

    async fn handle(&mut self, ctx: &ShellContext, line: &str) -> Result<Action> {
        if line == "b" {
            return Ok(Action::Switch {
                to: ScreenId::Dashboard,
                notice: None,
            });
        }

        if let Some(path) = line.strip_prefix("import ") {
            let path = path.trim();
            let file = File::open(path)
                .map_err(|e| AppError::Parse(format!("cannot open '{path}': {e}")))?;
            let count = roster::import_roster(&ctx.store, file).await?;
            return Ok(Action::Notice(format!("Imported {count} staff records.")));
        }

        if let Some(id) = line.strip_prefix("approve ") {
            let id = id.trim();
            return match roster::approve(&ctx.store, id).await {
                Ok(()) => Ok(Action::Notice(format!("Staff '{id}' approved."))),
                // A missing id is a user notice, not a failure of the station.
                Err(AppError::NotFound(what)) => Ok(Action::Notice(format!("{what}."))),
                Err(e) => Err(e),
            };
        }

        Ok(Action::Stay)
    }
}

pub struct HistoryPage;

#[async_trait]
impl Screen for HistoryPage {
    async fn refresh(&self, ctx: &ShellContext) -> Result<String> {
        let mut out = String::from("=== ATTENDANCE HISTORY ===\n");
        let _ = writeln!(out, "{:<12} {:<24} {:<10} {:<10}", "DATE", "NAME", "IN", "OUT");
        for entry in ctx.store.history(ctx.config.history_limit).await? {
            let _ = writeln!(
                out,
                "{:<12} {:<24} {:<10} {:<10}",
                entry.date.format("%Y-%m-%d"),
                entry.name,
                time_col(entry.clock_in),
                time_col(entry.clock_out)
            );
        }
        out.push_str("[b] dashboard");
        Ok(out)
    }

    async fn handle(&mut self, _ctx: &ShellContext, line: &str) -> Result<Action> {
        if line == "b" {
            return Ok(Action::Switch {
                to: ScreenId::Dashboard,
                notice: None,
            });
        }
        Ok(Action::Stay)
    }
}

pub struct ReportsPage;

#[async_trait]
impl Screen for ReportsPage {
    async fn refresh(&self, _ctx: &ShellContext) -> Result<String> {
        Ok("=== REPORTS & SYNC ===\n\
            Commands: export | sync | [b] dashboard"
            .to_string())
    }

    async fn handle(&mut self, ctx: &ShellContext, line: &str) -> Result<Action> {
        match line {
            "b" => Ok(Action::Switch {
                to: ScreenId::Dashboard,
                notice: None,
            }),
            "export" => {
                let path =
                    Path::new(&ctx.config.export_dir).join(report::suggested_filename());
                match report::export_attendance(&ctx.store, &path).await {
                    Ok(rows) => Ok(Action::Notice(format!(
                        "Excel report saved: {} ({rows} rows)",
                        path.display()
                    ))),
                    // The one locally-recovered failure: destination locked.
                    Err(AppError::Write(_)) => {
                        Ok(Action::Notice("Close the Excel file first!".to_string()))
                    }
                    Err(e) => Err(e),
                }
            }
            "sync" => {
                let msg = sync::sync_to_cloud(&ctx.store, &ctx.config.sync_url).await?;
                Ok(Action::Notice(msg))
            }
            _ => Ok(Action::Stay),
        }
    }
}
