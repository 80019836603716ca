mod screens;

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::error::Result;
use crate::store::Store;

/// Identifier of each screen. Dispatch goes through an explicit registry
/// keyed by this enum instead of stringly-typed frame names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Settings,
    Dashboard,
    ClockStation,
    StaffManager,
    History,
    Reports,
}

/// What the shell does after a screen handles one line of input.
pub enum Action {
    Stay,
    /// Show a message to the operator, then redisplay the screen.
    Notice(String),
    Switch {
        to: ScreenId,
        notice: Option<String>,
    },
    Quit,
}

pub struct ShellContext {
    pub store: Store,
    pub config: Config,
}

/// A screen renders itself from current data and reacts to operator input.
/// Every screen re-queries on display, so lists are never stale.
#[async_trait]
pub trait Screen: Send {
    async fn refresh(&self, ctx: &ShellContext) -> Result<String>;
    async fn handle(&mut self, ctx: &ShellContext, line: &str) -> Result<Action>;
}

/// Line-oriented presentation shell: one operator, one screen at a time,
/// each command a single blocking round trip to the store.
pub struct Shell {
    ctx: ShellContext,
    registry: HashMap<ScreenId, Box<dyn Screen>>,
    current: ScreenId,
}

impl Shell {
    pub fn new(store: Store, config: Config, start: ScreenId) -> Self {
        let mut registry: HashMap<ScreenId, Box<dyn Screen>> = HashMap::new();
        registry.insert(ScreenId::Settings, Box::new(screens::SettingsPage));
        registry.insert(ScreenId::Dashboard, Box::new(screens::Dashboard));
        registry.insert(ScreenId::ClockStation, Box::new(screens::ClockStation));
        registry.insert(ScreenId::StaffManager, Box::new(screens::StaffManager));
        registry.insert(ScreenId::History, Box::new(screens::HistoryPage));
        registry.insert(ScreenId::Reports, Box::new(screens::ReportsPage));

        Self {
            ctx: ShellContext { store, config },
            registry,
            current: start,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        self.show().await;

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        while let Some(line) = lines.next_line().await? {
            let screen = self
                .registry
                .get_mut(&self.current)
                .expect("every ScreenId is registered");

            match screen.handle(&self.ctx, line.trim()).await {
                Ok(Action::Stay) => self.show().await,
                Ok(Action::Notice(msg)) => {
                    println!("\n>> {msg}");
                    self.show().await;
                }
                Ok(Action::Switch { to, notice }) => {
                    if let Some(msg) = notice {
                        println!("\n>> {msg}");
                    }
                    self.current = to;
                    self.show().await;
                }
                Ok(Action::Quit) => break,
                // Operation abandoned; the station stays up.
                Err(e) => {
                    println!("\n!! {e}");
                    self.show().await;
                }
            }
        }

        Ok(())
    }

    async fn show(&self) {
        let screen = self
            .registry
            .get(&self.current)
            .expect("every ScreenId is registered");

        match screen.refresh(&self.ctx).await {
            Ok(view) => println!("\n{view}"),
            Err(e) => println!("\n!! {e}"),
        }
    }
}
