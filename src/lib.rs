pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod loader;
pub mod services;
pub mod stats;
pub mod views;

#[cfg(test)]
mod testing;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use serde::Serialize;
use std::fmt::Display;
use std::io;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::settings::AppConfig;
use crate::services::ViewService;
use crate::stats::Period;
use crate::views::{render, OutputFormat};

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Flags shared by every view command
#[derive(Debug, Clone)]
pub struct Options {
    pub data: Option<PathBuf>,
    pub today: NaiveDate,
    pub format: OutputFormat,
}

impl From<&Cli> for Options {
    fn from(cli: &Cli) -> Self {
        Self {
            data: cli.data.clone(),
            today: cli.today.unwrap_or_else(|| Local::now().date_naive()),
            format: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}

pub fn handle_home(options: &Options) -> Result<()> {
    let service = open_service(options)?;
    print_view(&service.home(), options.format)
}

pub fn handle_leaderboard(options: &Options, period: Period, limit: Option<usize>) -> Result<()> {
    let service = open_service(options)?;
    print_view(&service.leaderboard(period, limit), options.format)
}

pub fn handle_players(options: &Options, period: Period) -> Result<()> {
    let service = open_service(options)?;
    print_view(&service.players(period), options.format)
}

pub fn handle_player(options: &Options, id: &str) -> Result<()> {
    let service = open_service(options)?;
    print_view(&service.player(id)?, options.format)
}

pub fn handle_records(options: &Options) -> Result<()> {
    let service = open_service(options)?;
    print_view(&service.records(), options.format)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}

fn open_service(options: &Options) -> Result<ViewService> {
    let config = AppConfig::new().with_data_path(options.data.clone());
    ViewService::load(config, options.today)
}

fn print_view<V: Serialize + Display>(view: &V, format: OutputFormat) -> Result<()> {
    let output = render(view, format)?;
    println!("{}", output.trim_end());
    Ok(())
}
