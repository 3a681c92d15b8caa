/*
This file is part of the PostGIS Mapping Layer
Copyright (C) 2022 Novel-T

The PostGIS Mapping Layer is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/
use std::path::PathBuf;

use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use structopt::StructOpt;

use crate::cmd_eval::{eval, EvalArgs};
use crate::cmd_list::{list_mappings, ListArgs};
use crate::cmd_render::{render, RenderArgs};
use crate::cmd_version::print_version;

mod cmd_eval;
mod cmd_list;
mod cmd_render;
mod cmd_version;
mod literal;

#[derive(StructOpt)]
struct Cli {

    #[structopt(long, default_value = "Warn")]
    log_level: LevelFilter,

    #[structopt(long, parse(from_os_str), help="TOML file with a connection_string, overridden by POSTGIS_CONN_STRING")]
    config: Option<PathBuf>,

    #[structopt(subcommand)]
    cmd: Command
}

#[derive(StructOpt)]
enum Command {
    #[structopt(help="Prints the function mapping table")]
    List(ListArgs),

    #[structopt(help="Translates one call to SQL without touching the database")]
    Render(RenderArgs),

    #[structopt(help="Evaluates a text constructor on the server and prints the EWKT result")]
    Eval(EvalArgs),

    #[structopt(help="Prints the PostGIS version of the server")]
    Version,
}

fn run() -> Result<()> {
    let args = Cli::from_args();

    SimpleLogger::new().with_level(args.log_level).init()?;

    match &args.cmd {
        Command::List(r) => {
            list_mappings(r)?;
        },
        Command::Render(r) => {
            render(r)?;
        },
        Command::Eval(r) => {
            eval(args.config.as_deref(), r)?;
        },
        Command::Version => {
            print_version(args.config.as_deref())?;
        },
    }

    Ok(())
}

fn main() {
    run().unwrap();
}
