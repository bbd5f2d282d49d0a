/*
    DayWheel

    Copyright 2024-2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/

//! The `daywheel` command line tool renders schedules stored as JSON activity lists.

mod args;
mod config;
mod input;
mod render;
mod slices;

use crate::args::{command_parser, Command};
use bpaf::Parser;

fn main() {
    env_logger::init();

    let app_params = command_parser().to_options().run();

    log::debug!("Running command: {}", app_params.command);
    let result = match &app_params.command {
        Command::Version => {
            println!("daywheel v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Render(params) => render::run(&app_params.global, params),
        Command::Slices(params) => slices::run(&app_params.global, params),
    };

    if let Err(e) = result {
        eprintln!("Command '{}' failed: {}", app_params.command, e);
        for cause in e.chain().skip(1) {
            eprintln!("Caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
