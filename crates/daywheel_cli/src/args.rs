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

use std::{
    fmt::{Display, Formatter},
    io::Write,
    path::PathBuf,
};

use crate::{
    render::args::{render_parser, RenderParams},
    slices::args::{slices_parser, SlicesParams},
};
use bpaf::*;

#[derive(Clone, Debug)]
pub(crate) enum Command {
    Version,
    Render(RenderParams),
    Slices(SlicesParams),
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Version => write!(f, "version"),
            Command::Render(_) => write!(f, "render"),
            Command::Slices(_) => write!(f, "slices"),
        }
    }
}

#[derive(Debug)]
pub(crate) struct AppParams {
    pub global:  GlobalOptions,
    pub command: Command,
}

#[derive(Debug)]
pub struct GlobalOptions {
    pub silent: bool,
}

impl GlobalOptions {
    pub fn loud<F: FnMut()>(&self, mut f: F) {
        if !self.silent {
            f();
            // Nothing useful can be done if stdout has gone away.
            let _ = std::io::stdout().flush();
        }
    }
}

pub fn global_options_parser() -> impl Parser<GlobalOptions> {
    let silent = long("silent")
        .help("Suppress all output except required output")
        .switch(); // Switch returns a bool, true if the flag is present

    construct!(GlobalOptions { silent })
}

pub(crate) fn in_file_parser() -> impl Parser<PathBuf> {
    long("in_file")
        .short('i')
        .argument::<PathBuf>("INPUT_FILE")
        .help("Path to a JSON file containing an array of activities")
}

pub(crate) fn out_file_parser() -> impl Parser<PathBuf> {
    long("out_file")
        .short('o')
        .argument::<PathBuf>("OUTPUT_FILE")
        .help("Path to output file")
}

pub(crate) fn command_parser() -> impl Parser<AppParams> {
    let global = global_options_parser();

    let version = pure(Command::Version)
        .to_options()
        .command("version")
        .help("Display version information and exit");

    let render = construct!(Command::Render(render_parser()))
        .to_options()
        .command("render")
        .help("Render a schedule to an SVG file");

    let slices = construct!(Command::Slices(slices_parser()))
        .to_options()
        .command("slices")
        .help("List the time slices of a schedule and the activities active in each");

    let command = construct!([version, render, slices]);

    construct!(AppParams { global, command })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_options() {
        command_parser().to_options().check_invariants(false)
    }

    #[test]
    fn parse_render_command() {
        let parsed = command_parser()
            .to_options()
            .run_inner(&["render", "-i", "in.json", "-o", "out.svg", "--arc", "--size", "800"])
            .unwrap();
        match parsed.command {
            Command::Render(params) => {
                assert_eq!(params.in_file, PathBuf::from("in.json"));
                assert_eq!(params.out_file, PathBuf::from("out.svg"));
                assert!(params.arc);
                assert!(!params.winner);
                assert_eq!(params.size, Some(800));
            }
            other => panic!("expected render, got {}", other),
        }
    }

    #[test]
    fn parse_slices_command() {
        let parsed = command_parser()
            .to_options()
            .run_inner(&["--silent", "slices", "-i", "in.json", "--json"])
            .unwrap();
        assert!(parsed.global.silent);
        assert!(matches!(parsed.command, Command::Slices(SlicesParams { json: true, .. })));
    }
}
