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
use crate::args::*;
use bpaf::{construct, long, Parser};
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub(crate) struct RenderParams {
    pub(crate) in_file:   PathBuf,
    pub(crate) out_file:  PathBuf,
    pub(crate) arc:       bool,
    pub(crate) winner:    bool,
    pub(crate) style:     Option<PathBuf>,
    pub(crate) size:      Option<u32>,
    pub(crate) no_dial:   bool,
    pub(crate) no_labels: bool,
    pub(crate) highlight: Option<u32>,
}

pub(crate) fn render_parser() -> impl Parser<RenderParams> {
    let in_file = in_file_parser();
    let out_file = out_file_parser();
    let arc = long("arc")
        .switch()
        .help("Draw bands as stroked arcs with curved labels instead of filled sectors.");
    let winner = long("winner")
        .switch()
        .help("Draw only the highest priority activity of each time slice.");
    let style = long("style")
        .argument::<PathBuf>("STYLE_FILE")
        .help("Path to a TOML style configuration file")
        .optional();
    let size = long("size")
        .argument::<u32>("SIZE")
        .help("Width and height of the SVG view box. Default is 500.")
        .guard(|&size| size >= 16, "Size must be at least 16")
        .optional();
    let no_dial = long("no-dial")
        .switch()
        .help("Omit the dial background, hour markers and hub.");
    let no_labels = long("no-labels").switch().help("Omit activity labels.");
    let highlight = long("highlight")
        .argument::<u32>("ACTIVITY_ID")
        .help("Outline the bands of the specified activity")
        .optional();

    construct!(RenderParams {
        in_file,
        out_file,
        arc,
        winner,
        style,
        size,
        no_dial,
        no_labels,
        highlight,
    })
}
