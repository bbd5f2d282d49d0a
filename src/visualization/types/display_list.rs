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

//! A [VizScheduleDisplayList] is a list of [VizElement] objects to be rendered, grouped by the
//! time slice that produced them.

use crate::{
    activity::Minutes,
    visualization::{types::shapes::VizElement, RenderWinding},
};

/// A [VizScheduleDisplayList] is a list of [VizElement] objects to be rendered.
/// Elements are grouped per time slice, and within a slice are ordered from the inner boundary
/// outward.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VizScheduleDisplayList {
    pub winding: RenderWinding,
    /// The `(start, end)` minutes of each slice, parallel to `slices`.
    pub spans:  Vec<(Minutes, Minutes)>,
    pub slices: Vec<Vec<VizElement>>,
}

impl VizScheduleDisplayList {
    pub fn new(winding: RenderWinding, spans: Vec<(Minutes, Minutes)>) -> VizScheduleDisplayList {
        let slices = vec![Vec::new(); spans.len()];
        VizScheduleDisplayList {
            winding,
            spans,
            slices,
        }
    }

    /// Push a [VizElement] onto the display list at the specified slice.
    /// If the slice does not exist, nothing will happen.
    pub fn push(&mut self, s: usize, element: VizElement) {
        if let Some(slice) = self.slices.get_mut(s) {
            slice.push(element);
        }
    }

    /// Return the total number of [VizElement]s in the display list.
    pub fn len(&self) -> usize {
        self.slices.iter().map(|s| s.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.iter().all(|s| s.is_empty())
    }

    /// Return an Iterator that yields all the [VizElement]s in the display list,
    /// in order, by slice.
    pub fn iter(&self) -> VizDisplayListIter<'_> {
        let mut outer = self.slices.iter();
        // Initialize inner iterator with the first slice
        let inner = outer.next().map(|v| v.iter());
        VizDisplayListIter { outer, inner }
    }

    /// Return a slice of the items in the display list at the specified slice index.
    pub fn items(&self, s: usize) -> Option<&[VizElement]> {
        self.slices.get(s).map(|v| v.as_slice())
    }
}

// Iterator struct
pub struct VizDisplayListIter<'a> {
    outer: std::slice::Iter<'a, Vec<VizElement>>,
    inner: Option<std::slice::Iter<'a, VizElement>>,
}

impl<'a> Iterator for VizDisplayListIter<'a> {
    type Item = &'a VizElement;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(next_item) = inner.next() {
                    return Some(next_item);
                }
            }

            // Move to the next slice if the current one is exhausted
            self.inner = self.outer.next().map(|v| v.iter());

            if self.inner.is_none() {
                return None;
            }
        }
    }
}

impl<'a> IntoIterator for &'a VizScheduleDisplayList {
    type Item = &'a VizElement;
    type IntoIter = VizDisplayListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
