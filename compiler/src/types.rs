use brine_enumer_schema::Member;
use serde::Serialize;
use std::ops::Range;

/// Byte bounds of one member's display string inside a table's `repr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub start: usize,
    pub end:   usize,
}

impl Offset {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A maximal stretch of members whose values increase by exactly one.
/// Borrows its members from the declaration-ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub members: &'a [Member],
}

impl<'a> Run<'a> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn first_value(&self) -> Option<i64> {
        self.members.first().map(|m| m.value)
    }

    pub fn last_value(&self) -> Option<i64> {
        self.members.last().map(|m| m.value)
    }
}

/// Table strategy for one type, picked from its run count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Zero or one run: one table, no run suffix.
    Single,
    /// Several runs, at most `runs_threshold`: one suffixed table per run.
    PerRun,
    /// More than `runs_threshold` runs: one flat string, no index arrays.
    Flat,
}

impl Layout {
    pub fn choose(runs: usize, runs_threshold: usize) -> Layout {
        if runs <= 1 {
            Layout::Single
        } else if runs <= runs_threshold {
            Layout::PerRun
        } else {
            Layout::Flat
        }
    }

    /// Whether tables carry a dense offset index array.
    pub fn is_indexed(self) -> bool {
        !matches!(self, Layout::Flat)
    }
}

/// Concatenated display strings of a group of members, with their offsets
/// and the members themselves in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTable<'a> {
    pub run_id:  Option<usize>,
    pub repr:    String,
    pub offsets: Vec<Offset>,
    pub values:  Vec<&'a Member>,
}

impl<'a> StringTable<'a> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The display string of the `i`th member, sliced out of `repr`.
    pub fn slice(&self, i: usize) -> &str {
        &self.repr[self.offsets[i].range()]
    }

    pub fn entries(&self) -> impl Iterator<Item = (Offset, &'a Member)> + '_ {
        self.offsets.iter().copied().zip(self.values.iter().copied())
    }

    pub fn base_value(&self) -> Option<i64> {
        self.values.first().map(|m| m.value)
    }
}
