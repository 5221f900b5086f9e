//! Tabular projection of candidates.
//!
//! The selection table is a fixed, ordered list of [`Column`]s. Each column
//! pulls one [`CellValue`] out of a [`Candidate`]; only the `Create` column
//! writes back.

use crate::candidate::Candidate;
use crate::resource::ResourceFormat;

/// Leading icon cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// File lives in the context file's own package
    Package,
    /// Any other file, shown by format
    Format(ResourceFormat),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Marker(Marker),
    Text(String),
    Flag(bool),
}

/// One table column
pub struct Column {
    pub label: &'static str,
    /// Preferred width in pixels, `None` to fill the remaining space
    pub width: Option<u16>,
    extract: fn(&Candidate) -> CellValue,
    update: Option<fn(&mut Candidate, bool)>,
}

impl Column {
    pub fn value(&self, candidate: &Candidate) -> CellValue {
        (self.extract)(candidate)
    }

    pub fn is_editable(&self) -> bool {
        self.update.is_some()
    }

    /// Write `value` back through the column. Returns `false` for read-only columns.
    pub fn set(&self, candidate: &mut Candidate, value: bool) -> bool {
        match self.update {
            Some(update) => {
                update(candidate, value);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("label", &self.label)
            .field("width", &self.width)
            .field("editable", &self.is_editable())
            .finish()
    }
}

fn marker(candidate: &Candidate) -> CellValue {
    if candidate.is_primary_package() {
        CellValue::Marker(Marker::Package)
    } else {
        CellValue::Marker(Marker::Format(candidate.file().format()))
    }
}

fn path(candidate: &Candidate) -> CellValue {
    CellValue::Text(candidate.display_path())
}

fn name(candidate: &Candidate) -> CellValue {
    CellValue::Text(candidate.file().file_name())
}

fn create(candidate: &Candidate) -> CellValue {
    CellValue::Flag(candidate.is_included())
}

fn set_create(candidate: &mut Candidate, value: bool) {
    candidate.set_included(value);
}

/// Index of the editable include column
pub const CREATE_COLUMN: usize = 3;

pub static COLUMNS: [Column; 4] = [
    Column {
        label: "",
        width: Some(32),
        extract: marker,
        update: None,
    },
    Column {
        label: "Path",
        width: None,
        extract: path,
        update: None,
    },
    Column {
        label: "Name",
        width: Some(190),
        extract: name,
        update: None,
    },
    Column {
        label: "Create",
        width: Some(50),
        extract: create,
        update: Some(set_create),
    },
];

/// Project every candidate into a row of cells, one per column
pub fn project(candidates: &[Candidate]) -> Vec<Vec<CellValue>> {
    candidates
        .iter()
        .map(|c| COLUMNS.iter().map(|col| col.value(c)).collect())
        .collect()
}
