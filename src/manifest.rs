// src/manifest.rs

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};

use crate::record::LicenseRecord;

/// The flat snapshot written at the end of a run. Regenerated from scratch
/// each time; there is no cross-run state or format versioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Lowercase spdx ids, in scraped-index order. Quick-lookup key list.
    pub ids: Vec<String>,
    pub licenses: Vec<LicenseRecord>,
}

impl Manifest {
    pub fn from_records(records: Vec<LicenseRecord>) -> Self {
        let ids = records.iter().map(|r| r.spdx_id_lower.clone()).collect();
        Self { ids, licenses: records }
    }

    pub fn write(&self, path: &Path) -> io::Result<()> {
        let file = fs::File::create(path)?;
        let writer = io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn read(path: &Path) -> io::Result<Self> {
        let file = fs::File::open(path)?;
        let reader = io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
