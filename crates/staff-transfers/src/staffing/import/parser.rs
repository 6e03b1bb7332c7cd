use serde::Deserialize;
use std::io::Read;

#[derive(Debug)]
pub(crate) struct RosterRecord {
    pub(crate) line: u64,
    pub(crate) name: String,
    pub(crate) department: String,
    pub(crate) salary: String,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RosterRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut raw = csv::StringRecord::new();
    let mut records = Vec::new();

    while csv_reader.read_record(&mut raw)? {
        let row: RosterRow = raw.deserialize(Some(&headers))?;
        if row.is_blank() {
            continue;
        }

        records.push(RosterRecord {
            line: raw.position().map(csv::Position::line).unwrap_or_default(),
            name: row.name,
            department: row.department,
            salary: row.salary,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Name", alias = "name", default)]
    name: String,
    #[serde(rename = "Department", alias = "department", default)]
    department: String,
    #[serde(rename = "Salary", alias = "salary", default)]
    salary: String,
}

impl RosterRow {
    fn is_blank(&self) -> bool {
        self.name.is_empty() && self.department.is_empty() && self.salary.is_empty()
    }
}
