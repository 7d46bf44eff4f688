#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use rshiftgrid::core::{RateCalendar, ShiftSession};
use rshiftgrid::models::{BaseShiftRecord, CellKey, ShiftStatus, StaffMember};
use rshiftgrid::utils::date::all_days_of_month;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsg() -> Command {
    cargo_bin_cmd!("rshiftgrid")
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn key(staff: &str, date: &str) -> CellKey {
    CellKey::new(staff, d(date))
}

pub fn fixed_clock() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 1, 10, 9, 30, 0)
        .single()
        .expect("unambiguous local time")
}

/// A, B closers; C, D girls.
pub fn roster() -> Vec<StaffMember> {
    let mut c = StaffMember::new("C", "girl", 8000, 11000);
    c.name = Some("Chiara".to_string());
    vec![
        StaffMember::new("A", "closer", 10000, 15000),
        StaffMember::new("B", "closer", 9000, 12000),
        c,
        StaffMember::new("D", "girl", 8000, 11000),
    ]
}

pub fn record(staff: &str, date: &str, status: ShiftStatus) -> BaseShiftRecord {
    BaseShiftRecord::new(staff, d(date), status)
}

pub fn january() -> Vec<NaiveDate> {
    all_days_of_month(2025, 1)
}

pub fn session_with(records: Vec<BaseShiftRecord>) -> ShiftSession {
    ShiftSession::new(records, roster(), january(), RateCalendar::default())
        .expect("valid session")
        .with_clock(fixed_clock)
}

/// Write a fixture file inside the system temp dir and return its path.
pub fn fixture(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rshiftgrid_{name}.{ext}"));
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Temp output path, removed if left over from a previous run.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rshiftgrid_{name}_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub const STAFF_CSV: &str = "\
id,name,role,weekday_rate,holiday_rate,company
A,Alice,closer,10000,15000,Acme
B,,closer,9000,12000,Acme
C,Chiara,girl,8000,11000,Beta
";

pub const RECORDS_CSV: &str = "\
staff_id,date,status,location,rate,comment
A,2025-01-15,undecided,,,
B,2025-01-15,confirmed,Shibuya,,
C,2025-01-15,confirmed,,,first day
C,2025-01-18,declined,,,
";

pub const EDITS_YAML: &str = "\
- event: status_changed
  staff_id: A
  date: 2025-01-15
  status: confirmed
  actor: manager
- event: rate_changed
  staff_id: A
  date: 2025-01-15
  rate: 10000
- event: rate_changed
  staff_id: A
  date: 2025-01-15
  rate: 0
";
