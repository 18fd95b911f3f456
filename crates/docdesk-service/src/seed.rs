//! Built-in seed data set.
//!
//! The same rows the backend's `documents` table is bulk-loaded with, as
//! `(name, kind, createdBy, createdDate, size)` tuples.

use docdesk_core::types::RecordId;
use docdesk_entity::{Record, RecordKind};

use docdesk_entity::RecordKind::{File, Folder};

/// One bulk-load row.
pub type SeedEntry = (&'static str, RecordKind, &'static str, &'static str, &'static str);

/// The seed rows, in insertion order.
pub const SEED_ENTRIES: [SeedEntry; 30] = [
    ("Appointment resolutions", Folder, "John Green", "15 Jan 2025", "-"),
    ("Policy approvals", Folder, "John Green", "10 Jan 2025", "-"),
    ("2025_01_15_Director_Appointment_Resolution.pdf", File, "John Green", "15 Jan 2025", "3.3 KB"),
    ("2024_12_10_Dividend_Declaration_Resolution.docx", File, "John Green", "10 Dec 2024", "4.4 KB"),
    ("2023_08_05_Investment_Policy_Approval.pdf", File, "John Green", "05 Aug 2023", "2.9 KB"),
    ("Meeting Minutes", Folder, "John Green", "20 Nov 2024", "-"),
    ("2024_09_01_Quarterly_Review_Minutes.pdf", File, "User 7", "01 Sep 2024", "4.1 KB"),
    ("Strategy Planning", Folder, "User 8", "10 Oct 2024", "-"),
    ("2024_10_15_Strategy_Plan_Draft.docx", File, "User 9", "15 Oct 2024", "3.5 KB"),
    ("Audit Reports", Folder, "User 10", "02 Mar 2024", "-"),
    ("2024_03_02_Internal_Audit_Summary.pdf", File, "User 11", "02 Mar 2024", "4.0 KB"),
    ("Employee Docs", Folder, "User 12", "12 Jul 2024", "-"),
    ("2024_07_12_Employee_Handbook_Update.docx", File, "User 13", "12 Jul 2024", "3.8 KB"),
    ("Legal Files", Folder, "User 14", "08 Feb 2023", "-"),
    ("2023_02_08_Legal_Compliance_Form.pdf", File, "User 15", "08 Feb 2023", "2.7 KB"),
    ("2023_03_12_Tax_Compliance_Checklist.docx", File, "User 16", "12 Mar 2023", "3.6 KB"),
    ("Finance", Folder, "User 17", "01 Apr 2024", "-"),
    ("2024_04_01_Annual_Financial_Report.pdf", File, "User 18", "01 Apr 2024", "5.1 KB"),
    ("2023_05_05_Expense_Report_Q2.xlsx", File, "User 19", "05 May 2023", "3.2 KB"),
    ("HR Records", Folder, "User 20", "01 Jun 2023", "-"),
    ("2023_06_01_New_Hires_Overview.docx", File, "User 21", "01 Jun 2023", "3.9 KB"),
    ("2023_07_14_Training_Schedule.pdf", File, "User 22", "14 Jul 2023", "3.5 KB"),
    ("Board Meetings", Folder, "User 23", "25 Dec 2023", "-"),
    ("2023_12_25_Board_Meeting_Notes.pdf", File, "User 24", "25 Dec 2023", "4.2 KB"),
    ("Product Planning", Folder, "User 25", "18 Aug 2024", "-"),
    ("2024_08_18_Product_Launch_Timeline.docx", File, "User 26", "18 Aug 2024", "3.6 KB"),
    ("2024_11_30_Design_Documentation.pdf", File, "User 27", "30 Nov 2024", "4.0 KB"),
    ("2023_09_10_Marketing_Plan.pdf", File, "User 28", "10 Sep 2023", "2.8 KB"),
    ("2023_10_22_Campaign_Results.xlsx", File, "User 29", "22 Oct 2023", "3.3 KB"),
    ("2023_01_03_Year_Start_Notes.docx", File, "User 30", "03 Jan 2023", "3.1 KB"),
];

/// The seed rows as records, numbered from 1 like an auto-increment key.
pub fn seed_records() -> Vec<Record> {
    (1_i64..)
        .zip(SEED_ENTRIES.iter())
        .map(|(id, &(name, kind, created_by, date, size))| Record {
            id: RecordId::new(id),
            name: name.to_string(),
            kind,
            created_by: created_by.to_string(),
            created_date: date.to_string(),
            size: size.to_string(),
        })
        .collect()
}
