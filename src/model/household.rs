use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of a home project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Ideating,
    Planned,
    Quoted,
    Underway,
    Delayed,
    Completed,
    Abandoned,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 7] = [
        ProjectStatus::Ideating,
        ProjectStatus::Planned,
        ProjectStatus::Quoted,
        ProjectStatus::Underway,
        ProjectStatus::Delayed,
        ProjectStatus::Completed,
        ProjectStatus::Abandoned,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Ideating => "ideating",
            ProjectStatus::Planned => "planned",
            ProjectStatus::Quoted => "quoted",
            ProjectStatus::Underway => "underway",
            ProjectStatus::Delayed => "delayed",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Abandoned => "abandoned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub kind: String,
    pub status: ProjectStatus,
    /// Amounts are whole cents
    #[serde(default)]
    pub budget: Option<i64>,
    #[serde(default)]
    pub actual: Option<i64>,
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: u64,
    pub project_id: u64,
    pub vendor_id: u64,
    pub total: i64,
    #[serde(default)]
    pub labor: Option<i64>,
    #[serde(default)]
    pub materials: Option<i64>,
    #[serde(default)]
    pub received: Option<NaiveDate>,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub interval_months: Option<u32>,
    #[serde(default)]
    pub last_serviced: Option<NaiveDate>,
    #[serde(default)]
    pub cost: Option<i64>,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

/// Every record the grid can show
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Household {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub quotes: Vec<Quote>,
    #[serde(default)]
    pub maintenance: Vec<MaintenanceItem>,
    #[serde(default)]
    pub vendors: Vec<Vendor>,
}

/// Format cents as `$1,234.56`
pub fn format_money(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}.{:02}", sign, grouped, abs % 100)
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

impl Household {
    /// Seed data used when no data file is given
    pub fn demo() -> Self {
        let projects = vec![
            Project {
                id: 1,
                title: "Kitchen backsplash".into(),
                kind: "Remodel".into(),
                status: ProjectStatus::Planned,
                budget: Some(250_000),
                actual: None,
                start: date(2025, 3, 1),
                end: None,
                deleted: false,
            },
            Project {
                id: 2,
                title: "Replace water heater".into(),
                kind: "Plumbing".into(),
                status: ProjectStatus::Underway,
                budget: Some(180_000),
                actual: Some(165_000),
                start: date(2025, 1, 12),
                end: None,
                deleted: false,
            },
            Project {
                id: 3,
                title: "Repaint fence".into(),
                kind: "Exterior".into(),
                status: ProjectStatus::Completed,
                budget: Some(60_000),
                actual: Some(72_500),
                start: date(2024, 6, 2),
                end: date(2024, 6, 30),
                deleted: false,
            },
            Project {
                id: 4,
                title: "Solar panels".into(),
                kind: "Electrical".into(),
                status: ProjectStatus::Ideating,
                budget: None,
                actual: None,
                start: None,
                end: None,
                deleted: false,
            },
            Project {
                id: 5,
                title: "Basement waterproofing".into(),
                kind: "Foundation".into(),
                status: ProjectStatus::Quoted,
                budget: Some(1_200_000),
                actual: None,
                start: date(2025, 9, 1),
                end: None,
                deleted: false,
            },
            Project {
                id: 6,
                title: "Hot tub".into(),
                kind: "Exterior".into(),
                status: ProjectStatus::Abandoned,
                budget: Some(900_000),
                actual: None,
                start: None,
                end: None,
                deleted: true,
            },
        ];

        let vendors = vec![
            Vendor {
                id: 1,
                name: "Tidewater Plumbing".into(),
                contact: Some("Rosa Mendez".into()),
                email: Some("rosa@tidewater.example".into()),
                phone: Some("555-0142".into()),
                website: None,
                deleted: false,
            },
            Vendor {
                id: 2,
                name: "Brightline Tile & Stone".into(),
                contact: Some("Dev Patel".into()),
                email: None,
                phone: Some("555-0199".into()),
                website: Some("brightline.example".into()),
                deleted: false,
            },
            Vendor {
                id: 3,
                name: "DryCore Foundations".into(),
                contact: None,
                email: Some("quotes@drycore.example".into()),
                phone: Some("555-0107".into()),
                website: Some("drycore.example".into()),
                deleted: false,
            },
        ];

        let quotes = vec![
            Quote {
                id: 1,
                project_id: 1,
                vendor_id: 2,
                total: 231_000,
                labor: Some(140_000),
                materials: Some(91_000),
                received: date(2025, 2, 10),
                deleted: false,
            },
            Quote {
                id: 2,
                project_id: 2,
                vendor_id: 1,
                total: 165_000,
                labor: Some(60_000),
                materials: Some(105_000),
                received: date(2024, 12, 20),
                deleted: false,
            },
            Quote {
                id: 3,
                project_id: 5,
                vendor_id: 3,
                total: 1_140_000,
                labor: None,
                materials: None,
                received: date(2025, 7, 14),
                deleted: false,
            },
            Quote {
                id: 4,
                project_id: 5,
                vendor_id: 1,
                total: 1_310_000,
                labor: Some(800_000),
                materials: Some(510_000),
                received: date(2025, 7, 30),
                deleted: false,
            },
        ];

        let maintenance = vec![
            MaintenanceItem {
                id: 1,
                name: "HVAC filter".into(),
                category: "HVAC".into(),
                interval_months: Some(3),
                last_serviced: date(2025, 8, 1),
                cost: Some(2_400),
                deleted: false,
            },
            MaintenanceItem {
                id: 2,
                name: "Gutter cleaning".into(),
                category: "Exterior".into(),
                interval_months: Some(6),
                last_serviced: date(2025, 4, 18),
                cost: Some(15_000),
                deleted: false,
            },
            MaintenanceItem {
                id: 3,
                name: "Smoke detector batteries".into(),
                category: "Safety".into(),
                interval_months: Some(12),
                last_serviced: None,
                cost: Some(1_800),
                deleted: false,
            },
            MaintenanceItem {
                id: 4,
                name: "Water heater flush".into(),
                category: "Plumbing".into(),
                interval_months: Some(12),
                last_serviced: date(2024, 11, 2),
                cost: None,
                deleted: false,
            },
            MaintenanceItem {
                id: 5,
                name: "Chimney sweep".into(),
                category: "Exterior".into(),
                interval_months: Some(24),
                last_serviced: date(2023, 10, 9),
                cost: Some(22_500),
                deleted: false,
            },
        ];

        Household {
            projects,
            quotes,
            maintenance,
            vendors,
        }
    }
}
