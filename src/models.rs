//! Domain models shared by the store, the persistence layer and the TUI. The
//! types stay plain data holders; validation lives in `store` and rendering in
//! `ui`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Image stored for dishes added without an explicit picture.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836?auto=format&fit=crop&w=800&q=80";

/// The fixed set of menu sections a dish can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    Starters,
    Mains,
    Desserts,
}

impl Course {
    /// Every course in menu order. Averages and pickers iterate this slice.
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Desserts];

    pub fn label(self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Desserts => "Desserts",
        }
    }

    /// Next course in menu order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Course::Starters => Course::Mains,
            Course::Mains => Course::Desserts,
            Course::Desserts => Course::Starters,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Course::Starters => Course::Desserts,
            Course::Mains => Course::Starters,
            Course::Desserts => Course::Mains,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string does not name a known course or filter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown course `{0}`")]
pub struct UnknownCourse(pub String);

impl FromStr for Course {
    type Err = UnknownCourse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Course::ALL
            .into_iter()
            .find(|course| course.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCourse(trimmed.to_string()))
    }
}

/// One dish on the menu. Items are never edited in place: the store appends
/// new ones and removes old ones wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Opaque identifier assigned by the store. Unique within a collection.
    pub id: String,
    pub name: String,
    pub description: String,
    pub course: Course,
    /// Always strictly positive for items created through the store.
    pub price: f64,
    /// Optional picture reference. Omitted from the snapshot when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl MenuItem {
    /// Price formatted for display, e.g. `R 85.00`.
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Format an amount in rand with two decimals and space-separated thousands,
/// e.g. `R 1 234.50`.
pub fn format_price(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("R {sign}{grouped}.{cents}")
}

/// Selection used by the filter screen: everything, or a single course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Only(Course),
}

impl CourseFilter {
    /// Filter options in the order the filter screen presents them.
    pub const OPTIONS: [CourseFilter; 4] = [
        CourseFilter::All,
        CourseFilter::Only(Course::Starters),
        CourseFilter::Only(Course::Mains),
        CourseFilter::Only(Course::Desserts),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CourseFilter::All => "All",
            CourseFilter::Only(course) => course.label(),
        }
    }

    pub fn matches(self, item: &MenuItem) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Only(course) => item.course == course,
        }
    }

    pub fn next(self) -> Self {
        match self {
            CourseFilter::All => CourseFilter::Only(Course::Starters),
            CourseFilter::Only(Course::Desserts) => CourseFilter::All,
            CourseFilter::Only(course) => CourseFilter::Only(course.next()),
        }
    }

    pub fn previous(self) -> Self {
        match self {
            CourseFilter::All => CourseFilter::Only(Course::Desserts),
            CourseFilter::Only(Course::Starters) => CourseFilter::All,
            CourseFilter::Only(course) => CourseFilter::Only(course.previous()),
        }
    }
}

impl From<Course> for CourseFilter {
    fn from(course: Course) -> Self {
        CourseFilter::Only(course)
    }
}

impl fmt::Display for CourseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CourseFilter {
    type Err = UnknownCourse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CourseFilter::All)
        } else {
            s.parse::<Course>().map(CourseFilter::Only)
        }
    }
}

/// Number of dishes and mean price for one course.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseAverage {
    pub course: Course,
    pub count: usize,
    /// Zero when `count` is zero.
    pub average: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_parses_case_insensitively() {
        assert_eq!("mains".parse::<Course>(), Ok(Course::Mains));
        assert_eq!(" Desserts ".parse::<Course>(), Ok(Course::Desserts));
        assert!("Sides".parse::<Course>().is_err());
    }

    #[test]
    fn filter_parses_all_and_courses() {
        assert_eq!("All".parse::<CourseFilter>(), Ok(CourseFilter::All));
        assert_eq!(
            "Starters".parse::<CourseFilter>(),
            Ok(CourseFilter::Only(Course::Starters))
        );
    }

    #[test]
    fn filter_cycle_visits_every_option() {
        let mut filter = CourseFilter::All;
        let mut seen = Vec::new();
        for _ in 0..CourseFilter::OPTIONS.len() {
            seen.push(filter);
            filter = filter.next();
        }
        assert_eq!(seen, CourseFilter::OPTIONS.to_vec());
        assert_eq!(filter, CourseFilter::All);
        assert_eq!(CourseFilter::All.previous(), CourseFilter::Only(Course::Desserts));
    }

    #[test]
    fn snapshot_shape_omits_missing_image() {
        let item = MenuItem {
            id: "1".into(),
            name: "Soup".into(),
            description: "Hot.".into(),
            course: Course::Starters,
            price: 85.0,
            image: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["course"], "Starters");
        assert!(json.get("image").is_none());
    }

    #[test]
    fn prices_render_with_two_decimals() {
        assert_eq!(format_price(85.0), "R 85.00");
        assert_eq!(format_price(12.5), "R 12.50");
    }

    #[test]
    fn large_prices_group_thousands() {
        assert_eq!(format_price(1234.5), "R 1 234.50");
        assert_eq!(format_price(999.999), "R 1 000.00");
        assert_eq!(format_price(1234567.0), "R 1 234 567.00");
    }
}
