//! In-memory menu store. It owns the ordered dish collection and is the only
//! place that creates or removes items, so the uniqueness and price invariants
//! are enforced here rather than in the UI or the persistence layer.

use std::fmt;

use chrono::Utc;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::models::{Course, CourseAverage, CourseFilter, MenuItem, PLACEHOLDER_IMAGE};

/// Length of the random suffix appended to generated ids.
const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Form fields a validation error can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    Course,
    Price,
    Image,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "Dish name",
            Field::Description => "Description",
            Field::Course => "Course",
            Field::Price => "Price",
            Field::Image => "Image URL",
        };
        f.write_str(label)
    }
}

/// Reasons a candidate dish is rejected. Nothing is stored when one of these
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required.")]
    MissingField(Field),
    #[error("Please enter a valid price greater than 0.")]
    InvalidPrice,
    #[error("Please enter a valid image URL (starting with http:// or https://).")]
    InvalidImageUrl,
}

impl ValidationError {
    /// The field the user has to fix.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingField(field) => *field,
            ValidationError::InvalidPrice => Field::Price,
            ValidationError::InvalidImageUrl => Field::Image,
        }
    }
}

/// Raw user input for a new dish, exactly as typed. `add` trims and parses it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    pub course: Option<Course>,
    pub price: String,
    pub image: String,
}

/// Validated fields of a draft, ready to receive an id.
struct ValidDish {
    name: String,
    description: String,
    course: Course,
    price: f64,
    image: String,
}

impl MenuItemDraft {
    fn validate(&self) -> Result<ValidDish, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField(Field::Name));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::MissingField(Field::Description));
        }
        let price_raw = self.price.trim();
        if price_raw.is_empty() {
            return Err(ValidationError::MissingField(Field::Price));
        }
        let course = self
            .course
            .ok_or(ValidationError::MissingField(Field::Course))?;

        let price = price_raw
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price > 0.0)
            .ok_or(ValidationError::InvalidPrice)?;

        let image = self.image.trim();
        if !image.is_empty() && !is_web_url(image) {
            return Err(ValidationError::InvalidImageUrl);
        }
        let image = if image.is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            image.to_string()
        };

        Ok(ValidDish {
            name: name.to_string(),
            description: description.to_string(),
            course,
            price,
            image,
        })
    }
}

/// True when `raw` parses as an absolute URL with an http or https scheme.
pub fn is_web_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Ordered, id-unique collection of dishes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuStore {
    items: Vec<MenuItem>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an existing snapshot. Callers are expected to hand
    /// over items that already satisfy the invariants (see `db::load_menu`).
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Validate `draft` and append it with a fresh id. Returns the stored item.
    pub fn add(&mut self, draft: &MenuItemDraft) -> Result<&MenuItem, ValidationError> {
        let dish = draft.validate()?;
        let id = self.fresh_id();
        info!(id = %id, name = %dish.name, course = %dish.course, "adding dish");

        self.items.push(MenuItem {
            id,
            name: dish.name,
            description: dish.description,
            course: dish.course,
            price: dish.price,
            image: Some(dish.image),
        });
        Ok(&self.items[self.items.len() - 1])
    }

    /// Remove the dish with `id`, if any. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) -> Option<MenuItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(index);
        info!(id = %removed.id, name = %removed.name, "deleted dish");
        Some(removed)
    }

    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Dishes matching `filter`, in menu order.
    pub fn filter(&self, filter: CourseFilter) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    /// Count and mean price for each course, in menu order.
    pub fn average_by_course(&self) -> [CourseAverage; 3] {
        Course::ALL.map(|course| {
            let (count, total) = self
                .items
                .iter()
                .filter(|item| item.course == course)
                .fold((0usize, 0.0f64), |(count, total), item| {
                    (count + 1, total + item.price)
                });
            let average = if count > 0 { total / count as f64 } else { 0.0 };
            CourseAverage {
                course,
                count,
                average,
            }
        })
    }

    /// Swap in a whole new collection, as done when a snapshot is loaded.
    pub fn replace_all(&mut self, items: Vec<MenuItem>) {
        debug!(count = items.len(), "replacing menu contents");
        self.items = items;
    }

    fn fresh_id(&self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let candidate = generate_id(&mut rng);
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

/// Produce `<unix-millis>-<base36 suffix>`.
fn generate_id<R: Rng>(rng: &mut R) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, course: Course, price: &str) -> MenuItemDraft {
        MenuItemDraft {
            name: name.to_string(),
            description: format!("{name} description"),
            course: Some(course),
            price: price.to_string(),
            image: String::new(),
        }
    }

    fn store_with(prices: &[(Course, &str)]) -> MenuStore {
        let mut store = MenuStore::new();
        for (idx, (course, price)) in prices.iter().enumerate() {
            store
                .add(&draft(&format!("Dish {idx}"), *course, price))
                .unwrap();
        }
        store
    }

    #[test]
    fn add_appends_item_retrievable_by_id() {
        let mut store = store_with(&[(Course::Mains, "120")]);
        let before = store.len();

        let id = store
            .add(&draft("Malva Pudding", Course::Desserts, "65.5"))
            .unwrap()
            .id
            .clone();

        assert_eq!(store.len(), before + 1);
        let item = store.get(&id).unwrap();
        assert_eq!(item.name, "Malva Pudding");
        assert_eq!(item.price, 65.5);
        assert_eq!(store.list().last().unwrap().id, id);
    }

    #[test]
    fn add_trims_text_and_defaults_image() {
        let mut store = MenuStore::new();
        let mut candidate = draft("  Bobotie ", Course::Mains, " 150 ");
        candidate.description = "  Spiced mince bake.  ".into();

        let item = store.add(&candidate).unwrap();

        assert_eq!(item.name, "Bobotie");
        assert_eq!(item.description, "Spiced mince bake.");
        assert_eq!(item.image.as_deref(), Some(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn add_keeps_valid_image_url() {
        let mut store = MenuStore::new();
        let mut candidate = draft("Soup", Course::Starters, "40");
        candidate.image = "https://example.com/soup.jpg".into();

        let item = store.add(&candidate).unwrap();
        assert_eq!(item.image.as_deref(), Some("https://example.com/soup.jpg"));
    }

    #[test]
    fn add_rejects_non_positive_or_non_numeric_price() {
        let mut store = store_with(&[(Course::Starters, "85")]);
        let snapshot = store.clone();

        for price in ["0", "-5", "abc", "NaN", "inf"] {
            let err = store.add(&draft("Bad", Course::Mains, price)).unwrap_err();
            assert_eq!(err, ValidationError::InvalidPrice, "price {price}");
        }
        assert_eq!(store, snapshot);
    }

    #[test]
    fn add_reports_missing_fields_by_name() {
        let mut store = MenuStore::new();

        let mut no_name = draft("", Course::Mains, "10");
        no_name.name = "   ".into();
        assert_eq!(
            store.add(&no_name).unwrap_err(),
            ValidationError::MissingField(Field::Name)
        );

        let mut no_description = draft("Dish", Course::Mains, "10");
        no_description.description.clear();
        assert_eq!(
            store.add(&no_description).unwrap_err().field(),
            Field::Description
        );

        assert_eq!(
            store.add(&draft("Dish", Course::Mains, "")).unwrap_err(),
            ValidationError::MissingField(Field::Price)
        );

        let mut no_course = draft("Dish", Course::Mains, "10");
        no_course.course = None;
        assert_eq!(
            store.add(&no_course).unwrap_err(),
            ValidationError::MissingField(Field::Course)
        );

        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_non_web_urls() {
        let mut store = MenuStore::new();
        for image in ["not a url", "ftp://example.com/a.png", "javascript:alert(1)"] {
            let mut candidate = draft("Dish", Course::Mains, "10");
            candidate.image = image.into();
            assert_eq!(
                store.add(&candidate).unwrap_err(),
                ValidationError::InvalidImageUrl,
                "image {image}"
            );
        }
        assert!(store.is_empty());
    }

    #[test]
    fn generated_ids_are_unique() {
        let store = store_with(&[
            (Course::Starters, "1"),
            (Course::Starters, "2"),
            (Course::Mains, "3"),
            (Course::Desserts, "4"),
        ]);
        let mut ids: Vec<_> = store.list().iter().map(|item| item.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
        let (millis, suffix) = ids[0].split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), ID_SUFFIX_LEN);
    }

    #[test]
    fn delete_removes_only_matching_id() {
        let mut store = store_with(&[(Course::Starters, "10"), (Course::Mains, "20")]);
        let id = store.list()[0].id.clone();

        let removed = store.delete(&id).unwrap();

        assert_eq!(removed.id, id);
        assert!(store.list().iter().all(|item| item.id != id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let mut store = store_with(&[(Course::Starters, "10")]);
        let before = store.clone();

        assert!(store.delete("missing").is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn filter_keeps_order_and_course() {
        let store = store_with(&[
            (Course::Mains, "1"),
            (Course::Starters, "2"),
            (Course::Mains, "3"),
            (Course::Desserts, "4"),
            (Course::Mains, "5"),
        ]);

        let expected: Vec<&MenuItem> = store
            .list()
            .iter()
            .filter(|item| item.course == Course::Mains)
            .collect();
        assert_eq!(store.filter(CourseFilter::Only(Course::Mains)), expected);
        assert_eq!(store.filter(CourseFilter::All).len(), store.len());
    }

    #[test]
    fn averages_cover_every_course() {
        let store = store_with(&[
            (Course::Starters, "85"),
            (Course::Starters, "75"),
            (Course::Starters, "95"),
            (Course::Mains, "180"),
        ]);

        let [starters, mains, desserts] = store.average_by_course();
        assert_eq!((starters.course, starters.count), (Course::Starters, 3));
        assert!((starters.average - 85.0).abs() < f64::EPSILON);
        assert_eq!((mains.count, mains.average), (1, 180.0));
        assert_eq!((desserts.count, desserts.average), (0, 0.0));
    }

    #[test]
    fn web_url_check_requires_http_scheme() {
        assert!(is_web_url("http://example.com"));
        assert!(is_web_url("https://example.com/a?b=c"));
        assert!(!is_web_url("example.com"));
        assert!(!is_web_url("file:///etc/passwd"));
    }
}
