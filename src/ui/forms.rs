use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{Course, MenuItem};
use crate::store::{Field, MenuItemDraft};

/// Internal representation of the "add dish" form.
#[derive(Default, Clone)]
pub(crate) struct DishForm {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) price: String,
    pub(crate) image: String,
    pub(crate) course: Option<Course>,
    pub(crate) active: DishField,
    pub(crate) error: Option<String>,
}

/// Fields available within the dish form, in tab order.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub(crate) enum DishField {
    #[default]
    Name,
    Description,
    Price,
    Image,
    Course,
}

impl DishField {
    pub(crate) const ORDER: [DishField; 5] = [
        DishField::Name,
        DishField::Description,
        DishField::Price,
        DishField::Image,
        DishField::Course,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            DishField::Name => "Dish Name",
            DishField::Description => "Description",
            DishField::Price => "Price (R)",
            DishField::Image => "Image URL",
            DishField::Course => "Course",
        }
    }

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }
}

impl From<Field> for DishField {
    fn from(field: Field) -> Self {
        match field {
            Field::Name => DishField::Name,
            Field::Description => DishField::Description,
            Field::Price => DishField::Price,
            Field::Image => DishField::Image,
            Field::Course => DishField::Course,
        }
    }
}

impl DishForm {
    pub(crate) fn focus(&mut self, field: DishField) {
        self.active = field;
    }

    pub(crate) fn next_field(&mut self) {
        let order = DishField::ORDER;
        self.active = order[(self.active.position() + 1) % order.len()];
    }

    pub(crate) fn previous_field(&mut self) {
        let order = DishField::ORDER;
        self.active = order[(self.active.position() + order.len() - 1) % order.len()];
    }

    /// Step the course picker forward. An unset picker starts at Starters.
    pub(crate) fn next_course(&mut self) {
        self.course = Some(self.course.map_or(Course::Starters, Course::next));
    }

    pub(crate) fn previous_course(&mut self) {
        self.course = Some(self.course.map_or(Course::Desserts, Course::previous));
    }

    /// Append a character to the active field. Price accepts digits and a
    /// decimal point only; the course field takes no text.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            DishField::Name => self.name.push(ch),
            DishField::Description => self.description.push(ch),
            DishField::Image => self.image.push(ch),
            DishField::Price => {
                if ch.is_ascii_digit() || (ch == '.' && !self.price.contains('.')) {
                    self.price.push(ch);
                } else {
                    return false;
                }
            }
            DishField::Course => return false,
        }
        true
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            DishField::Name => {
                self.name.pop();
            }
            DishField::Description => {
                self.description.pop();
            }
            DishField::Price => {
                self.price.pop();
            }
            DishField::Image => {
                self.image.pop();
            }
            DishField::Course => self.course = None,
        }
    }

    /// Snapshot the inputs for the store to validate.
    pub(crate) fn to_draft(&self) -> MenuItemDraft {
        MenuItemDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            course: self.course,
            price: self.price.clone(),
            image: self.image.clone(),
        }
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field: DishField) -> Line<'static> {
        let is_active = self.active == field;
        let (display, is_empty) = match field {
            DishField::Course => match self.course {
                Some(course) => (format!("< {course} >"), false),
                None => ("< select a course >".to_string(), true),
            },
            _ => {
                let value = self.value(field);
                if value.is_empty() {
                    let hint = if field == DishField::Image {
                        "<optional>"
                    } else {
                        "<required>"
                    };
                    (hint.to_string(), true)
                } else {
                    (value.to_string(), false)
                }
            }
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if is_empty {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }

    /// Character count of a text field, used to place the cursor.
    pub(crate) fn value_len(&self, field: DishField) -> usize {
        self.value(field).chars().count()
    }

    fn value(&self, field: DishField) -> &str {
        match field {
            DishField::Name => &self.name,
            DishField::Description => &self.description,
            DishField::Price => &self.price,
            DishField::Image => &self.image,
            DishField::Course => "",
        }
    }
}

/// Dish awaiting confirmation before it is removed.
#[derive(Clone)]
pub(crate) struct ConfirmDishDelete {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) course: Course,
}

impl ConfirmDishDelete {
    pub(crate) fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            course: item.course,
        }
    }
}
