//! # Contact form model and validation
//!
//! [`ContactForm`] holds the raw text of the five inputs. [`ContactForm::errors`] applies
//! the field rules and [`ContactForm::submit`] turns a valid form into a [`NewContact`],
//! normalizing the phone number to `XXX-XXX-XXXX` on the way out.
//!
//! | Field | Rules |
//! |-------|-------|
//! | First / last name | required, 2 to 50 characters |
//! | Email | required, email-shaped |
//! | Phone number | required, exactly ten digits, North-American layout |
//! | Age | required, whole number, 1 to 120 |

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use store::{Contact, NewContact};

/// Same shape browsers accept for `<input type="email">`.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// `1234567890`, `123-456-7890`, `123 456 7890`, `(123) 456-7890`.
static NORTH_AMERICAN_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\(?\d{3}\)?[\s\-]?)?\d{3}[\s\-]?\d{4}$").expect("phone pattern is valid")
});

const DEFAULT_AGE: &str = "18";

/// One of the five editable inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Age,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::PhoneNumber,
        Field::Age,
    ];

    /// Input name, matching the JSON key.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::Age => "age",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number (123-456-7890)",
            Field::Age => "Age",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Age => "number",
            _ => "text",
        }
    }
}

/// Per-field messages for a form that failed validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, &'static str>);

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Raw input values of the contact dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub age: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            age: DEFAULT_AGE.to_string(),
        }
    }
}

impl ContactForm {
    /// Initial values: the contact being edited, or blanks with age 18.
    pub fn from_contact(contact: Option<&Contact>) -> Self {
        match contact {
            Some(c) => Self {
                first_name: c.first_name.clone(),
                last_name: c.last_name.clone(),
                email: c.email.clone(),
                phone_number: c.phone_number.clone(),
                age: c.age.to_string(),
            },
            None => Self::default(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Age => &self.age,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::PhoneNumber => self.phone_number = value,
            Field::Age => self.age = value,
        }
    }

    pub fn errors(&self) -> FormErrors {
        let checks = [
            (Field::FirstName, check_name(&self.first_name, "First name is required")),
            (Field::LastName, check_name(&self.last_name, "Last name is required")),
            (Field::Email, check_email(&self.email)),
            (Field::PhoneNumber, check_phone(&self.phone_number)),
            (Field::Age, parse_age(&self.age).err()),
        ];
        FormErrors(
            checks
                .into_iter()
                .filter_map(|(field, error)| error.map(|message| (field, message)))
                .collect(),
        )
    }

    /// Validate and produce the contact to save, with the phone number normalized.
    pub fn submit(&self) -> Result<NewContact, FormErrors> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }
        let age = parse_age(&self.age).map_err(|_| errors.clone())?;

        Ok(NewContact {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone_number: normalize_phone(&self.phone_number),
            age,
        })
    }
}

fn check_name(value: &str, required: &'static str) -> Option<&'static str> {
    match value.chars().count() {
        0 => Some(required),
        1 => Some("Too Short!"),
        n if n > 50 => Some("Too Long!"),
        _ => None,
    }
}

fn check_email(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("Email is required")
    } else if !EMAIL.is_match(value) {
        Some("Invalid email")
    } else {
        None
    }
}

fn check_phone(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("Phone number is required")
    } else if value.chars().filter(char::is_ascii_digit).count() != 10 {
        Some("Phone number must be 10 digits")
    } else if !NORTH_AMERICAN_PHONE.is_match(value) {
        Some("Phone number format is invalid")
    } else {
        None
    }
}

fn parse_age(value: &str) -> Result<i64, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Age is required");
    }
    let age: i64 = value.parse().map_err(|_| "Age must be a whole number")?;
    match age {
        a if a < 1 => Err("Age must be at least 1"),
        a if a > 120 => Err("Age must be less than 120"),
        a => Ok(a),
    }
}

/// Strip non-digits; ten digits come back as `XXX-XXX-XXXX`, anything else as the digits.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        digits
    }
}
