use std::fmt;

/// A flat record with one integer and one text field.
///
/// Fields are fixed at construction; equality is field-wise.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Record {
    int_value: i32,
    text_value: String,
}

impl Record {
    pub fn new(int_value: i32, text_value: impl Into<String>) -> Self {
        Self {
            int_value,
            text_value: text_value.into(),
        }
    }

    pub fn int_value(&self) -> i32 {
        self.int_value
    }

    pub fn text_value(&self) -> &str {
        &self.text_value
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record({}, {:?})", self.int_value, self.text_value)
    }
}
