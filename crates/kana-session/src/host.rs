//! The form field that owns the committed string.

/// Host side of the composition surface.
///
/// The session never stores committed text anywhere else: it reads the
/// value and length limit from here and reports every change back.
pub trait HostField {
    fn value(&self) -> String;
    /// Maximum length in characters, if the field has one.
    fn max_length(&self) -> Option<usize>;
    fn on_value_change(&mut self, new_value: &str);
}

impl<H: HostField + ?Sized> HostField for &mut H {
    fn value(&self) -> String {
        (**self).value()
    }

    fn max_length(&self) -> Option<usize> {
        (**self).max_length()
    }

    fn on_value_change(&mut self, new_value: &str) {
        (**self).on_value_change(new_value)
    }
}

impl<H: HostField + ?Sized> HostField for Box<H> {
    fn value(&self) -> String {
        (**self).value()
    }

    fn max_length(&self) -> Option<usize> {
        (**self).max_length()
    }

    fn on_value_change(&mut self, new_value: &str) {
        (**self).on_value_change(new_value)
    }
}

/// In-memory field. Keeps every value it was handed, oldest first.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    max_length: Option<usize>,
    changes: Vec<String>,
}

impl TextField {
    pub fn new(value: impl Into<String>, max_length: Option<usize>) -> Self {
        Self {
            value: value.into(),
            max_length,
            changes: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn changes(&self) -> &[String] {
        &self.changes
    }

    pub fn set_max_length(&mut self, max_length: Option<usize>) {
        self.max_length = max_length;
    }

    /// Replace the value from outside the session (e.g. a form reset).
    pub fn replace(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl HostField for TextField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    fn on_value_change(&mut self, new_value: &str) {
        self.value = new_value.to_string();
        self.changes.push(new_value.to_string());
    }
}
