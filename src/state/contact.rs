// Contact tab input state.
// Holds the subject and message being typed and which one has focus.

/// Input field with focus on the Contact tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Subject,
    Message,
}

/// Draft message for the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    pub subject: String,
    pub message: String,
    pub focus: ContactField,
    /// Whether keystrokes go into the draft instead of the app shortcuts.
    pub editing: bool,
}

impl ContactDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            ContactField::Subject => ContactField::Message,
            ContactField::Message => ContactField::Subject,
        };
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn push(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn clear(&mut self) {
        self.subject.clear();
        self.message.clear();
        self.focus = ContactField::Subject;
    }
}
