#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    File,
    Text,
}

impl Tab {
    /// Resolves a tab identifier. Anything other than `"file"` selects the
    /// text tab.
    pub fn from_id(id: &str) -> Self {
        if id == "file" {
            Tab::File
        } else {
            Tab::Text
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Tab::File => "file",
            Tab::Text => "text",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::File => "Upload File",
            Tab::Text => "Enter Text",
        }
    }
}
