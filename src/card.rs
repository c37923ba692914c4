/// Data structures for directory cards and filter categories

/// One directory entry as read from its rendered card
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardRecord {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub hint: Option<String>,
}

impl CardRecord {
    pub fn new(title: &str, description: &str, tags: &[&str]) -> CardRecord {
        CardRecord {
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            hint: None,
        }
    }
}

/// Category filter buttons shown above the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Chat,
    Images,
    Code,
    Writing,
}

impl Category {
    /// Button order in the filter row
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Chat,
        Category::Images,
        Category::Code,
        Category::Writing,
    ];

    /// The `data-filter` value, matched against tag text
    pub fn value(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Chat => "Conversational AI",
            Category::Images => "Image Generation",
            Category::Code => "Coding",
            Category::Writing => "Writing",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Chat => "Chat",
            Category::Images => "Images",
            Category::Code => "Code",
            Category::Writing => "Writing",
        }
    }

    pub fn from_value(value: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.value() == value)
    }
}
