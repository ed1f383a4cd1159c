#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct NoteRecord {
    pub slug: String,
    pub path: String,
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}
