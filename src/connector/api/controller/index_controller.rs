/// Single-page chat UI, compiled into the binary.
const INDEX_HTML: &str = include_str!("../../../../assets/index.html");

#[derive(Default)]
pub struct IndexController;

impl IndexController {
    pub fn new() -> Self {
        Self
    }

    pub fn page(&self) -> &'static str {
        INDEX_HTML
    }
}
