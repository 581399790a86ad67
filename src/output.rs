use owo_colors::OwoColorize;

/// カテゴリトークンから見出しを生成する
///
/// トークンなし（または空）は "All Schemes"。それ以外は先頭を大文字、
/// 残りを小文字にして " Schemes" を付ける。
pub fn category_heading(token: Option<&str>) -> String {
    let Some(token) = token else {
        return "All Schemes".to_string();
    };

    let mut chars = token.chars();
    match chars.next() {
        None => "All Schemes".to_string(),
        Some(first) => format!(
            "{}{} Schemes",
            first.to_uppercase(),
            chars.as_str().to_lowercase()
        ),
    }
}

/// 期限バッジを整形する
pub fn deadline_badge(deadline: &str) -> String {
    format!("Deadline: {}", deadline.red())
}

pub struct ResultSummary {
    pub prefix: String,
    pub message: String,
}

impl ResultSummary {
    pub fn format(shown: usize, total: usize) -> Self {
        match (shown, total) {
            (0, _) => Self {
                prefix: "•".yellow().to_string(),
                message: "No schemes found matching your search criteria".to_string(),
            },
            (s, t) if s < t => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} of {} scheme(s)", s.green(), t),
            },
            (s, _) => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} scheme(s)", s.green()),
            },
        }
    }
}
