use enum_label_derive::EnumLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumLabel)]
pub enum TimeoutLength {
	#[label = "short"]
	Short,
	#[label = "full"]
	Full,
	#[label = "media"]
	Media,
}

fn main() {
	assert_eq!(TimeoutLength::Short.label(), "short");
	assert_eq!(TimeoutLength::Media.to_string(), "media");
	assert_eq!(TimeoutLength::from_label("full"), Some(TimeoutLength::Full));
	assert_eq!(TimeoutLength::from_label("twenty"), None);
	assert_eq!(TimeoutLength::LABELS, &["short", "full", "media"]);
}
