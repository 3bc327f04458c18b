use enum_label_derive::EnumLabel;

#[derive(EnumLabel)]
pub struct Score {
    pub away: u16,
}

#[derive(EnumLabel)]
pub enum Shot {
    #[label = "made"]
    Made(u8),
}

#[derive(EnumLabel)]
pub enum TimeoutLength {
    #[label = "short"]
    Short,
    Full,
}

#[derive(EnumLabel)]
pub enum ArrowKind {
    #[label = "held ball"]
    HeldBall,
    #[label = "held ball"]
    BlockTieUp,
}

fn main() {}
