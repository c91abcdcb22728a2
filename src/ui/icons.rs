pub struct Icons;

impl Icons {
    pub const ROCKET: &str = "🚀";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
    pub const DATABASE: &str = "🗄️";
    pub const PACKAGE: &str = "📦";
    pub const PERSON: &str = "👤";
    pub const CARD: &str = "💳";
    pub const CART: &str = "🛒";
    pub const GLOBE: &str = "🌍";
    pub const GEAR: &str = "⚙️";
    pub const CLOCK: &str = "⏱️";
}
