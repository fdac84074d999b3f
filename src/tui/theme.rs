use ratatui::style::Color;

// Logo colors (circumflex-inspired)
pub const LOGO_CORAL: Color = Color::Rgb(232, 131, 136);     // #E88388
pub const LOGO_GOLD: Color = Color::Rgb(219, 171, 121);      // #DBAB79
pub const LOGO_LIGHT_BLUE: Color = Color::Rgb(124, 175, 194); // #7CAFC2
pub const LOGO_MINT: Color = Color::Rgb(161, 193, 129);       // #A1C181

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);        // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);      // #FFFFFF
