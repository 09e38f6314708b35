//! Card-room theme colors

use ratatui::style::Color;

// Table felt (primary accent)
pub const FELT: Color = Color::Rgb(0, 122, 77); // #007A4D
pub const FELT_BRIGHT: Color = Color::Rgb(46, 184, 114); // #2EB872

// Chips
pub const CHIP_GOLD: Color = Color::Rgb(255, 191, 0); // #FFBF00 - blinds
pub const CHIP_RED: Color = Color::Rgb(214, 40, 40); // #D62828 - errors, paused clock
pub const CHIP_BLUE: Color = Color::Rgb(72, 149, 239); // #4895EF - scaled curve

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(240, 240, 240); // #F0F0F0
pub const TEXT_DIM: Color = Color::Rgb(102, 102, 102); // #666666
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170); // #AAAAAA

// Borders
pub const BORDER_ACTIVE: Color = FELT_BRIGHT;
pub const BORDER_INACTIVE: Color = Color::Rgb(68, 68, 68); // #444444
